//! Systematic encode and the syndrome → Berlekamp–Massey → Chien-search → Forney
//! decode pipeline.

use crate::error::{DecodeFail, Error, Result};
use crate::field::{Element, Field};
use crate::poly::Polynomial;

/// Systematically encode `message` against `generator`, whose degree is the parity
/// length `e`. Returns a codeword of length `message.len() + e` with the message in
/// the high coefficients and the parity in the low coefficients, per §4.5:
///
/// 1. `p(x) = m(x) * x^e`.
/// 2. `r(x) = p(x) mod g(x)`.
/// 3. `c(x) = p(x) - r(x)`.
pub fn encode<'f>(field: &'f Field, generator: &Polynomial<Element<'f>>, message: &[Element<'f>]) -> Result<Vec<Element<'f>>> {
    let e = generator.degree().expect("generator must be non-zero");

    let p = Polynomial::new(message.to_vec()).shift_up(e);
    let r = p.rem(generator)?;
    let c = p.sub(&r);

    let n = message.len() + e;
    Ok((0..n).map(|i| c.coef(i)).collect())
}

/// Outcome of a successful decode: whether any correction was applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// All syndromes were already zero; the buffer is untouched.
    NoErrors,
    /// `count` positions were corrected in place.
    Corrected { count: usize },
}

/// Syndromes of `received`, evaluated at `count` consecutive powers of `α` starting at
/// `α^first_root` (§4.6 Step 1). `first_root` must match the first root exponent the
/// code's generator was actually built from: `rs_generator` uses `α^0, .., α^(e-1)`
/// (`first_root = 0`), while `bch_generator` uses `α^1, .., α^(2t)` (`first_root = 1`).
/// Evaluating at the wrong starting exponent produces a syndrome sequence that is
/// non-zero even for a codeword with no errors, since it is no longer sampling only
/// the generator's own roots.
fn syndromes<'f>(
    field: &'f Field,
    received: &Polynomial<Element<'f>>,
    first_root: u32,
    count: usize,
) -> Vec<Element<'f>> {
    let alpha = field.alpha();
    (0..count as u32)
        .map(|i| received.eval(&alpha.pow(first_root + i)))
        .collect()
}

/// Berlekamp–Massey key-equation solver (§4.6 Step 2), implemented exactly per the
/// discrepancy-and-save-T recurrence: `C`/`B` track the current and previous
/// shortest-LFSR polynomials, `l` is the current LFSR length, and `m_gap` counts how
/// many steps have passed since `b` last changed.
fn berlekamp_massey<'f>(field: &'f Field, s: &[Element<'f>]) -> Polynomial<Element<'f>> {
    let one = Element::one(field);
    let mut c = Polynomial::new(vec![one]);
    let mut b = Polynomial::new(vec![one]);
    let mut l = 0usize;
    let mut m_gap = 1usize;
    let mut b_val = one;

    for n in 0..s.len() {
        let mut d = s[n];
        for i in 1..=l {
            d = d.add(&c.coef(i).mul(&s[n - i]));
        }

        if d.is_zero() {
            m_gap += 1;
        } else if 2 * l <= n {
            let t = c.clone();
            let correction = b.shift_up(m_gap).scale(&d.div(&b_val).expect("b_val is never zero by construction"));
            c = c.sub(&correction);
            l = n + 1 - l;
            b = t;
            b_val = d;
            m_gap = 1;
        } else {
            let correction = b.shift_up(m_gap).scale(&d.div(&b_val).expect("b_val is never zero by construction"));
            c = c.sub(&correction);
            m_gap += 1;
        }
    }

    c
}

/// Chien search (§4.6 Step 3): positions `i` in `[0, n)` with `Λ(α^-i) = 0`.
fn chien_search<'f>(field: &'f Field, locator: &Polynomial<Element<'f>>, n: usize) -> Vec<usize> {
    let alpha = field.alpha();
    let alpha_inv = alpha.inv().expect("alpha is never zero");

    (0..n)
        .filter(|&i| locator.eval(&alpha_inv.pow(i as u32)).is_zero())
        .collect()
}

/// Forney's magnitude formula (§4.6 Step 4) for each error position. `Ω(x) = (S(x)
/// Λ(x)) mod x^(2t)` where `S(x)` is built directly from the `syndromes` sequence
/// (coefficient `i` is the `i`-th syndrome passed in, i.e. the one evaluated at
/// `α^(first_root + i)`); the sign of `y` is already folded in here, so callers add
/// `y` back into the buffer (§4.6 Step 5 / §9 resolved convention).
///
/// The general formula is `y_l = -X_l^(1 - first_root) * Ω(X_l^-1) / Λ'(X_l^-1)`: the
/// power of `X_l` out front depends on where the consecutive run of syndrome roots
/// starts, not just on `Ω` and `Λ'`. For `first_root = 0` (RS) that's `X_l^1`, matching
/// the textbook `-X * Ω(X^-1) / Λ'(X^-1)` form; for `first_root = 1` (BCH) the exponent
/// is `0` and the `X_l` factor drops out entirely. Passing the wrong `first_root` here
/// reproduces the true error positions but the wrong magnitudes, a mismatch the
/// zero-syndrome re-check after correction still catches.
fn forney<'f>(
    field: &'f Field,
    syndromes: &[Element<'f>],
    locator: &Polynomial<Element<'f>>,
    positions: &[usize],
    first_root: u32,
) -> Vec<(usize, Element<'f>)> {
    let e = syndromes.len();
    let s_poly = Polynomial::new(syndromes.to_vec());
    let x_e = {
        let mut coefs = vec![Element::zero(field); e + 1];
        coefs[e] = Element::one(field);
        Polynomial::new(coefs)
    };

    let omega = s_poly.mul(locator).rem(&x_e).expect("x^e is monic");
    let locator_deriv = locator.deriv();

    let alpha = field.alpha();
    let order1 = (field.order() - 1) as u64;
    let exponent = (((1u64 + order1) - (first_root as u64 % order1)) % order1) as u32;

    positions
        .iter()
        .map(|&pos| {
            let x = alpha.pow(pos as u32);
            let x_inv = x.inv().expect("alpha powers are never zero");

            let numer = omega.eval(&x_inv);
            let denom = locator_deriv.eval(&x_inv);

            let x_factor = x.pow(exponent);
            let y = x_factor.neg().mul(&numer).div(&denom).expect("derivative at a simple root is never zero");
            (pos, y)
        })
        .collect()
}

/// Decode `received` (length `n`), correcting it in place. `t` is the code's
/// correction capacity; `first_root` is the exponent of the generator's first
/// consecutive root (`0` for `rs_generator`, `1` for `bch_generator` — see
/// [`syndromes`]). Exactly `2t` syndromes are taken, at `α^first_root .. α^(first_root
/// + 2t - 1)`, matching the `2t` consecutive roots every code in this core is built
/// from regardless of the generator's full degree. Returns the outcome, or a
/// `DecodeFail` per §4.6's three failure signals.
pub fn decode<'f>(
    field: &'f Field,
    received: &mut [Element<'f>],
    t: usize,
    first_root: u32,
) -> Result<DecodeOutcome> {
    let n = received.len();

    let received_poly = Polynomial::new(received.to_vec());
    let s = syndromes(field, &received_poly, first_root, 2 * t);

    if s.iter().all(|x| x.is_zero()) {
        return Ok(DecodeOutcome::NoErrors);
    }

    let locator = berlekamp_massey(field, &s);
    let deg = locator.degree().unwrap_or(0);

    if deg > t {
        return Err(Error::DecodeFail(DecodeFail::LocatorTooLarge));
    }

    let positions = chien_search(field, &locator, n);
    if positions.len() != deg {
        return Err(Error::DecodeFail(DecodeFail::RootCount));
    }

    let corrections = forney(field, &s, &locator, &positions, first_root);

    let mut corrected = received.to_vec();
    for &(pos, y) in &corrections {
        corrected[pos] = corrected[pos].add(&y);
    }

    let verify_poly = Polynomial::new(corrected.clone());
    let verify = syndromes(field, &verify_poly, first_root, 2 * t);
    if !verify.iter().all(|x| x.is_zero()) {
        return Err(Error::DecodeFail(DecodeFail::VerifyFailed));
    }

    received.copy_from_slice(&corrected);

    Ok(DecodeOutcome::Corrected { count: corrections.len() })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::code::rs_generator;

    #[test]
    fn test_encode_is_systematic() {
        let field = Field::new(2, 8, 2, vec![1, 0, 1, 1, 1, 0, 0, 0, 1]).unwrap();
        let g = rs_generator(&field, 4);

        let message: Vec<Element> = (0..12).map(|i| Element::from_integer(&field, 5 + i)).collect();
        let codeword = encode(&field, &g, &message).unwrap();

        assert_eq!(codeword.len(), 16);
        for i in 0..12 {
            assert_eq!(codeword[4 + i], message[i]);
        }
    }

    #[test]
    fn test_decode_no_errors_is_identity() {
        let field = Field::new(2, 8, 2, vec![1, 0, 1, 1, 1, 0, 0, 0, 1]).unwrap();
        let g = rs_generator(&field, 4);

        let message: Vec<Element> = (0..12).map(|_| Element::from_integer(&field, 5)).collect();
        let mut codeword = encode(&field, &g, &message).unwrap();

        let outcome = decode(&field, &mut codeword, 2, 0).unwrap();
        assert_eq!(outcome, DecodeOutcome::NoErrors);
    }

    #[test]
    fn test_decode_corrects_two_errors() {
        let field = Field::new(2, 8, 2, vec![1, 0, 1, 1, 1, 0, 0, 0, 1]).unwrap();
        let g = rs_generator(&field, 4);

        let message: Vec<Element> = (0..12).map(|_| Element::from_integer(&field, 5)).collect();
        let codeword = encode(&field, &g, &message).unwrap();

        let mut received = codeword.clone();
        received[1] = received[1].add(&Element::from_integer(&field, 77));
        received[10] = received[10].add(&Element::from_integer(&field, 201));

        let outcome = decode(&field, &mut received, 2, 0).unwrap();
        assert_eq!(outcome, DecodeOutcome::Corrected { count: 2 });
        assert_eq!(&received[..], &codeword[..]);
    }
}
