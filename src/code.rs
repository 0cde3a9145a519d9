//! Generator-polynomial construction for Reed–Solomon and BCH codes.

use crate::field::{minimal_polynomial, Element, Field};
use crate::poly::Polynomial;

/// RS generator of length `e` over GF(pᵏ) with primitive `α`: `g(x) = Π_{i=0}^{e-1} (x - α^i)`.
pub fn rs_generator<'f>(field: &'f Field, e: usize) -> Polynomial<Element<'f>> {
    let alpha = field.alpha();
    let mut g = Polynomial::new(vec![Element::one(field)]);

    for i in 0..e {
        let root = alpha.pow(i as u32);
        let factor = Polynomial::new(vec![root.neg(), Element::one(field)]);
        g = g.mul(&factor);
    }

    g
}

/// BCH generator for `t`-error correction: the product of the deduplicated minimal
/// polynomials of `α¹, α², …, α^(2t)` (their LCM, since they are pairwise coprime or
/// equal).
pub fn bch_generator<'f>(field: &'f Field, t: usize) -> Polynomial<Element<'f>> {
    let alpha = field.alpha();
    let mut factors: Vec<Polynomial<Element<'f>>> = Vec::new();

    for i in 1..=(2 * t) {
        let beta = alpha.pow(i as u32);
        let m = minimal_polynomial(field, beta);
        if !factors.iter().any(|existing| *existing == m) {
            factors.push(m);
        }
    }

    let mut g = Polynomial::new(vec![Element::one(field)]);
    for m in &factors {
        g = g.mul(m);
    }
    g
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rs_generator_degree() {
        let field = Field::new(2, 8, 2, vec![1, 0, 1, 1, 1, 0, 0, 0, 1]).unwrap();
        let g = rs_generator(&field, 4);
        assert_eq!(g.degree(), Some(4));
    }

    #[test]
    fn test_rs_generator_has_roots() {
        let field = Field::new(2, 8, 2, vec![1, 0, 1, 1, 1, 0, 0, 0, 1]).unwrap();
        let g = rs_generator(&field, 4);
        let alpha = field.alpha();
        for i in 0..4 {
            assert!(g.eval(&alpha.pow(i)).is_zero());
        }
    }

    #[test]
    fn test_bch_generator_degree() {
        // GF(2^6), x^6 + x + 1, alpha = x (integer form 2).
        let field = Field::new(2, 6, 2, vec![1, 1, 0, 0, 0, 0, 1]).unwrap();
        let g6 = bch_generator(&field, 6);
        assert_eq!(g6.degree(), Some(33));

        let g3 = bch_generator(&field, 3);
        assert_eq!(g3.degree(), Some(18));
    }
}
