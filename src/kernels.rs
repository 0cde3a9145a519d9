//! Vectorised evaluation and multiplication kernels for the GF(2⁸) and GF(2¹⁶) cases
//! where the full table-driven approach of `field.rs` either needs widening (4-lane
//! evaluation) or would need a table too large to keep around ((pᵏ)² for pᵏ = 2¹⁶).

use crate::field::{Element, Field};
use crate::poly::Polynomial;

/// Four GF(2⁸) values packed big-endian-lane into a `u32`: byte 3 is lane 0, byte 0 is
/// lane 3.
pub fn pack4(lanes: [u8; 4]) -> u32 {
    u32::from_be_bytes(lanes)
}

pub fn unpack4(word: u32) -> [u8; 4] {
    word.to_be_bytes()
}

/// Evaluate `poly` at four independent GF(2⁸) points packed into `x`, via Horner's
/// method carried out lane-wise. Equivalent to four independent `poly.eval` calls
/// (§4.7, §8 poly_eval4 property).
pub fn eval4<'f>(field: &'f Field, poly: &Polynomial<Element<'f>>, x: u32) -> u32 {
    assert_eq!(field.order(), 256, "eval4 is defined for GF(2^8) only");

    let lanes = unpack4(x);
    let mut acc = [Element::zero(field); 4];

    for &coef in poly.coefs().iter().rev() {
        for lane in 0..4 {
            let xi = Element::from_integer(field, lanes[lane] as u32);
            acc[lane] = acc[lane].mul(&xi).add(&coef);
        }
    }

    pack4([
        acc[0].value() as u8,
        acc[1].value() as u8,
        acc[2].value() as u8,
        acc[3].value() as u8,
    ])
}

/// Table-driven multiply for GF(2¹⁶), where a full 2¹⁶ × 2¹⁶ product table would be
/// far too large to keep around: delegates to the field's own log/antilog tables
/// rather than a split-byte table, since those are already only `2¹⁶` entries each
/// (128 KiB) and are exactly the reference in §9.
pub fn mul16<'f>(field: &'f Field, a: u32, b: u32) -> u32 {
    assert_eq!(field.order(), 1 << 16, "mul16 is defined for GF(2^16) only");

    let ea = Element::from_integer(field, a);
    let eb = Element::from_integer(field, b);
    ea.mul(&eb).value()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Field;

    fn gf256() -> Field {
        Field::new(2, 8, 2, vec![1, 0, 1, 1, 1, 0, 0, 0, 1]).unwrap()
    }

    #[test]
    fn test_eval4_matches_scalar_eval() {
        let field = gf256();
        let poly = Polynomial::new(vec![
            Element::from_integer(&field, 3),
            Element::from_integer(&field, 7),
            Element::from_integer(&field, 11),
        ]);

        let lanes = [2u8, 9, 200, 0];
        let packed = eval4(&field, &poly, pack4(lanes));
        let expect = [
            poly.eval(&Element::from_integer(&field, lanes[0] as u32)).value() as u8,
            poly.eval(&Element::from_integer(&field, lanes[1] as u32)).value() as u8,
            poly.eval(&Element::from_integer(&field, lanes[2] as u32)).value() as u8,
            poly.eval(&Element::from_integer(&field, lanes[3] as u32)).value() as u8,
        ];

        assert_eq!(unpack4(packed), expect);
    }

    #[test]
    fn test_mul16_matches_field_mul() {
        let field = Field::search(2, 16).expect("search should find a valid GF(2^16)");

        let a = Element::from_integer(&field, 4660);
        let b = Element::from_integer(&field, 22136);

        assert_eq!(mul16(&field, a.value(), b.value()), a.mul(&b).value());
    }
}
