//! Named, eagerly-built reference configurations: the field, generator, and parity
//! length for each of the four codes called out in §6, plus bit-packing helpers for
//! the binary BCH variants.

use crate::code::{bch_generator, rs_generator};
use crate::codec::{decode, encode, DecodeOutcome};
use crate::error::Result;
use crate::field::{Element, Field};
use crate::poly::Polynomial;

/// A fully-assembled code: field, generator, message length, and correction capacity.
pub struct Code {
    field: Field,
    generator_coefs: Vec<u32>,
    message_len: usize,
    t: usize,
    /// Exponent of the generator's first consecutive root: `0` for `rs_generator`
    /// (`g(x) = Π_{i=0}^{e-1}(x - α^i)`), `1` for `bch_generator` (minimal polynomials
    /// of `α^1 .. α^(2t)`). Must match whichever convention built `generator_coefs`, or
    /// the decoder's syndromes sample exponents that aren't generator roots at all.
    first_root: u32,
}

impl Code {
    fn generator(&self) -> Polynomial<Element> {
        Polynomial::new(
            self.generator_coefs
                .iter()
                .map(|&v| Element::from_integer(&self.field, v))
                .collect(),
        )
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn message_len(&self) -> usize {
        self.message_len
    }

    pub fn parity_len(&self) -> usize {
        self.generator_coefs.len() - 1
    }

    pub fn codeword_len(&self) -> usize {
        self.message_len + self.parity_len()
    }

    /// Encode a message of integer-form symbols into a codeword of integer-form
    /// symbols (see §4.5).
    pub fn encode(&self, message: &[u32]) -> Result<Vec<u32>> {
        let elems: Vec<Element> = message.iter().map(|&v| Element::from_integer(&self.field, v)).collect();
        let generator = self.generator();
        let codeword = encode(&self.field, &generator, &elems)?;
        Ok(codeword.iter().map(Element::value).collect())
    }

    /// Decode and correct a received codeword in place (see §4.6).
    pub fn decode(&self, received: &mut [u32]) -> Result<DecodeOutcome> {
        let mut elems: Vec<Element> = received.iter().map(|&v| Element::from_integer(&self.field, v)).collect();
        let outcome = decode(&self.field, &mut elems, self.t, self.first_root)?;
        for (dst, e) in received.iter_mut().zip(elems.iter()) {
            *dst = e.value();
        }
        Ok(outcome)
    }
}

fn build_bch(poly: Vec<u32>, alpha: u32, t: usize, message_len: usize) -> Code {
    let field = Field::new(2, 6, alpha, poly).expect("fixed BCH field parameters are valid");
    let generator = bch_generator(&field, t);
    Code {
        field,
        generator_coefs: generator.coefs().iter().map(Element::value).collect(),
        message_len,
        t,
        first_root: 1,
    }
}

/// GF(2⁶) via x⁶ + x + 1, 6-error-correcting BCH: 30 data bits + 33 parity bits.
pub fn bch_63_30() -> Code {
    build_bch(vec![1, 1, 0, 0, 0, 0, 1], 2, 6, 30)
}

/// GF(2⁶) via x⁶ + x + 1, 3-error-correcting BCH: 45 data bits + 18 parity bits.
pub fn bch_63_45() -> Code {
    build_bch(vec![1, 1, 0, 0, 0, 0, 1], 2, 3, 45)
}

/// GF(2⁸) via the canonical 0x11d modulus and primitive α = 2.
pub fn rs_gf256(ecc: usize) -> Code {
    let field = Field::new(2, 8, 2, vec![1, 0, 1, 1, 1, 0, 0, 0, 1]).expect("0x11d is a valid GF(2^8) modulus");
    let generator = rs_generator(&field, ecc);
    Code {
        field,
        generator_coefs: generator.coefs().iter().map(Element::value).collect(),
        message_len: 0, // caller-determined; see `rs_gf256_with_message_len`
        t: ecc / 2,
        first_root: 0,
    }
}

/// As [`rs_gf256`], with an explicit message length for `codeword_len`/`message_len`.
pub fn rs_gf256_with_message_len(ecc: usize, message_len: usize) -> Code {
    let mut code = rs_gf256(ecc);
    code.message_len = message_len;
    code
}

/// GF(257) (prime field), primitive α = first primitive root of 257, parity length
/// `ecc` (default 4), message length `msg_len` (default 16).
pub fn rs_gf257(ecc: usize, msg_len: usize) -> Code {
    let field = Field::search(257, 1).expect("GF(257) is a valid prime field");
    let generator = rs_generator(&field, ecc);
    Code {
        field,
        generator_coefs: generator.coefs().iter().map(Element::value).collect(),
        message_len: msg_len,
        t: ecc / 2,
        first_root: 0,
    }
}

/// Pack a codeword of `width` bits (coefficient `i` at bit `i`) into a `u64` with bit 0
/// reserved and the codeword occupying bits `[1, width+1)`, matching the original
/// library's convention for 63-bit BCH codewords.
pub fn pack_bits(codeword: &[u32], reserved: bool) -> u64 {
    let mut word = if reserved { 1u64 } else { 0 };
    for (i, &bit) in codeword.iter().enumerate() {
        if bit != 0 {
            word |= 1 << (i + 1);
        }
    }
    word
}

/// Inverse of [`pack_bits`]: extract `width` codeword bits from `[1, width+1)`.
pub fn unpack_bits(word: u64, width: usize) -> Vec<u32> {
    (0..width).map(|i| ((word >> (i + 1)) & 1) as u32).collect()
}
