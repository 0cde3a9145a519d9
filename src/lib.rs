//! Generic GF(pᵏ) finite-field arithmetic plus Reed–Solomon and BCH encode/decode
//! built on it: syndromes, Berlekamp–Massey, Chien search, and Forney's formula.

pub mod code;
pub mod codec;
pub mod configs;
pub mod error;
pub mod field;
pub mod kernels;
pub mod poly;
pub mod scalar;

pub use code::{bch_generator, rs_generator};
pub use codec::{decode, encode, DecodeOutcome};
pub use error::{DecodeFail, Error, Result};
pub use field::{Element, Field};
pub use poly::{FieldElement, Polynomial};
pub use scalar::PrimeScalar;
