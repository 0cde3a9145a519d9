//! Standard errors that may occur when working with finite fields and codes.

use std;

/// Reason a decode was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeFail {
    /// The Chien search found a different number of roots than the degree of the
    /// error-locator polynomial.
    RootCount,
    /// Post-correction syndromes were non-zero.
    VerifyFailed,
    /// The error-locator polynomial's degree exceeds the code's correction capacity.
    LocatorTooLarge,
}

/// Runtime errors from field construction, arithmetic, and decoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Field construction was attempted with a composite p, k < 1, or a (poly, α) pair
    /// that fails the primitive-cycle check.
    InvalidField,
    /// A scalar divide or inverse was applied to zero.
    DivByZero,
    /// A decode could not recover the original codeword.
    DecodeFail(DecodeFail),
    /// A buffer's length was out of range for the chosen code.
    Bounds,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::InvalidField => write!(fmt, "invalid field parameters"),
            Error::DivByZero => write!(fmt, "division by zero"),
            Error::DecodeFail(DecodeFail::RootCount) => {
                write!(fmt, "chien search root count didn't match locator degree")
            }
            Error::DecodeFail(DecodeFail::VerifyFailed) => {
                write!(fmt, "syndromes non-zero after correction")
            }
            Error::DecodeFail(DecodeFail::LocatorTooLarge) => {
                write!(fmt, "error-locator degree exceeds correction capacity")
            }
            Error::Bounds => write!(fmt, "buffer length out of range for code"),
        }
    }
}

impl std::error::Error for Error {}

/// Standard result using `Error`.
pub type Result<T> = std::result::Result<T, Error>;
