//! crates/status/src/error.rs

use thiserror::Error;

/// Returned when text cannot be read as a [`StatusCode`](crate::StatusCode).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseStatusCodeError {
    /// The input was empty.
    #[error("empty status code")]
    Empty,
    /// The input is not a decimal or `0x`-prefixed hexadecimal number.
    #[error("invalid status code '{0}'")]
    Invalid(String),
    /// The number does not fit in 32 bits.
    #[error("status code '{0}' does not fit in 32 bits")]
    OutOfRange(String),
}
