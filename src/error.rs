//! Error taxonomy for fallible conversions and parsing.
//!
//! Arithmetic itself never fails: `DivideByZero` and `DivideOverflow`
//! are programming errors reported via `panic!`, not through this enum
//! (see `QuoRem` and `digits::div_half`).

use thiserror::Error;

/// Errors returned by parsing and byte-decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input string was empty, contained an unrecognized digit for
    /// the given base, or otherwise didn't parse.
    #[error("invalid syntax for integer: {input:?}")]
    Syntax { input: String },

    /// `base` was not `0` or in `2..=36` (or, for the fraction-aware
    /// internal parser, not in `{2, 8, 10, 16}`).
    #[error("invalid base {base}")]
    InvalidBase { base: i32 },

    /// The parsed magnitude exceeds the representable maximum for the
    /// target width.
    #[error("value out of range: {input:?}")]
    OutOfRange { input: String },

    /// `from_bytes` was given a buffer of the wrong length.
    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
