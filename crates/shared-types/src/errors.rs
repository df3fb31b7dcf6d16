//! # Error Types
//!
//! Errors raised while parsing shared primitives from external input.

use thiserror::Error;

/// Errors that can occur when parsing shared primitive values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypesError {
    /// Input was not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded value has the wrong number of bytes.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Byte count supplied
        actual: usize,
    },

    /// Input was not a valid decimal integer.
    #[error("Invalid integer: {0}")]
    InvalidInteger(String),
}
