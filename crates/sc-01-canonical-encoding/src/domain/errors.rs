//! # Encoding Errors
//!
//! Error types for decoding canonical payloads.

use thiserror::Error;

/// Errors that can occur while decoding a canonical payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// The byte sequence is not exactly nine ABI words.
    #[error("Invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Byte count supplied
        actual: usize,
    },

    /// A word carries bits outside the declared field width, or a signed word
    /// is not correctly sign-extended.
    #[error("Non-canonical word for field `{field}`")]
    NonCanonicalWord {
        /// Payload field the word decodes into
        field: &'static str,
    },

    /// The value is canonical but does not fit the Rust field type.
    #[error("Value out of range for field `{field}`")]
    ValueOutOfRange {
        /// Payload field the word decodes into
        field: &'static str,
    },

    /// Unknown signing scheme name.
    #[error("Unknown signing scheme: {0}")]
    UnknownScheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_fields() {
        let err = EncodingError::InvalidLength {
            expected: 288,
            actual: 287,
        };
        assert_eq!(
            err.to_string(),
            "Invalid payload length: expected 288 bytes, got 287"
        );

        let err = EncodingError::NonCanonicalWord { field: "speed" };
        assert_eq!(err.to_string(), "Non-canonical word for field `speed`");

        let err = EncodingError::ValueOutOfRange { field: "channel_id" };
        assert_eq!(err.to_string(), "Value out of range for field `channel_id`");
    }
}
