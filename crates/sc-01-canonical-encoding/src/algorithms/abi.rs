//! # ABI Word Codec
//!
//! Fixed-width, big-endian 32-byte words as produced by `abi.encode`.
//!
//! - Unsigned integers are left-padded with `0x00`.
//! - Signed integers are two's-complement, sign-extended to 256 bits.
//! - Addresses occupy the low 20 bytes with 12 zero bytes of padding.

use crate::domain::errors::EncodingError;
use primitive_types::U256;
use shared_types::Address;

/// Size of one ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// Number of words in a close payload.
pub const PAYLOAD_WORDS: usize = 9;

/// Total length of an encoded close payload.
pub const PAYLOAD_LEN: usize = WORD_SIZE * PAYLOAD_WORDS;

/// One 32-byte ABI word.
pub type Word = [u8; WORD_SIZE];

// =============================================================================
// ENCODING
// =============================================================================

/// Encode an unsigned 256-bit value.
pub fn encode_uint(value: U256) -> Word {
    let mut word = [0u8; WORD_SIZE];
    value.to_big_endian(&mut word);
    word
}

/// Encode a signed value, sign-extending to 256 bits.
pub fn encode_int(value: i64) -> Word {
    let mut word = if value < 0 {
        [0xFFu8; WORD_SIZE]
    } else {
        [0u8; WORD_SIZE]
    };
    word[WORD_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a 20-byte address.
pub fn encode_address(address: &Address) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[12..].copy_from_slice(address.as_bytes());
    word
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode an unsigned word that must fit in `bits` bits.
pub fn decode_uint(word: &Word, bits: usize, field: &'static str) -> Result<U256, EncodingError> {
    let value_bytes = bits / 8;
    let padding = WORD_SIZE - value_bytes;
    if word[..padding].iter().any(|&b| b != 0) {
        return Err(EncodingError::NonCanonicalWord { field });
    }
    Ok(U256::from_big_endian(word))
}

/// Decode a signed word of `bits` width (at most 64).
pub fn decode_int(word: &Word, bits: usize, field: &'static str) -> Result<i64, EncodingError> {
    let value_bytes = bits / 8;
    let padding = WORD_SIZE - value_bytes;
    let negative = word[padding] & 0x80 != 0;
    let fill = if negative { 0xFF } else { 0x00 };
    if word[..padding].iter().any(|&b| b != fill) {
        return Err(EncodingError::NonCanonicalWord { field });
    }

    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[WORD_SIZE - 8..]);
    Ok(i64::from_be_bytes(tail))
}

/// Decode an address word.
pub fn decode_address(word: &Word, field: &'static str) -> Result<Address, EncodingError> {
    if word[..12].iter().any(|&b| b != 0) {
        return Err(EncodingError::NonCanonicalWord { field });
    }
    Address::from_slice(&word[12..]).ok_or(EncodingError::NonCanonicalWord { field })
}

/// Split a payload into its words, checking the exact length.
pub fn split_words(bytes: &[u8]) -> Result<Vec<Word>, EncodingError> {
    if bytes.len() != PAYLOAD_LEN {
        return Err(EncodingError::InvalidLength {
            expected: PAYLOAD_LEN,
            actual: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(WORD_SIZE)
        .map(|chunk| {
            let mut word = [0u8; WORD_SIZE];
            word.copy_from_slice(chunk);
            word
        })
        .collect())
}
