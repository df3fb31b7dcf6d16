//! # Algorithms
//!
//! - `abi`: fixed-width word encoding/decoding
//! - `digest`: Keccak-256 payload and signed-message digests

pub mod abi;
pub mod digest;
