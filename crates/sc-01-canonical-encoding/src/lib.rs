//! # Canonical Encoding Subsystem (SC-01)
//!
//! Deterministic byte encoding of a party's closing state vector, and the
//! digests that are signed by the counterparty.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `StateVector`, `ClosePayload`, `SigningScheme`, errors
//! - **Algorithms** (`algorithms/`): ABI word codec and Keccak-256 digests
//!
//! ## Wire Format
//!
//! Nine 32-byte ABI words, big-endian, in fixed order:
//!
//! ```text
//! channelId:uint256 | signer:address | status:uint8 | nonce:uint256 |
//! latitude:int32 | longitude:int32 | direction:uint16 | speed:uint16 |
//! acceleration:int8
//! ```
//!
//! Signed fields are sign-extended to 256 bits; the payload is always 288
//! bytes. The bytes must match `abi.encode` exactly or signatures produced by
//! standard wallets will not verify.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-export public API
pub use algorithms::abi::{PAYLOAD_LEN, PAYLOAD_WORDS, WORD_SIZE};
pub use algorithms::digest::{eth_signed_message_hash, keccak256, ETH_SIGNED_MESSAGE_PREFIX};
pub use domain::entities::{ClosePayload, SigningScheme, StateVector};
pub use domain::errors::EncodingError;
