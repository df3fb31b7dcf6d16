//! # Digests
//!
//! Keccak-256 and the wallet "personal sign" envelope.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Prefix applied by wallets when signing a 32-byte message.
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Digest a wallet actually signs when asked to sign `message_hash`.
pub fn eth_signed_message_hash(message_hash: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(ETH_SIGNED_MESSAGE_PREFIX);
    hasher.update(message_hash);
    hasher.finalize().into()
}
