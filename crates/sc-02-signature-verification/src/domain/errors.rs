//! # Signature Errors
//!
//! Error types for signer recovery and attestation signing.

use thiserror::Error;

/// Errors that can occur while recovering or producing a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature is not exactly 65 bytes, or is not valid hex.
    #[error("Invalid signature format")]
    InvalidFormat,

    /// R or S is zero or not below the curve order.
    #[error("Signature scalar out of range")]
    ScalarOutOfRange,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The secret key bytes do not form a valid secp256k1 scalar.
    #[error("Invalid secret key")]
    InvalidSecretKey,

    /// The signing primitive rejected the digest.
    #[error("Signing failed")]
    SigningFailed,
}
