//! # Signature Verification Subsystem (SC-02)
//!
//! Recovers the account that produced a counterparty attestation, and produces
//! such attestations for off-ledger use.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): signature type, recovery, signing
//! - **Ports Layer** (`ports/`): the `SignatureVerifier` capability consumed by the
//!   close engine
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: signatures with high S values are rejected
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - Range checks use the `subtle` crate so they run in constant time

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;

// Re-export public API
pub use domain::ecdsa::{address_from_pubkey, recover_address, EcdsaVerifier};
pub use domain::entities::{EcdsaSignature, SIGNATURE_LEN};
pub use domain::errors::SignatureError;
pub use domain::signer::AttestationSigner;
pub use ports::inbound::SignatureVerifier;
