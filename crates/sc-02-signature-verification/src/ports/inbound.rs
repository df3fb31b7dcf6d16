//! # Inbound Ports (Driving Ports / API)
//!
//! The authentication capability the close engine depends on.

use crate::domain::entities::EcdsaSignature;
use crate::domain::errors::SignatureError;
use shared_types::{Address, Hash};

/// Recovers the identity that signed a digest.
///
/// Implementations must be thread-safe (`Send + Sync`). The close engine only
/// compares the returned address against the expected counterparty, so a test
/// double can map signatures to addresses without any curve arithmetic.
pub trait SignatureVerifier: Send + Sync {
    /// Recover the signer of `digest`.
    ///
    /// # Errors
    /// Any `SignatureError` means no signer could be established.
    fn recover_signer(
        &self,
        digest: &Hash,
        signature: &EcdsaSignature,
    ) -> Result<Address, SignatureError>;
}
