//! Mock Verifier Adapter
//!
//! A `SignatureVerifier` with no curve arithmetic, for exercising the close
//! protocol in isolation.
//!
//! A mock signature carries the signer's address in the low 20 bytes of `r`
//! and the signed digest in `s`. Recovery against any other digest yields an
//! unrelated identity, the same way a real tampered payload does.

use sc_02_signature_verification::{EcdsaSignature, SignatureError, SignatureVerifier};
use shared_types::{Address, Hash};
use std::sync::atomic::{AtomicUsize, Ordering};

/// `v` value the mock treats as unrecoverable.
pub const UNRECOVERABLE_V: u8 = 0xFF;

/// Deterministic stand-in for ECDSA recovery.
#[derive(Debug, Default)]
pub struct MockVerifier {
    calls: AtomicUsize,
}

impl MockVerifier {
    /// Create a new mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a mock signature by `signer` over `digest`.
    pub fn sign(signer: Address, digest: &Hash) -> EcdsaSignature {
        let mut r = [0u8; 32];
        r[12..].copy_from_slice(signer.as_bytes());
        EcdsaSignature {
            r,
            s: *digest,
            v: 27,
        }
    }

    /// Number of recoveries performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SignatureVerifier for MockVerifier {
    fn recover_signer(
        &self,
        digest: &Hash,
        signature: &EcdsaSignature,
    ) -> Result<Address, SignatureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if signature.v == UNRECOVERABLE_V {
            return Err(SignatureError::RecoveryFailed);
        }

        let source = if signature.s == *digest {
            &signature.r[12..]
        } else {
            // wrong digest: some other key
            &signature.s[..20]
        };
        Address::from_slice(source).ok_or(SignatureError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_roundtrip() {
        let verifier = MockVerifier::new();
        let signer = Address::new([0x42; 20]);
        let digest = [7u8; 32];
        let sig = MockVerifier::sign(signer, &digest);

        assert_eq!(verifier.recover_signer(&digest, &sig), Ok(signer));
        assert_ne!(verifier.recover_signer(&[8u8; 32], &sig), Ok(signer));
        assert_eq!(verifier.calls(), 2);
    }

    #[test]
    fn test_mock_unrecoverable() {
        let verifier = MockVerifier::new();
        let mut sig = MockVerifier::sign(Address::new([1; 20]), &[0u8; 32]);
        sig.v = UNRECOVERABLE_V;
        assert_eq!(
            verifier.recover_signer(&[0u8; 32], &sig),
            Err(SignatureError::RecoveryFailed)
        );
    }
}
