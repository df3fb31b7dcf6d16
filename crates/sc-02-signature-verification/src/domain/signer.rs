//! # Attestation Signer
//!
//! Off-ledger helper a party uses to sign the counterparty's closing state.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization (EIP-2), so every signature it emits is accepted by
//!   [`recover_address`](super::ecdsa::recover_address)
//! - `v` is emitted in wallet form (27/28)

use super::ecdsa::{address_from_pubkey, invert_s, is_low_s};
use super::entities::EcdsaSignature;
use super::errors::SignatureError;
use k256::ecdsa::SigningKey;
use sc_01_canonical_encoding::{ClosePayload, SigningScheme};
use shared_types::{decode_hex, Address, Hash};
use std::fmt;
use zeroize::Zeroize;

/// A secp256k1 key that produces recoverable attestations.
pub struct AttestationSigner {
    signing_key: SigningKey,
    address: Address,
}

impl AttestationSigner {
    /// Build from 32 secret key bytes.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let signing_key =
            SigningKey::from_slice(bytes).map_err(|_| SignatureError::InvalidSecretKey)?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Build from a hex secret key, with or without `0x`.
    pub fn from_secret_hex(secret: &str) -> Result<Self, SignatureError> {
        let mut bytes = decode_hex(secret).map_err(|_| SignatureError::InvalidSecretKey)?;
        let signer = Self::from_secret_bytes(&bytes);
        bytes.zeroize();
        signer
    }

    /// Generate a random key.
    pub fn random() -> Self {
        Self::from_signing_key(SigningKey::random(&mut rand::thread_rng()))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = address_from_pubkey(signing_key.verifying_key());
        Self {
            signing_key,
            address,
        }
    }

    /// Address this key signs as.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Sign a prehashed 32-byte digest.
    pub fn sign_digest(&self, digest: &Hash) -> Result<EcdsaSignature, SignatureError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|_| SignatureError::SigningFailed)?;

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        let mut parity = recid.to_byte() & 1;
        if !is_low_s(&s) {
            // n - s pairs with the opposite y parity
            s = invert_s(&s);
            parity ^= 1;
        }

        Ok(EcdsaSignature {
            r,
            s,
            v: parity + 27,
        })
    }

    /// Attest to `payload` under `scheme`.
    ///
    /// The payload's `signer` field names the party who will submit it, which
    /// is normally *not* this key's owner.
    pub fn sign_payload(
        &self,
        payload: &ClosePayload,
        scheme: SigningScheme,
    ) -> Result<EcdsaSignature, SignatureError> {
        self.sign_digest(&payload.signing_digest(scheme))
    }
}

impl fmt::Debug for AttestationSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttestationSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
