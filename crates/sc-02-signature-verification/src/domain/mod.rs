//! Domain layer for signature verification.

pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod signer;
