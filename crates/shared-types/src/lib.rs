//! # Shared Types Crate
//!
//! Primitive identifiers used across the state channel crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: account addresses, digests and channel ids are
//!   defined once here and re-used by the encoder, verifier and engine.
//! - **Human-readable wire form**: addresses serialize as `0x`-prefixed hex so
//!   persisted ledgers stay inspectable.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
