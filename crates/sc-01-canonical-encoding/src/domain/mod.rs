//! # Domain Layer
//!
//! Payload types with no I/O dependencies.

pub mod entities;
pub mod errors;
