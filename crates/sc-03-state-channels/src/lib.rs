//! # SC-03 State Channels
//!
//! Bilateral telemetry channels settled by cross-signed attestations.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Two parties keep a position/motion vector off-ledger and settle it
//! on-ledger. Closing is a cross-attested two-phase commit: each party submits
//! its own closing state together with a signature the *counterparty* produced
//! over exactly that state. The channel is settled once both have done so.
//!
//! ## Lifecycle
//!
//! | From (A,B) | Event | To (A,B) |
//! |---|---|---|
//! | (–,–) | `open()` | (CONNECTING, IDLE) |
//! | (CONNECTING, IDLE) | `join()` | (CONNECTED, CONNECTED) |
//! | (CONNECTED, CONNECTED) | `close()` ×1 | caller → RELEASED |
//! | one RELEASED | `close()` by other | (RELEASED, RELEASED) |
//!
//! ## Module Structure
//!
//! ```text
//! sc-03-state-channels/
//! ├── domain/          # Channel, PartyState, Status, errors, invariants
//! ├── registry.rs      # Append-only channel arena
//! ├── service.rs       # Lifecycle manager + close protocol engine
//! ├── ports/           # StateChannelApi, BlockHeightProvider
//! └── adapters/        # ManualBlockClock, MockVerifier (test-utils)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod service;

// Re-exports
pub use adapters::ManualBlockClock;
#[cfg(any(test, feature = "test-utils"))]
pub use adapters::MockVerifier;
pub use domain::{
    Channel, ChannelError, ChannelServiceConfig, CloseOutcome, CloseRequest, PartyRole,
    PartyState, Status,
};
pub use ports::{BlockHeightProvider, StateChannelApi};
pub use registry::ChannelRegistry;
pub use service::ChannelService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
