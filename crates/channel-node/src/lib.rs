//! # Channel Node
//!
//! Local host for the state channel engine.
//!
//! The engine assumes an external ledger that authenticates callers,
//! serialises operations and supplies block height. This crate plays that
//! part on one machine: the registry and height live in a JSON ledger file,
//! every operation runs under an exclusive file lock, and each committed
//! operation is one block.
//!
//! ```text
//! CLI ──▶ ChannelNode ──lock/load──▶ ledger.json
//!             │
//!             ├──▶ ChannelService (sc-03) ──▶ EcdsaVerifier (sc-02)
//!             │
//!             └──save + drain events──▶ stdout
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod ledger;
pub mod node;

pub use config::{ConfigError, NodeConfig, DEFAULT_LEDGER_PATH};
pub use ledger::{LedgerError, LedgerFile, LedgerLock, LedgerState};
pub use node::{ChannelNode, NodeError, Receipt};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
