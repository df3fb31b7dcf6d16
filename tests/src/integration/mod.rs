//! # Integration Flows
//!
//! Real secp256k1 keys, the production verifier and the channel service
//! wired together through the in-memory bus.
//!
//! - `lifecycle_flows`: open/join sequencing and registry growth
//! - `close_settlement`: cross-signed close, rejection paths, settlement
//! - `node_ledger`: the same flows through the file-backed node

pub mod close_settlement;
pub mod fixtures;
pub mod lifecycle_flows;
pub mod node_ledger;
