//! # Outbound Ports
//!
//! What the channel engine needs from its host. Signature recovery is the
//! `SignatureVerifier` port of `sc-02`; notification delivery is the
//! `EventPublisher` of `shared-bus`.

use shared_types::BlockHeight;

/// Monotonic ledger height source.
pub trait BlockHeightProvider: Send + Sync {
    /// Height at which the current operation executes.
    fn current_height(&self) -> BlockHeight;
}
