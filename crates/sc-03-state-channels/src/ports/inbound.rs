//! # Inbound Ports
//!
//! API trait defining what the state channel subsystem can do.

use crate::domain::{Channel, ChannelError, CloseOutcome, CloseRequest};
use async_trait::async_trait;
use shared_types::{Address, ChannelId};

/// State channel API - inbound port.
///
/// `caller` is the authenticated account invoking the operation, as supplied
/// by the host ledger.
#[async_trait]
pub trait StateChannelApi: Send + Sync {
    /// Open a channel with `caller` as party A.
    async fn open(&self, caller: Address) -> Result<ChannelId, ChannelError>;

    /// Bind `caller` as party B.
    async fn join(&self, caller: Address, channel_id: ChannelId) -> Result<(), ChannelError>;

    /// Submit a counterparty-attested closing state.
    async fn close(
        &self,
        caller: Address,
        request: CloseRequest,
    ) -> Result<CloseOutcome, ChannelError>;

    /// Snapshot of one channel.
    fn channel(&self, channel_id: ChannelId) -> Result<Channel, ChannelError>;
}
