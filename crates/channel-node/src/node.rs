//! # Channel Node
//!
//! Hosts a [`ChannelService`] over the on-disk ledger.
//!
//! Every mutating call is one block:
//!
//! 1. Take the ledger lock and load the registry and height.
//! 2. Advance the height by one and run the operation.
//! 3. On success, save the new registry and height and collect the
//!    notifications it emitted. On failure, save nothing.

use crate::config::{ConfigError, NodeConfig};
use crate::ledger::{LedgerError, LedgerFile, LedgerLock, LedgerState};
use channel_telemetry::channel_span;
use sc_02_signature_verification::EcdsaVerifier;
use sc_03_state_channels::{
    BlockHeightProvider, Channel, ChannelError, ChannelService, ChannelServiceConfig,
    CloseOutcome, CloseRequest, ManualBlockClock, StateChannelApi,
};
use serde::Serialize;
use shared_bus::{ChannelEvent, EventFilter, InMemoryEventBus, Subscription};
use shared_types::{Address, BlockHeight, ChannelId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, Instrument};

/// Node errors.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Ledger could not be read or written.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The channel engine rejected the operation.
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of a committed operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Receipt<T> {
    /// Operation result.
    pub value: T,
    /// Block the operation executed in.
    pub block: BlockHeight,
    /// Notifications emitted, in order.
    pub events: Vec<ChannelEvent>,
}

/// One locked load → execute → save cycle.
struct Session {
    lock: LedgerLock,
    clock: Arc<ManualBlockClock>,
    events: Subscription,
    service: ChannelService,
}

/// Local channel host.
#[derive(Debug, Clone)]
pub struct ChannelNode {
    ledger: LedgerFile,
    config: NodeConfig,
}

impl ChannelNode {
    /// Create a node; the ledger is not touched until the first operation.
    pub fn new(config: NodeConfig) -> Result<Self, NodeError> {
        config.validate()?;
        Ok(Self {
            ledger: LedgerFile::new(config.ledger_path.clone()),
            config,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Open a channel with `caller` as party A.
    pub async fn open(&self, caller: Address) -> Result<Receipt<ChannelId>, NodeError> {
        let session = self.begin()?;
        let channel_id = session
            .service
            .open(caller)
            .instrument(channel_span!("open", caller = %caller))
            .await?;
        self.commit(session, channel_id)
    }

    /// Join `channel_id` as party B.
    pub async fn join(
        &self,
        caller: Address,
        channel_id: ChannelId,
    ) -> Result<Receipt<()>, NodeError> {
        let session = self.begin()?;
        session
            .service
            .join(caller, channel_id)
            .instrument(channel_span!("join", channel_id = %channel_id, caller = %caller))
            .await?;
        self.commit(session, ())
    }

    /// Submit a counterparty-attested close.
    pub async fn close(
        &self,
        caller: Address,
        request: CloseRequest,
    ) -> Result<Receipt<CloseOutcome>, NodeError> {
        let session = self.begin()?;
        let span = channel_span!("close", channel_id = %request.channel_id, caller = %caller);
        let outcome = session
            .service
            .close(caller, request)
            .instrument(span)
            .await?;
        self.commit(session, outcome)
    }

    /// Snapshot of one channel.
    pub fn channel(&self, channel_id: ChannelId) -> Result<Channel, NodeError> {
        let state = self.ledger.read()?;
        Ok(state.channels.get(channel_id)?.clone())
    }

    /// Every channel, in id order.
    pub fn channels(&self) -> Result<Vec<Channel>, NodeError> {
        let state = self.ledger.read()?;
        Ok(state.channels.iter().cloned().collect())
    }

    /// Height of the last committed block.
    pub fn height(&self) -> Result<BlockHeight, NodeError> {
        Ok(self.ledger.read()?.height)
    }

    fn begin(&self) -> Result<Session, NodeError> {
        let lock = self.ledger.lock()?;
        let state = lock.load()?;

        let clock = Arc::new(ManualBlockClock::starting_at(state.height));
        let block = clock.advance();

        let bus = Arc::new(InMemoryEventBus::with_capacity(self.config.event_capacity));
        let events = bus.subscribe(EventFilter::all());

        let service = ChannelService::new(
            Arc::new(EcdsaVerifier),
            clock.clone(),
            bus,
            ChannelServiceConfig {
                signing_scheme: self.config.signing_scheme,
            },
        )
        .with_registry(state.channels);

        debug!(block, ledger = %self.ledger.path().display(), "Block started");

        Ok(Session {
            lock,
            clock,
            events,
            service,
        })
    }

    fn commit<T>(&self, mut session: Session, value: T) -> Result<Receipt<T>, NodeError> {
        let block = session.clock.current_height();
        let state = LedgerState {
            height: block,
            channels: session.service.snapshot(),
        };
        session.lock.save(&state)?;

        let events = session.events.drain();
        info!(block, events = events.len(), "Block committed");

        Ok(Receipt {
            value,
            block,
            events,
        })
    }
}
