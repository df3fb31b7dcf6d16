//! # State Channel Service
//!
//! Application service that implements `StateChannelApi`: the lifecycle
//! manager (open/join) and the close protocol engine.
//!
//! ## Atomicity
//!
//! Each operation takes the registry write lock once, runs every check, and
//! only then mutates. A failed check returns with the registry untouched.
//! Notifications are published after the lock is released.

use crate::domain::invariants::{invariant_can_close, invariant_can_join};
use crate::domain::{
    Channel, ChannelError, ChannelServiceConfig, CloseOutcome, CloseRequest, Status,
};
use crate::ports::inbound::StateChannelApi;
use crate::ports::outbound::BlockHeightProvider;
use crate::registry::ChannelRegistry;
use async_trait::async_trait;
use parking_lot::RwLock;
use sc_01_canonical_encoding::ClosePayload;
use sc_02_signature_verification::SignatureVerifier;
use shared_bus::{ChannelEvent, EventPublisher};
use shared_types::{Address, ChannelId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// State channel service.
pub struct ChannelService {
    registry: RwLock<ChannelRegistry>,
    verifier: Arc<dyn SignatureVerifier>,
    clock: Arc<dyn BlockHeightProvider>,
    publisher: Arc<dyn EventPublisher>,
    config: ChannelServiceConfig,
}

impl ChannelService {
    /// Create a service over an empty registry.
    pub fn new(
        verifier: Arc<dyn SignatureVerifier>,
        clock: Arc<dyn BlockHeightProvider>,
        publisher: Arc<dyn EventPublisher>,
        config: ChannelServiceConfig,
    ) -> Self {
        Self {
            registry: RwLock::new(ChannelRegistry::new()),
            verifier,
            clock,
            publisher,
            config,
        }
    }

    /// Replace the registry, e.g. with one restored from disk.
    pub fn with_registry(mut self, registry: ChannelRegistry) -> Self {
        self.registry = RwLock::new(registry);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &ChannelServiceConfig {
        &self.config
    }

    /// Number of channels ever opened.
    pub fn channel_count(&self) -> usize {
        self.registry.read().len()
    }

    /// Clone of the full registry, for persistence.
    pub fn snapshot(&self) -> ChannelRegistry {
        self.registry.read().clone()
    }

    /// Payload the counterparty must sign for `caller` to close with `request`.
    pub fn close_payload(&self, caller: Address, request: &CloseRequest) -> ClosePayload {
        ClosePayload::new(request.channel_id, caller, request.state.clone())
    }

    /// Authenticate the attestation against the expected counterparty.
    fn check_attestation(
        &self,
        caller: Address,
        counterparty: Address,
        request: &CloseRequest,
    ) -> Result<(), ChannelError> {
        let digest = self
            .close_payload(caller, request)
            .signing_digest(self.config.signing_scheme);

        match self.verifier.recover_signer(&digest, &request.signature) {
            Ok(recovered) if recovered == counterparty => Ok(()),
            Ok(recovered) => Err(ChannelError::IncorrectSigner {
                expected: counterparty,
                detail: format!("recovered {recovered}"),
            }),
            Err(e) => Err(ChannelError::IncorrectSigner {
                expected: counterparty,
                detail: e.to_string(),
            }),
        }
    }
}

#[async_trait]
impl StateChannelApi for ChannelService {
    async fn open(&self, caller: Address) -> Result<ChannelId, ChannelError> {
        let channel_id = self.registry.write().create(caller);

        info!(channel_id = %channel_id, party_a = %caller, "[sc-03] Channel opened");

        self.publisher
            .publish(ChannelEvent::ChannelOpened {
                channel_id,
                party_a: caller,
            })
            .await;

        Ok(channel_id)
    }

    async fn join(&self, caller: Address, channel_id: ChannelId) -> Result<(), ChannelError> {
        let starting_block = self.clock.current_height();

        {
            let mut registry = self.registry.write();
            let channel = registry.get_mut(channel_id).inspect_err(|e| {
                warn!(
                    channel_id = %channel_id,
                    caller = %caller,
                    error = %e,
                    "[sc-03] Join rejected"
                );
            })?;

            if let Err(e) = invariant_can_join(channel, &caller) {
                warn!(
                    channel_id = %channel_id,
                    caller = %caller,
                    error = %e,
                    "[sc-03] Join rejected"
                );
                return Err(e);
            }

            channel.address_b = Some(caller);
            channel.starting_block = starting_block;
            channel.party_a.status = Status::Connected;
            channel.party_b.status = Status::Connected;
        }

        info!(
            channel_id = %channel_id,
            party_b = %caller,
            starting_block,
            "[sc-03] Channel joined"
        );

        self.publisher
            .publish(ChannelEvent::ChannelJoined {
                channel_id,
                party_b: caller,
                starting_block,
            })
            .await;

        Ok(())
    }

    async fn close(
        &self,
        caller: Address,
        request: CloseRequest,
    ) -> Result<CloseOutcome, ChannelError> {
        let channel_id = request.channel_id;

        let outcome = {
            let mut registry = self.registry.write();
            match validate_and_release(self, &mut registry, caller, &request) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(
                        channel_id = %channel_id,
                        caller = %caller,
                        error = %e,
                        "[sc-03] Close rejected"
                    );
                    return Err(e);
                }
            }
        };

        let closed = outcome.is_closed();
        info!(
            channel_id = %channel_id,
            caller = %caller,
            nonce = %request.state.nonce,
            closed,
            "[sc-03] Close accepted"
        );

        self.publisher
            .publish(ChannelEvent::CloseSubmitted {
                channel_id,
                party: caller,
                closed,
            })
            .await;

        Ok(outcome)
    }

    fn channel(&self, channel_id: ChannelId) -> Result<Channel, ChannelError> {
        self.registry.read().get(channel_id).cloned()
    }
}

/// Full close validation followed by the single mutation.
///
/// Order: status byte, lookup, party, connected, already released, signature.
fn validate_and_release(
    service: &ChannelService,
    registry: &mut ChannelRegistry,
    caller: Address,
    request: &CloseRequest,
) -> Result<CloseOutcome, ChannelError> {
    Status::try_from(request.state.status).map_err(ChannelError::InvalidStatus)?;

    let channel = registry.get_mut(request.channel_id)?;
    let (role, counterparty) = invariant_can_close(channel, &caller)?;
    service.check_attestation(caller, counterparty, request)?;

    debug!(channel_id = %channel.id, role = ?role, "[sc-03] Attestation verified");

    // Validation complete; mutate.
    channel.party_mut(role).release_with(&request.state);

    if channel.party(role.other()).status == Status::Released {
        Ok(CloseOutcome::Settled)
    } else {
        Ok(CloseOutcome::Pending)
    }
}
