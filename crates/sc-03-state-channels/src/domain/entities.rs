//! # Domain Entities
//!
//! Channel records and the requests that mutate them.

use super::value_objects::{PartyRole, Status};
use sc_01_canonical_encoding::{SigningScheme, StateVector};
use sc_02_signature_verification::EcdsaSignature;
use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight, ChannelId, U256};

/// One party's recorded state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyState {
    /// Lifecycle status.
    pub status: Status,
    /// Last accepted off-ledger nonce.
    pub nonce: U256,
    /// Fixed-point decimal degrees.
    pub latitude: i32,
    /// Fixed-point decimal degrees.
    pub longitude: i32,
    /// Heading, degrees.
    pub direction: u16,
    /// Speed.
    pub speed: u16,
    /// Acceleration.
    pub acceleration: i8,
}

impl PartyState {
    /// A party in the given status with zeroed telemetry.
    pub fn with_status(status: Status) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Record an accepted closing state and release this party.
    pub fn release_with(&mut self, state: &StateVector) {
        self.nonce = state.nonce;
        self.latitude = state.latitude;
        self.longitude = state.longitude;
        self.direction = state.direction;
        self.speed = state.speed;
        self.acceleration = state.acceleration;
        self.status = Status::Released;
    }
}

/// A bilateral channel.
///
/// Records are never deleted; a released channel stays as a settlement record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Sequential id, equal to the registry index.
    pub id: ChannelId,
    /// Opener's state.
    pub party_a: PartyState,
    /// Joiner's state.
    pub party_b: PartyState,
    /// Opener.
    pub address_a: Address,
    /// Joiner, once bound.
    pub address_b: Option<Address>,
    /// Height at which the joiner bound.
    pub starting_block: BlockHeight,
}

impl Channel {
    /// A freshly opened channel.
    pub fn open(id: ChannelId, opener: Address) -> Self {
        Self {
            id,
            party_a: PartyState::with_status(Status::Connecting),
            party_b: PartyState::default(),
            address_a: opener,
            address_b: None,
            starting_block: 0,
        }
    }

    /// Whether a second party has bound.
    pub fn is_connected(&self) -> bool {
        self.address_b.is_some()
    }

    /// Whether both parties have released.
    pub fn is_settled(&self) -> bool {
        self.party_a.status == Status::Released && self.party_b.status == Status::Released
    }

    /// Side `address` is bound to, if any.
    pub fn role_of(&self, address: &Address) -> Option<PartyRole> {
        if *address == self.address_a {
            Some(PartyRole::A)
        } else if self.address_b.as_ref() == Some(address) {
            Some(PartyRole::B)
        } else {
            None
        }
    }

    /// Address bound to `role`.
    pub fn address_of(&self, role: PartyRole) -> Option<Address> {
        match role {
            PartyRole::A => Some(self.address_a),
            PartyRole::B => self.address_b,
        }
    }

    /// The other bound party, if `address` is a party and the channel is connected.
    pub fn counterparty_of(&self, address: &Address) -> Option<Address> {
        self.role_of(address)
            .and_then(|role| self.address_of(role.other()))
    }

    /// State for `role`.
    pub fn party(&self, role: PartyRole) -> &PartyState {
        match role {
            PartyRole::A => &self.party_a,
            PartyRole::B => &self.party_b,
        }
    }

    /// Mutable state for `role`.
    pub fn party_mut(&mut self, role: PartyRole) -> &mut PartyState {
        match role {
            PartyRole::A => &mut self.party_a,
            PartyRole::B => &mut self.party_b,
        }
    }
}

/// A close submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseRequest {
    /// Channel to close.
    pub channel_id: ChannelId,
    /// Counterparty's signature over the caller's payload.
    pub signature: EcdsaSignature,
    /// Caller's closing state.
    pub state: StateVector,
}

impl CloseRequest {
    /// Create a close request.
    pub fn new(channel_id: ChannelId, signature: EcdsaSignature, state: StateVector) -> Self {
        Self {
            channel_id,
            signature,
            state,
        }
    }
}

/// Result of an accepted close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseOutcome {
    /// First approval; waiting for the counterparty's reciprocal close.
    Pending,
    /// Both parties have released.
    Settled,
}

impl CloseOutcome {
    /// The `closed` flag carried by the settlement notification.
    pub fn is_closed(self) -> bool {
        matches!(self, CloseOutcome::Settled)
    }
}

/// Close engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelServiceConfig {
    /// How payload hashes are turned into signed digests.
    pub signing_scheme: SigningScheme,
}
