//! # Value Objects
//!
//! Party status and role.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-party channel status, ordered by progression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Status {
    /// Not yet bound.
    #[default]
    Idle = 0,
    /// Party A is waiting for a counterparty.
    Connecting = 1,
    /// Both parties are bound.
    Connected = 2,
    /// This party has submitted an accepted close.
    Released = 3,
}

impl Status {
    /// Wire discriminant.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(self, next: Status) -> bool {
        matches!(
            (self, next),
            (Status::Idle, Status::Connecting)
                | (Status::Idle, Status::Connected)
                | (Status::Connecting, Status::Connected)
                | (Status::Connected, Status::Released)
        )
    }
}

impl TryFrom<u8> for Status {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Status::Idle),
            1 => Ok(Status::Connecting),
            2 => Ok(Status::Connected),
            3 => Ok(Status::Released),
            other => Err(other),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Idle => "IDLE",
            Status::Connecting => "CONNECTING",
            Status::Connected => "CONNECTED",
            Status::Released => "RELEASED",
        };
        write!(f, "{name}")
    }
}

/// Which side of a channel an address is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyRole {
    /// The opener.
    A,
    /// The joiner.
    B,
}

impl PartyRole {
    /// The opposite side.
    pub fn other(self) -> PartyRole {
        match self {
            PartyRole::A => PartyRole::B,
            PartyRole::B => PartyRole::A,
        }
    }
}
