//! # Channel Registry
//!
//! Append-only arena of channel records addressed by sequential id.
//!
//! The registry only allocates and looks up. Field mutation happens in the
//! service, which holds exclusive access for the duration of one operation.

use crate::domain::{Channel, ChannelError};
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChannelId};

/// All channels ever opened, indexed `0..len`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
}

impl ChannelRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id and insert a freshly opened channel.
    pub fn create(&mut self, opener: Address) -> ChannelId {
        let id = ChannelId(self.channels.len() as u64);
        self.channels.push(Channel::open(id, opener));
        id
    }

    /// Look up a channel.
    pub fn get(&self, id: ChannelId) -> Result<&Channel, ChannelError> {
        id.index()
            .and_then(|index| self.channels.get(index))
            .ok_or(ChannelError::ChannelNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: ChannelId) -> Result<&mut Channel, ChannelError> {
        id.index()
            .and_then(|index| self.channels.get_mut(index))
            .ok_or(ChannelError::ChannelNotFound(id))
    }

    /// Number of channels ever opened.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True if no channel was ever opened.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channels in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }
}
