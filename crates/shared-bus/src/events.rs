//! # Channel Events
//!
//! Notifications emitted by the channel engine after a committed transition.

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight, ChannelId};

/// All events that can be published to the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ChannelEvent {
    /// A channel was opened; the caller is party A.
    ChannelOpened {
        /// New channel.
        channel_id: ChannelId,
        /// Opening party.
        party_a: Address,
    },

    /// Party B bound to the channel and both sides are connected.
    ChannelJoined {
        /// Joined channel.
        channel_id: ChannelId,
        /// Joining party.
        party_b: Address,
        /// Height at which the channel became connected.
        starting_block: BlockHeight,
    },

    /// A party submitted an accepted close.
    ///
    /// `closed` is false for the first approval and true once both parties
    /// have released.
    CloseSubmitted {
        /// Channel being closed.
        channel_id: ChannelId,
        /// Party that submitted the close.
        party: Address,
        /// Whether the channel is now fully settled.
        closed: bool,
    },
}

impl ChannelEvent {
    /// Get the topic for this event.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ChannelOpened { .. } | Self::ChannelJoined { .. } => EventTopic::Lifecycle,
            Self::CloseSubmitted { .. } => EventTopic::Settlement,
        }
    }

    /// The channel this event concerns.
    #[must_use]
    pub fn channel_id(&self) -> ChannelId {
        match self {
            Self::ChannelOpened { channel_id, .. }
            | Self::ChannelJoined { channel_id, .. }
            | Self::CloseSubmitted { channel_id, .. } => *channel_id,
        }
    }
}

/// Event topics for filtering subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Open and join.
    Lifecycle,
    /// Close attempts and settlement.
    Settlement,
    /// All events.
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to subscribe to (empty = all).
    pub topics: Vec<EventTopic>,
    /// Channels to subscribe to (empty = all).
    pub channels: Vec<ChannelId>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            channels: Vec::new(),
        }
    }

    /// Create a filter for events about specific channels.
    #[must_use]
    pub fn channels(channels: Vec<ChannelId>) -> Self {
        Self {
            topics: Vec::new(),
            channels,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &ChannelEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let channel_match = self.channels.is_empty() || self.channels.contains(&event.channel_id());

        topic_match && channel_match
    }
}
