//! # Event Publisher
//!
//! Publishing side of the bus. The channel service publishes through the
//! [`EventPublisher`] port; hosts pick [`InMemoryEventBus`] when something
//! observes the events and [`NoopPublisher`] otherwise.

use crate::events::{ChannelEvent, EventFilter};
use crate::subscriber::{FilterRegistry, Subscription};
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Outbound notification port.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish `event`, returning how many subscriptions accept it.
    async fn publish(&self, event: ChannelEvent) -> usize;

    /// Events published since creation, delivered or not.
    fn events_published(&self) -> u64;
}

/// Broadcast bus with per-subscription filters.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<ChannelEvent>,
    registry: Arc<Mutex<FilterRegistry>>,
    events_published: AtomicU64,
}

impl InMemoryEventBus {
    /// Bus buffering [`DEFAULT_CHANNEL_CAPACITY`] events per subscriber.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Bus buffering `capacity` events per subscriber (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            registry: Arc::new(Mutex::new(FilterRegistry::default())),
            events_published: AtomicU64::new(0),
        }
    }

    /// Subscribe to events accepted by `filter`.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, channels = ?filter.channels, "Subscription created");
        Subscription::new(self.sender.subscribe(), filter, self.registry.clone())
    }

    /// Live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.lock().len()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: ChannelEvent) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);

        let topic = event.topic();
        let channel_id = event.channel_id();
        let interested = self.registry.lock().interested_in(&event);

        if self.sender.send(event).is_err() {
            debug!(topic = ?topic, channel_id = %channel_id, "Event dropped (no subscribers)");
            return 0;
        }

        debug!(topic = ?topic, channel_id = %channel_id, interested, "Event published");
        interested
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

/// Publisher that discards every event.
#[derive(Debug, Default)]
pub struct NoopPublisher {
    events_published: AtomicU64,
}

#[async_trait]
impl EventPublisher for NoopPublisher {
    async fn publish(&self, _event: ChannelEvent) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        0
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventTopic;
    use shared_types::{Address, ChannelId};

    fn opened(id: u64) -> ChannelEvent {
        ChannelEvent::ChannelOpened {
            channel_id: ChannelId(id),
            party_a: Address::new([1; 20]),
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let bus = InMemoryEventBus::new();
        assert_eq!(bus.publish(opened(0)).await, 0);
        assert_eq!(bus.events_published(), 1);
    }

    #[tokio::test]
    async fn test_publish_counts_only_matching_filters() {
        let bus = InMemoryEventBus::new();
        let _all = bus.subscribe(EventFilter::all());
        let _settlement = bus.subscribe(EventFilter::topics(vec![EventTopic::Settlement]));
        let _channel_two = bus.subscribe(EventFilter::channels(vec![ChannelId(2)]));

        assert_eq!(bus.subscriber_count(), 3);
        assert_eq!(bus.publish(opened(0)).await, 1);
        assert_eq!(bus.publish(opened(2)).await, 2);
    }

    #[tokio::test]
    async fn test_noop_publisher_counts() {
        let publisher = NoopPublisher::default();
        assert_eq!(publisher.publish(opened(0)).await, 0);
        assert_eq!(publisher.events_published(), 1);
    }
}
