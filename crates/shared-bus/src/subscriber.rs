//! # Subscriptions
//!
//! Receiving side of the bus. Each live [`Subscription`] registers its filter
//! with the bus so a publish can report how many observers the event reaches.

use crate::events::{ChannelEvent, EventFilter};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The event bus was dropped.
    #[error("Event bus closed")]
    Closed,
}

/// Filters of live subscriptions, keyed by subscription id.
#[derive(Debug, Default)]
pub(crate) struct FilterRegistry {
    next_id: u64,
    filters: HashMap<u64, EventFilter>,
}

impl FilterRegistry {
    pub(crate) fn register(&mut self, filter: EventFilter) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.filters.insert(id, filter);
        id
    }

    /// Subscriptions whose filter accepts `event`.
    pub(crate) fn interested_in(&self, event: &ChannelEvent) -> usize {
        self.filters.values().filter(|f| f.matches(event)).count()
    }

    pub(crate) fn len(&self) -> usize {
        self.filters.len()
    }
}

/// A filtered view of the bus. Deregisters itself on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    receiver: broadcast::Receiver<ChannelEvent>,
    filter: EventFilter,
    registry: Arc<Mutex<FilterRegistry>>,
}

impl Subscription {
    pub(crate) fn new(
        receiver: broadcast::Receiver<ChannelEvent>,
        filter: EventFilter,
        registry: Arc<Mutex<FilterRegistry>>,
    ) -> Self {
        let id = registry.lock().register(filter.clone());
        Self {
            id,
            receiver,
            filter,
            registry,
        }
    }

    /// Next buffered event accepted by the filter, without waiting.
    ///
    /// `Ok(None)` means nothing is buffered. Events lost to lag are skipped.
    pub fn try_recv(&mut self) -> Result<Option<ChannelEvent>, SubscriptionError> {
        loop {
            let event = match self.receiver.try_recv() {
                Ok(event) => event,
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SubscriptionError::Closed)
                }
                Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                    debug!(subscription = self.id, missed, "Subscriber lagged");
                    continue;
                }
            };

            if self.filter.matches(&event) {
                return Ok(Some(event));
            }
        }
    }

    /// Every buffered event accepted by the filter, in publish order.
    pub fn drain(&mut self) -> Vec<ChannelEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// This subscription's filter.
    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.lock().filters.remove(&self.id);
    }
}
