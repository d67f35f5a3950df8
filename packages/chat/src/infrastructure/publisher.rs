//! Event publisher fanning domain events out over a `tokio::sync::broadcast` channel.
//!
//! Observers (indexers, notification relays) call [`BroadcastEventPublisher::subscribe`]
//! and receive every event published after subscribing. A slow observer that falls
//! more than `capacity` events behind sees `RecvError::Lagged` and skips ahead.

use tokio::sync::broadcast;

use crate::domain::{DomainEvent, EventPublisher};

/// Default channel capacity
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<DomainEvent>,
}

impl BroadcastEventPublisher {
    /// Create a publisher whose channel buffers up to `capacity` events.
    ///
    /// `capacity` must be greater than zero; zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Register a new observer.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of currently attached observers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEventPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventPublisher for BroadcastEventPublisher {
    fn publish(&self, event: DomainEvent) {
        let kind = event.kind();
        let at = event.timestamp().to_jst_rfc3339();
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!(event = kind, %at, receivers, "Published domain event");
            }
            Err(_) => {
                // no observers attached
                tracing::debug!(event = kind, %at, "Dropped domain event without observers");
            }
        }
    }
}
