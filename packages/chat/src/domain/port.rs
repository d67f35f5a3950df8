//! Ports to the environment: time source and event sink.

use super::{event::DomainEvent, value_object::Timestamp};

/// Source of logical timestamps
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Outbound channel for domain events.
///
/// Publishing never fails from the caller's point of view; an implementation
/// with no listeners simply drops the event.
#[cfg_attr(test, mockall::automock)]
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: DomainEvent);
}
