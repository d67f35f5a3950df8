//! Infrastructure layer: concrete implementations of the domain ports.

pub mod clock;
pub mod publisher;
pub mod repository;

pub use clock::SystemClock;
pub use publisher::BroadcastEventPublisher;
pub use repository::{InMemoryProfileRepository, InMemoryRoomRepository};
