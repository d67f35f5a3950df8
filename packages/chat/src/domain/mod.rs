//! Domain layer for the room state machine.
//!
//! This module contains business rules that are independent of
//! storage, transport and event delivery.

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod port;
pub mod profile;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, ChatRoom, MAX_MESSAGE_LEN, RoomInfo, RoomStats};
pub use error::{ProfileError, RepositoryError, RoomError, ValueObjectError};
pub use event::DomainEvent;
pub use factory::{ProfileIdFactory, RoomIdFactory};
pub use port::{Clock, EventPublisher};
pub use profile::{ProfileInfo, UserProfile};
pub use repository::{ProfileRepository, RoomRepository, SharedProfile, SharedRoom};
pub use value_object::{ProfileId, RoomId, RoomName, Timestamp, UserId, Username};
