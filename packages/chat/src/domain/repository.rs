//! Repository traits.
//!
//! The domain layer defines what it needs from storage; infrastructure provides
//! the implementations (dependency inversion). Each aggregate is handed out
//! behind its own mutex, which is the serialization point for every operation
//! on that room or profile.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{
    entity::ChatRoom,
    error::RepositoryError,
    profile::UserProfile,
    value_object::{ProfileId, RoomId},
};

/// A room guarded by its own lock
pub type SharedRoom = Arc<Mutex<ChatRoom>>;

/// A profile guarded by its own lock
pub type SharedProfile = Arc<Mutex<UserProfile>>;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Store a newly created room and return its shared handle.
    async fn insert(&self, room: ChatRoom) -> Result<SharedRoom, RepositoryError>;

    /// Look up a room by id.
    async fn find(&self, room_id: &RoomId) -> Result<SharedRoom, RepositoryError>;

    /// Number of stored rooms.
    async fn count(&self) -> usize;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Store a newly registered profile and return its shared handle.
    async fn insert(&self, profile: UserProfile) -> Result<SharedProfile, RepositoryError>;

    /// Look up a profile by id.
    async fn find(&self, profile_id: &ProfileId) -> Result<SharedProfile, RepositoryError>;

    /// Number of stored profiles.
    async fn count(&self) -> usize;
}
