//! User profile: a persisted display identity owned by a single user.

use serde::{Deserialize, Serialize};

use super::{
    error::ProfileError,
    event::DomainEvent,
    value_object::{ProfileId, Timestamp, UserId, Username},
};

/// A user's display identity.
///
/// Only the owner may rename it. Uniqueness of one profile per identity is
/// left to the surrounding registry.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    id: ProfileId,
    owner: UserId,
    username: Username,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Snapshot returned by [`UserProfile::info`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub owner: UserId,
    pub username: Username,
    pub created_at: Timestamp,
}

impl UserProfile {
    /// Register a new profile owned by `owner`.
    pub fn register(
        id: ProfileId,
        owner: UserId,
        username: Username,
        created_at: Timestamp,
    ) -> (Self, DomainEvent) {
        let event = DomainEvent::UserRegistered {
            identity: owner.clone(),
            username: username.clone(),
            timestamp: created_at,
        };
        let profile = Self {
            id,
            owner,
            username,
            created_at,
            updated_at: created_at,
        };
        (profile, event)
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Replace the username.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotAuthorized` if the caller is not the owner
    pub fn update_username(
        &mut self,
        caller: &UserId,
        new_username: Username,
        now: Timestamp,
    ) -> Result<(), ProfileError> {
        if caller != &self.owner {
            return Err(ProfileError::NotAuthorized);
        }
        self.username = new_username;
        self.updated_at = now;
        Ok(())
    }

    pub fn info(&self) -> ProfileInfo {
        ProfileInfo {
            owner: self.owner.clone(),
            username: self.username.clone(),
            created_at: self.created_at,
        }
    }
}
