//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::{ProfileId, RoomId};

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserId validation error
    #[error("UserId cannot be empty")]
    UserIdEmpty,

    /// UserId too long error
    #[error("UserId cannot exceed {max} bytes (got {actual})")]
    UserIdTooLong { max: usize, actual: usize },

    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// RoomId invalid format error (not a valid UUID format)
    #[error("RoomId must be a valid UUID format (got: {0})")]
    RoomIdInvalidFormat(String),

    /// ProfileId validation error
    #[error("ProfileId cannot be empty")]
    ProfileIdEmpty,

    /// ProfileId invalid format error (not a valid UUID format)
    #[error("ProfileId must be a valid UUID format (got: {0})")]
    ProfileIdInvalidFormat(String),

    /// RoomName validation error
    #[error("RoomName cannot be empty")]
    RoomNameEmpty,

    /// RoomName too long error
    #[error("RoomName cannot exceed {max} bytes (got {actual})")]
    RoomNameTooLong { max: usize, actual: usize },

    /// Username validation error
    #[error("Username cannot be empty")]
    UsernameEmpty,

    /// Username too long error
    #[error("Username cannot exceed {max} bytes (got {actual})")]
    UsernameTooLong { max: usize, actual: usize },
}

/// Errors raised by the room state machine.
///
/// `NotOwner` covers every missing privilege, including the owner trying to
/// leave and the owner being demoted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// Caller or target lacks the required membership
    #[error("Not a member of the room")]
    NotMember,

    /// Duplicate join or duplicate admin grant
    #[error("Already a member of the room")]
    AlreadyMember,

    /// Caller lacks the owner/admin privilege for this transition
    #[error("Operation requires owner or admin privilege")]
    NotOwner,

    /// Message content exceeds the byte bound
    #[error("Message cannot exceed {max} bytes (got {actual})")]
    MessageTooLong { max: usize, actual: usize },

    /// Referenced index is outside the populated range
    #[error("Message {id} not found (message count: {count})")]
    MessageNotFound { id: u64, count: u64 },
}

/// Errors raised by the user profile
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Profile mutation attempted by someone other than its owner
    #[error("Only the profile owner may modify this profile")]
    NotAuthorized,
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No room stored under the given id
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    /// No profile stored under the given id
    #[error("Profile not found: {0}")]
    ProfileNotFound(ProfileId),

    /// A room with the same id is already stored
    #[error("Room already exists: {0}")]
    DuplicateRoom(RoomId),

    /// A profile with the same id is already stored
    #[error("Profile already exists: {0}")]
    DuplicateProfile(ProfileId),
}
