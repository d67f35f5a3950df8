//! Domain factories for creating domain entities and value objects.

use super::{ProfileId, RoomId, error::ValueObjectError};

/// Factory for generating RoomId instances.
///
/// This factory encapsulates the logic for generating new room identifiers,
/// separating the generation concern from the validation logic in RoomId.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId with a random UUID v4.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for consistency
    /// with the domain error handling pattern.
    pub fn generate() -> Result<RoomId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        RoomId::from_uuid(uuid)
    }
}

/// Factory for generating ProfileId instances.
pub struct ProfileIdFactory;

impl ProfileIdFactory {
    /// Generate a new ProfileId with a random UUID v4.
    pub fn generate() -> Result<ProfileId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        ProfileId::from_uuid(uuid)
    }
}
