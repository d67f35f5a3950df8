//! Core room aggregate: membership, moderation and the message log.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    error::RoomError,
    event::DomainEvent,
    value_object::{RoomId, RoomName, Timestamp, UserId},
};

/// Maximum message content length in bytes
pub const MAX_MESSAGE_LEN: usize = 1024;

/// A chat room with its membership, admin set and append-only message log.
///
/// Collections are private; every mutation goes through a method that checks
/// all preconditions before touching state and returns the event describing
/// the transition.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRoom {
    id: RoomId,
    name: RoomName,
    /// Creator. Immutable, always a member and an admin.
    owner: UserId,
    /// Current storage holder. Never consulted for authorization.
    custodian: UserId,
    created_at: Timestamp,
    members: BTreeSet<UserId>,
    admins: BTreeSet<UserId>,
    messages: Vec<ChatMessage>,
}

/// Snapshot returned by [`ChatRoom::room_info`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub name: RoomName,
    pub owner: UserId,
    pub created_at: Timestamp,
    pub message_count: u64,
    pub member_count: usize,
}

/// Snapshot returned by [`ChatRoom::room_stats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStats {
    pub member_count: usize,
    pub message_count: u64,
    pub created_at: Timestamp,
}

impl ChatRoom {
    /// Create a room owned by `owner`, who becomes its first member and admin.
    pub fn create(
        id: RoomId,
        name: RoomName,
        owner: UserId,
        created_at: Timestamp,
    ) -> (Self, DomainEvent) {
        let room = Self {
            id: id.clone(),
            name: name.clone(),
            owner: owner.clone(),
            custodian: owner.clone(),
            created_at,
            members: BTreeSet::from([owner.clone()]),
            admins: BTreeSet::from([owner.clone()]),
            messages: Vec::new(),
        };
        let event = DomainEvent::ChatRoomCreated {
            room_id: id,
            name,
            owner,
            timestamp: created_at,
        };
        (room, event)
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn custodian(&self) -> &UserId {
        &self.custodian
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn message_count(&self) -> u64 {
        self.messages.len() as u64
    }

    /// Hand the room's storage custody to another holder.
    ///
    /// Unconditional. The logical `owner` is untouched, so the new custodian
    /// gains no privileges.
    pub fn transfer(&mut self, new_custodian: UserId) {
        self.custodian = new_custodian;
    }

    pub fn is_owner(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    pub fn is_member(&self, user: &UserId) -> bool {
        self.members.contains(user)
    }

    pub fn is_admin(&self, user: &UserId) -> bool {
        self.admins.contains(user)
    }

    /// All current members, in identity order
    pub fn members(&self) -> impl Iterator<Item = &UserId> {
        self.members.iter()
    }

    /// All current admins, in identity order
    pub fn admins(&self) -> impl Iterator<Item = &UserId> {
        self.admins.iter()
    }

    /// Add the caller to the member set.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::AlreadyMember` if the caller is already a member
    pub fn join(&mut self, caller: UserId, now: Timestamp) -> Result<DomainEvent, RoomError> {
        if self.is_member(&caller) {
            return Err(RoomError::AlreadyMember);
        }
        self.members.insert(caller.clone());
        Ok(DomainEvent::MemberJoined {
            room_id: self.id.clone(),
            member: caller,
            timestamp: now,
        })
    }

    /// Remove the caller from the member set, and from the admin set if present.
    ///
    /// # Errors
    ///
    /// - `RoomError::NotMember` if the caller is not a member
    /// - `RoomError::NotOwner` if the caller is the owner (the owner can never leave)
    pub fn leave(&mut self, caller: UserId, now: Timestamp) -> Result<DomainEvent, RoomError> {
        if !self.is_member(&caller) {
            return Err(RoomError::NotMember);
        }
        if self.is_owner(&caller) {
            return Err(RoomError::NotOwner);
        }
        self.members.remove(&caller);
        self.admins.remove(&caller);
        Ok(DomainEvent::MemberLeft {
            room_id: self.id.clone(),
            member: caller,
            timestamp: now,
        })
    }

    /// Promote a member to admin. Any admin may promote, not only the owner.
    ///
    /// # Errors
    ///
    /// - `RoomError::NotOwner` if the caller is neither owner nor admin
    /// - `RoomError::NotMember` if the target is not a member
    /// - `RoomError::AlreadyMember` if the target is already an admin
    pub fn add_admin(
        &mut self,
        caller: UserId,
        target: UserId,
        now: Timestamp,
    ) -> Result<DomainEvent, RoomError> {
        if !self.is_owner(&caller) && !self.is_admin(&caller) {
            return Err(RoomError::NotOwner);
        }
        if !self.is_member(&target) {
            return Err(RoomError::NotMember);
        }
        if self.is_admin(&target) {
            return Err(RoomError::AlreadyMember);
        }
        self.admins.insert(target.clone());
        Ok(DomainEvent::AdminAdded {
            room_id: self.id.clone(),
            admin: target,
            added_by: caller,
            timestamp: now,
        })
    }

    /// Demote an admin. Owner only; the owner itself can never be demoted.
    ///
    /// # Errors
    ///
    /// - `RoomError::NotOwner` if the caller is not the owner, or the target is the owner
    /// - `RoomError::NotMember` if the target is not an admin
    pub fn remove_admin(
        &mut self,
        caller: UserId,
        target: UserId,
        now: Timestamp,
    ) -> Result<DomainEvent, RoomError> {
        if !self.is_owner(&caller) {
            return Err(RoomError::NotOwner);
        }
        if self.is_owner(&target) {
            return Err(RoomError::NotOwner);
        }
        if !self.is_admin(&target) {
            return Err(RoomError::NotMember);
        }
        self.admins.remove(&target);
        Ok(DomainEvent::AdminRemoved {
            room_id: self.id.clone(),
            admin: target,
            removed_by: caller,
            timestamp: now,
        })
    }

    /// Append a message at index `message_count`.
    ///
    /// # Errors
    ///
    /// - `RoomError::NotMember` if the caller is not a member
    /// - `RoomError::MessageTooLong` if the content exceeds [`MAX_MESSAGE_LEN`] bytes
    pub fn send_message(
        &mut self,
        caller: UserId,
        content: String,
        now: Timestamp,
    ) -> Result<DomainEvent, RoomError> {
        if !self.is_member(&caller) {
            return Err(RoomError::NotMember);
        }
        let len = content.len();
        if len > MAX_MESSAGE_LEN {
            return Err(RoomError::MessageTooLong {
                max: MAX_MESSAGE_LEN,
                actual: len,
            });
        }
        self.messages.push(ChatMessage::new(
            self.message_count(),
            caller.clone(),
            content.clone(),
            now,
        ));
        Ok(DomainEvent::MessageSent {
            room_id: self.id.clone(),
            sender: caller,
            content,
            timestamp: now,
        })
    }

    /// Signal that a message should be hidden.
    ///
    /// Deletion is logical only: the stored record and `message_count` are
    /// left as they are, and only a `MessageDeleted` event is produced.
    ///
    /// # Errors
    ///
    /// - `RoomError::NotOwner` if the caller is not owner, admin, or the message's sender
    /// - `RoomError::MessageNotFound` if `message_id >= message_count`
    pub fn delete_message(
        &self,
        caller: UserId,
        message_id: u64,
        now: Timestamp,
    ) -> Result<DomainEvent, RoomError> {
        let message = self.message_at(message_id);
        let is_sender = message.is_some_and(|m| m.sender == caller);
        if !self.is_owner(&caller) && !self.is_admin(&caller) && !is_sender {
            return Err(RoomError::NotOwner);
        }
        if message.is_none() {
            return Err(self.not_found(message_id));
        }
        Ok(DomainEvent::MessageDeleted {
            room_id: self.id.clone(),
            message_id,
            deleted_by: caller,
            timestamp: now,
        })
    }

    /// Messages in `[start, min(start + limit, message_count))`, ascending.
    ///
    /// Empty when `start >= message_count`. Never fails.
    pub fn get_messages(&self, start: u64, limit: u64) -> &[ChatMessage] {
        let count = self.messages.len();
        let Ok(start) = usize::try_from(start) else {
            return &[];
        };
        if start >= count {
            return &[];
        }
        let end = usize::try_from(limit).map_or(count, |limit| start.saturating_add(limit).min(count));
        &self.messages[start..end]
    }

    /// # Errors
    ///
    /// Returns `RoomError::MessageNotFound` if `id >= message_count`
    pub fn get_message(&self, id: u64) -> Result<&ChatMessage, RoomError> {
        self.message_at(id).ok_or_else(|| self.not_found(id))
    }

    pub fn room_info(&self) -> RoomInfo {
        RoomInfo {
            name: self.name.clone(),
            owner: self.owner.clone(),
            created_at: self.created_at,
            message_count: self.message_count(),
            member_count: self.member_count(),
        }
    }

    pub fn room_stats(&self) -> RoomStats {
        RoomStats {
            member_count: self.member_count(),
            message_count: self.message_count(),
            created_at: self.created_at,
        }
    }

    fn message_at(&self, id: u64) -> Option<&ChatMessage> {
        usize::try_from(id).ok().and_then(|i| self.messages.get(i))
    }

    fn not_found(&self, id: u64) -> RoomError {
        RoomError::MessageNotFound {
            id,
            count: self.message_count(),
        }
    }
}

/// Represents a chat message stored in a room's log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Index in the room's log
    pub id: u64,
    /// Member who sent the message
    pub sender: UserId,
    /// Message content (at most [`MAX_MESSAGE_LEN`] bytes)
    pub content: String,
    /// Timestamp when the message was appended
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(id: u64, sender: UserId, content: String, timestamp: Timestamp) -> Self {
        Self {
            id,
            sender,
            content,
            timestamp,
        }
    }
}
