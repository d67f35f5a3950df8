//! Domain events emitted by successful state transitions.
//!
//! Every mutating operation on a room or profile returns exactly one event.
//! Use cases hand the event to an [`EventPublisher`](super::port::EventPublisher),
//! which relays it to external observers such as indexers.

use serde::{Deserialize, Serialize};

use super::value_object::{RoomId, RoomName, Timestamp, UserId, Username};

/// Outbound notification describing what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DomainEvent {
    UserRegistered {
        identity: UserId,
        username: Username,
        timestamp: Timestamp,
    },
    ChatRoomCreated {
        room_id: RoomId,
        name: RoomName,
        owner: UserId,
        timestamp: Timestamp,
    },
    MessageSent {
        room_id: RoomId,
        sender: UserId,
        content: String,
        timestamp: Timestamp,
    },
    MemberJoined {
        room_id: RoomId,
        member: UserId,
        timestamp: Timestamp,
    },
    MemberLeft {
        room_id: RoomId,
        member: UserId,
        timestamp: Timestamp,
    },
    AdminAdded {
        room_id: RoomId,
        admin: UserId,
        added_by: UserId,
        timestamp: Timestamp,
    },
    AdminRemoved {
        room_id: RoomId,
        admin: UserId,
        removed_by: UserId,
        timestamp: Timestamp,
    },
    MessageDeleted {
        room_id: RoomId,
        message_id: u64,
        deleted_by: UserId,
        timestamp: Timestamp,
    },
}

impl DomainEvent {
    /// Short kebab-case name, matching the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserRegistered { .. } => "user-registered",
            Self::ChatRoomCreated { .. } => "chat-room-created",
            Self::MessageSent { .. } => "message-sent",
            Self::MemberJoined { .. } => "member-joined",
            Self::MemberLeft { .. } => "member-left",
            Self::AdminAdded { .. } => "admin-added",
            Self::AdminRemoved { .. } => "admin-removed",
            Self::MessageDeleted { .. } => "message-deleted",
        }
    }

    /// Room the event belongs to, if any.
    pub fn room_id(&self) -> Option<&RoomId> {
        match self {
            Self::UserRegistered { .. } => None,
            Self::ChatRoomCreated { room_id, .. }
            | Self::MessageSent { room_id, .. }
            | Self::MemberJoined { room_id, .. }
            | Self::MemberLeft { room_id, .. }
            | Self::AdminAdded { room_id, .. }
            | Self::AdminRemoved { room_id, .. }
            | Self::MessageDeleted { room_id, .. } => Some(room_id),
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::UserRegistered { timestamp, .. }
            | Self::ChatRoomCreated { timestamp, .. }
            | Self::MessageSent { timestamp, .. }
            | Self::MemberJoined { timestamp, .. }
            | Self::MemberLeft { timestamp, .. }
            | Self::AdminAdded { timestamp, .. }
            | Self::AdminRemoved { timestamp, .. }
            | Self::MessageDeleted { timestamp, .. } => *timestamp,
        }
    }

    /// Serialize to the JSON shape consumed by indexers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
