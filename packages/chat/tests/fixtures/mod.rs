//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use agora_chat::{
    ChatConfig, ChatService,
    domain::{Clock, RoomId, Timestamp, UserId},
};

/// Clock that advances by one millisecond on every read
pub struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(millis: i64) -> Self {
        Self {
            next: AtomicI64::new(millis),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

pub fn user(name: &str) -> UserId {
    UserId::new(name.to_string()).expect("valid user id")
}

/// Service with a deterministic clock starting at 1000
pub fn service() -> ChatService {
    ChatService::with_clock(
        &ChatConfig::default(),
        Arc::new(SteppingClock::starting_at(1000)),
    )
}

/// Check the room invariants through the public read API
pub async fn assert_room_invariants(service: &ChatService, room_id: &RoomId) {
    let info = service.room_info(room_id).await.expect("room exists");
    let members = service.members(room_id).await.expect("room exists");
    let admins = service.admins(room_id).await.expect("room exists");

    assert!(members.contains(&info.owner), "owner must be a member");
    assert!(admins.contains(&info.owner), "owner must be an admin");
    for admin in &admins {
        assert!(members.contains(admin), "admin {admin} must be a member");
    }
    assert_eq!(info.member_count, members.len());

    let log = service
        .get_messages(room_id, 0, u64::MAX)
        .await
        .expect("room exists");
    assert_eq!(log.len() as u64, info.message_count);
    for (index, message) in log.iter().enumerate() {
        assert_eq!(message.id, index as u64);
    }
}
