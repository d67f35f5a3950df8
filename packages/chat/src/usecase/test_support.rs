//! UseCase テスト用の共通ヘルパー

use std::sync::Arc;

use crate::{
    domain::{
        ChatRoom, DomainEvent, RoomId, RoomIdFactory, RoomName, RoomRepository, Timestamp, UserId,
        port::{MockClock, MockEventPublisher},
    },
    infrastructure::InMemoryRoomRepository,
};

use super::context::RoomCommandContext;

pub(crate) fn user(name: &str) -> UserId {
    UserId::new(name.to_string()).unwrap()
}

/// 常に同じ時刻を返す Clock
pub(crate) fn fixed_clock(millis: i64) -> Arc<MockClock> {
    let mut clock = MockClock::new();
    clock.expect_now().return_const(Timestamp::new(millis));
    Arc::new(clock)
}

/// 条件を満たすイベントがちょうど 1 回発行されることを期待する Publisher
pub(crate) fn expect_one_event<F>(predicate: F) -> Arc<MockEventPublisher>
where
    F: Fn(&DomainEvent) -> bool + Send + 'static,
{
    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .withf(predicate)
        .times(1)
        .return_const(());
    Arc::new(publisher)
}

/// イベントが一度も発行されないことを期待する Publisher
pub(crate) fn expect_no_event() -> Arc<MockEventPublisher> {
    let mut publisher = MockEventPublisher::new();
    publisher.expect_publish().never();
    Arc::new(publisher)
}

/// `owner` が作成し `members` が参加済みのルームを Repository に登録する
pub(crate) async fn seed_room(
    repository: &InMemoryRoomRepository,
    owner: &str,
    members: &[&str],
) -> RoomId {
    let (mut room, _) = ChatRoom::create(
        RoomIdFactory::generate().unwrap(),
        RoomName::new("general".to_string()).unwrap(),
        user(owner),
        Timestamp::new(1000),
    );
    for member in members {
        room.join(user(member), Timestamp::new(1500)).unwrap();
    }
    let room_id = room.id().clone();
    repository.insert(room).await.unwrap();
    room_id
}

/// テスト用の RoomCommandContext
pub(crate) fn context(
    repository: Arc<InMemoryRoomRepository>,
    publisher: Arc<MockEventPublisher>,
) -> RoomCommandContext {
    RoomCommandContext::new(repository, fixed_clock(5000), publisher)
}
