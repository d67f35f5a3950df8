//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ルームごとに `Arc<Mutex<ChatRoom>>` を保持し、UseCase はこのロックを
//! 取得してから状態遷移を行います。HashMap 自体の RwLock は検索・挿入の間だけ保持されます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::{ChatRoom, RepositoryError, RoomId, RoomRepository, SharedRoom};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    /// RoomId をキーにしたルーム一覧
    rooms: RwLock<HashMap<RoomId, SharedRoom>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert(&self, room: ChatRoom) -> Result<SharedRoom, RepositoryError> {
        let mut rooms = self.rooms.write().await;
        let room_id = room.id().clone();
        if rooms.contains_key(&room_id) {
            return Err(RepositoryError::DuplicateRoom(room_id));
        }
        let shared = Arc::new(Mutex::new(room));
        rooms.insert(room_id, shared.clone());
        Ok(shared)
    }

    async fn find(&self, room_id: &RoomId) -> Result<SharedRoom, RepositoryError> {
        let rooms = self.rooms.read().await;
        rooms
            .get(room_id)
            .cloned()
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.clone()))
    }

    async fn count(&self) -> usize {
        self.rooms.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RoomIdFactory, RoomName, Timestamp, UserId};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryRoomRepository の挿入・検索
    // - 同じ RoomId の二重挿入がエラーになること
    // - find() で得たハンドル経由の変更が共有されること
    //
    // 【なぜこのテストが必要か】
    // - UseCase はルームごとのロックを直列化ポイントとして利用する
    // - ハンドルが共有されていないと変更が失われる
    // ========================================

    fn create_room() -> ChatRoom {
        let (room, _) = ChatRoom::create(
            RoomIdFactory::generate().unwrap(),
            RoomName::new("general".to_string()).unwrap(),
            UserId::new("alice".to_string()).unwrap(),
            Timestamp::new(1000),
        );
        room
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        // テスト項目: 挿入したルームを ID で取得できる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room = create_room();
        let room_id = room.id().clone();

        // when (操作):
        repo.insert(room).await.unwrap();
        let found = repo.find(&room_id).await;

        // then (期待する結果):
        assert!(found.is_ok());
        assert_eq!(found.unwrap().lock().await.id(), &room_id);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_fails() {
        // テスト項目: 同じ ID のルームを二重に挿入するとエラーになる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room = create_room();
        let room_id = room.id().clone();
        repo.insert(room.clone()).await.unwrap();

        // when (操作):
        let result = repo.insert(room).await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), RepositoryError::DuplicateRoom(room_id));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_find_nonexistent_room() {
        // テスト項目: 存在しないルームの検索は RoomNotFound
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room_id = RoomIdFactory::generate().unwrap();

        // when (操作):
        let result = repo.find(&room_id).await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), RepositoryError::RoomNotFound(room_id));
    }

    #[tokio::test]
    async fn test_handle_is_shared() {
        // テスト項目: find() で得たハンドルへの変更は次の find() でも見える
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room = create_room();
        let room_id = room.id().clone();
        repo.insert(room).await.unwrap();

        // when (操作):
        {
            let handle = repo.find(&room_id).await.unwrap();
            let mut room = handle.lock().await;
            room.join(UserId::new("bob".to_string()).unwrap(), Timestamp::new(2000))
                .unwrap();
        }

        // then (期待する結果):
        let handle = repo.find(&room_id).await.unwrap();
        assert_eq!(handle.lock().await.member_count(), 2);
    }
}
