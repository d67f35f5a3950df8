//! UseCase: ルームの参照系操作
//!
//! 状態を変更しない読み取り専用の操作をまとめています。ロック中に必要な値を
//! コピーして返すため、呼び出し側がルームの内部コレクションへの参照を持つことはありません。

use std::sync::Arc;

use crate::domain::{ChatMessage, RoomId, RoomInfo, RoomRepository, RoomStats, UserId};

use super::error::UseCaseError;

/// ルーム参照のユースケース
pub struct RoomQueryUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl RoomQueryUseCase {
    /// 新しい RoomQueryUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// (name, owner, created_at, message_count, member_count)
    pub async fn room_info(&self, room_id: &RoomId) -> Result<RoomInfo, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        Ok(room.room_info())
    }

    /// (member_count, message_count, created_at)
    pub async fn room_stats(&self, room_id: &RoomId) -> Result<RoomStats, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        Ok(room.room_stats())
    }

    /// `[start, min(start + limit, message_count))` の範囲のメッセージを昇順で返す
    ///
    /// 範囲外の `start` は空の Vec になります。ルームが存在しない場合のみエラーです。
    pub async fn get_messages(
        &self,
        room_id: &RoomId,
        start: u64,
        limit: u64,
    ) -> Result<Vec<ChatMessage>, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        let messages = room.get_messages(start, limit).to_vec();
        tracing::debug!(%room_id, start, limit, returned = messages.len(), "Fetched messages");
        Ok(messages)
    }

    pub async fn get_message(
        &self,
        room_id: &RoomId,
        message_id: u64,
    ) -> Result<ChatMessage, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        Ok(room.get_message(message_id)?.clone())
    }

    pub async fn is_member(&self, room_id: &RoomId, user: &UserId) -> Result<bool, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        Ok(room.is_member(user))
    }

    pub async fn is_admin(&self, room_id: &RoomId, user: &UserId) -> Result<bool, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        Ok(room.is_admin(user))
    }

    /// 全メンバー（ID 順）
    pub async fn members(&self, room_id: &RoomId) -> Result<Vec<UserId>, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        Ok(room.members().cloned().collect())
    }

    /// 全管理者（ID 順）
    pub async fn admins(&self, room_id: &RoomId) -> Result<Vec<UserId>, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        Ok(room.admins().cloned().collect())
    }

    /// 現在の保管者
    pub async fn custodian(&self, room_id: &RoomId) -> Result<UserId, UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let room = handle.lock().await;
        Ok(room.custodian().clone())
    }
}
