//! ルーム操作 UseCase の共通処理
//!
//! ルームを Repository から取得してロックし、ドメインの状態遷移を適用し、
//! 成功した場合はロックを保持したままイベントを発行します。
//! ロック中に発行するため、同一ルームのイベント順序は状態遷移の順序と一致します。

use std::sync::Arc;

use crate::domain::{
    ChatRoom, Clock, DomainEvent, EventPublisher, RoomError, RoomId, RoomRepository, Timestamp,
};

use super::error::UseCaseError;

/// ルーム操作 UseCase が共有する依存関係
#[derive(Clone)]
pub struct RoomCommandContext {
    /// Repository（データアクセス層の抽象化）
    pub(crate) repository: Arc<dyn RoomRepository>,
    /// 時刻の取得元
    pub(crate) clock: Arc<dyn Clock>,
    /// イベントの発行先
    pub(crate) publisher: Arc<dyn EventPublisher>,
}

impl RoomCommandContext {
    /// 新しい RoomCommandContext を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        clock: Arc<dyn Clock>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            clock,
            publisher,
        }
    }

    /// ルームに状態遷移を適用する
    ///
    /// # Arguments
    ///
    /// * `room_id` - 対象ルーム
    /// * `operation` - ログ出力用の操作名
    /// * `command` - ドメインの状態遷移（ロック中に呼ばれる）
    pub(crate) async fn apply<F>(
        &self,
        room_id: &RoomId,
        operation: &'static str,
        command: F,
    ) -> Result<DomainEvent, UseCaseError>
    where
        F: FnOnce(&mut ChatRoom, Timestamp) -> Result<DomainEvent, RoomError>,
    {
        let handle = self.repository.find(room_id).await.inspect_err(|e| {
            tracing::warn!(%room_id, operation, error = %e, "Room lookup failed");
        })?;
        let mut room = handle.lock().await;
        let now = self.clock.now();

        match command(&mut *room, now) {
            Ok(event) => {
                tracing::info!(%room_id, operation, event = event.kind(), "Room transition applied");
                self.publisher.publish(event.clone());
                Ok(event)
            }
            Err(e) => {
                tracing::warn!(%room_id, operation, error = %e, "Room transition rejected");
                Err(e.into())
            }
        }
    }
}
