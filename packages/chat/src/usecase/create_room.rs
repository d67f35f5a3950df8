//! UseCase: ルーム作成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - 作成者がオーナー・メンバー・管理者としてルームが登録されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム作成と ChatRoomCreated イベントの発行
//! - 正常系：同じユーザーが複数のルームを作成できる

use std::sync::Arc;

use crate::domain::{
    ChatRoom, Clock, DomainEvent, EventPublisher, RoomId, RoomIdFactory, RoomName, RoomRepository,
    UserId,
};

use super::error::UseCaseError;

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
    publisher: Arc<dyn EventPublisher>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
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

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `caller` - 作成者（オーナーになる）
    /// * `name` - ルーム名
    ///
    /// # Returns
    ///
    /// * `Ok((RoomId, DomainEvent))` - 新しいルーム ID と ChatRoomCreated イベント
    /// * `Err(UseCaseError)` - 作成失敗
    pub async fn execute(
        &self,
        caller: UserId,
        name: RoomName,
    ) -> Result<(RoomId, DomainEvent), UseCaseError> {
        let room_id = RoomIdFactory::generate()?;
        let (room, event) = ChatRoom::create(room_id.clone(), name, caller, self.clock.now());

        // ロックを保持したままイベントを発行し、後続の操作イベントより先に届くようにする
        let handle = self.repository.insert(room).await?;
        let _room = handle.lock().await;
        tracing::info!(%room_id, event = event.kind(), "Room created");
        self.publisher.publish(event.clone());

        Ok((room_id, event))
    }
}
