//! UseCase: ルーム参加
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//!
//! ### どのような状況を想定しているか
//! - 正常系：非メンバーの参加と MemberJoined イベントの発行
//! - 異常系：二重参加（AlreadyMember、状態は変わらずイベントも発行されない）
//! - 異常系：存在しないルーム

use crate::domain::{DomainEvent, RoomId, UserId};

use super::{context::RoomCommandContext, error::UseCaseError};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    context: RoomCommandContext,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(context: RoomCommandContext) -> Self {
        Self { context }
    }

    /// 参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(DomainEvent::MemberJoined)` - 参加成功
    /// * `Err(UseCaseError)` - 既にメンバー、またはルームが存在しない
    pub async fn execute(&self, room_id: &RoomId, caller: UserId) -> Result<DomainEvent, UseCaseError> {
        self.context
            .apply(room_id, "join", |room, now| room.join(caller, now))
            .await
    }
}
