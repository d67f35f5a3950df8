//! UseCase: ルーム退出
//!
//! オーナーは退出できません（NotOwner）。管理者が退出した場合は管理者集合からも外れます。

use crate::domain::{DomainEvent, RoomId, UserId};

use super::{context::RoomCommandContext, error::UseCaseError};

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    context: RoomCommandContext,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(context: RoomCommandContext) -> Self {
        Self { context }
    }

    /// 退出を実行
    pub async fn execute(&self, room_id: &RoomId, caller: UserId) -> Result<DomainEvent, UseCaseError> {
        self.context
            .apply(room_id, "leave", |room, now| room.leave(caller, now))
            .await
    }
}
