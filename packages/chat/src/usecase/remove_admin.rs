//! UseCase: 管理者の削除
//!
//! 降格できるのはオーナーのみで、オーナー自身は降格できません。

use crate::domain::{DomainEvent, RoomId, UserId};

use super::{context::RoomCommandContext, error::UseCaseError};

/// 管理者削除のユースケース
pub struct RemoveAdminUseCase {
    context: RoomCommandContext,
}

impl RemoveAdminUseCase {
    /// 新しい RemoveAdminUseCase を作成
    pub fn new(context: RoomCommandContext) -> Self {
        Self { context }
    }

    /// `caller` が `target` を降格する
    pub async fn execute(
        &self,
        room_id: &RoomId,
        caller: UserId,
        target: UserId,
    ) -> Result<DomainEvent, UseCaseError> {
        self.context
            .apply(room_id, "remove_admin", |room, now| {
                room.remove_admin(caller, target, now)
            })
            .await
    }
}
