//! UseCase: 管理者の追加
//!
//! オーナーだけでなく既存の管理者も他のメンバーを昇格できます（推移的な付与）。

use crate::domain::{DomainEvent, RoomId, UserId};

use super::{context::RoomCommandContext, error::UseCaseError};

/// 管理者追加のユースケース
pub struct AddAdminUseCase {
    context: RoomCommandContext,
}

impl AddAdminUseCase {
    /// 新しい AddAdminUseCase を作成
    pub fn new(context: RoomCommandContext) -> Self {
        Self { context }
    }

    /// `caller` が `target` を管理者に昇格する
    pub async fn execute(
        &self,
        room_id: &RoomId,
        caller: UserId,
        target: UserId,
    ) -> Result<DomainEvent, UseCaseError> {
        self.context
            .apply(room_id, "add_admin", |room, now| {
                room.add_admin(caller, target, now)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{RoomError, RoomRepository},
        infrastructure::InMemoryRoomRepository,
        usecase::test_support::{context, expect_no_event, expect_one_event, seed_room, user},
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_admin_can_promote() {
        // テスト項目: 管理者になったメンバーが他のメンバーを昇格できる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room_id = seed_room(&repository, "u1", &["u2", "u3"]).await;
        {
            let handle = repository.find(&room_id).await.unwrap();
            let mut room = handle.lock().await;
            room.add_admin(user("u1"), user("u2"), crate::domain::Timestamp::new(2000))
                .unwrap();
        }
        let publisher = expect_one_event(|e| {
            matches!(
                e,
                DomainEvent::AdminAdded { admin, added_by, .. }
                    if admin.as_str() == "u3" && added_by.as_str() == "u2"
            )
        });
        let usecase = AddAdminUseCase::new(context(repository.clone(), publisher));

        // when (操作):
        let result = usecase.execute(&room_id, user("u2"), user("u3")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let handle = repository.find(&room_id).await.unwrap();
        assert!(handle.lock().await.is_admin(&user("u3")));
    }

    #[tokio::test]
    async fn test_plain_member_cannot_promote() {
        // テスト項目: 管理者でないメンバーの昇格は NotOwner
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room_id = seed_room(&repository, "u1", &["u2", "u3"]).await;
        let usecase = AddAdminUseCase::new(context(repository, expect_no_event()));

        // when (操作):
        let result = usecase.execute(&room_id, user("u2"), user("u3")).await;

        // then (期待する結果):
        assert_eq!(result, Err(UseCaseError::Room(RoomError::NotOwner)));
    }

    #[tokio::test]
    async fn test_promote_non_member_fails() {
        // テスト項目: 非メンバーは昇格できない（NotMember）
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room_id = seed_room(&repository, "u1", &[]).await;
        let usecase = AddAdminUseCase::new(context(repository, expect_no_event()));

        // when (操作):
        let result = usecase.execute(&room_id, user("u1"), user("u9")).await;

        // then (期待する結果):
        assert_eq!(result, Err(UseCaseError::Room(RoomError::NotMember)));
    }
}
