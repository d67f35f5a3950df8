//! UseCase: メッセージ削除
//!
//! 削除は論理削除のみです。ログの内容と件数は変わらず、MessageDeleted イベントだけが
//! 発行されます（インデクサ側で非表示にする想定）。

use crate::domain::{DomainEvent, RoomId, UserId};

use super::{context::RoomCommandContext, error::UseCaseError};

/// メッセージ削除のユースケース
pub struct DeleteMessageUseCase {
    context: RoomCommandContext,
}

impl DeleteMessageUseCase {
    /// 新しい DeleteMessageUseCase を作成
    pub fn new(context: RoomCommandContext) -> Self {
        Self { context }
    }

    /// 削除を実行（オーナー・管理者・送信者のみ）
    pub async fn execute(
        &self,
        room_id: &RoomId,
        caller: UserId,
        message_id: u64,
    ) -> Result<DomainEvent, UseCaseError> {
        self.context
            .apply(room_id, "delete_message", |room, now| {
                room.delete_message(caller, message_id, now)
            })
            .await
    }
}
