//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージがログの末尾に追記され、MessageSent が発行されること
//!
//! ### なぜこのテストが必要か
//! - 送信者が送信時点でメンバーであることを保証する
//! - 1024 バイトの上限を超えたメッセージがログに入らないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：メンバーによる送信
//! - 異常系：非メンバーによる送信、長さ超過

use crate::domain::{DomainEvent, RoomId, UserId};

use super::{context::RoomCommandContext, error::UseCaseError};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    context: RoomCommandContext,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(context: RoomCommandContext) -> Self {
        Self { context }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 送信先ルーム
    /// * `caller` - 送信者
    /// * `content` - メッセージ内容（1024 バイトまで）
    ///
    /// # Returns
    ///
    /// * `Ok(DomainEvent::MessageSent)` - 送信成功
    /// * `Err(UseCaseError)` - 送信失敗
    pub async fn execute(
        &self,
        room_id: &RoomId,
        caller: UserId,
        content: String,
    ) -> Result<DomainEvent, UseCaseError> {
        self.context
            .apply(room_id, "send_message", |room, now| {
                room.send_message(caller, content, now)
            })
            .await
    }
}
