//! UseCase: ルームの保管者移転
//!
//! 保管者（custodian）だけを付け替えます。論理的なオーナーと権限は変わらず、
//! イベントも発行されません。

use std::sync::Arc;

use crate::domain::{RoomId, RoomRepository, UserId};

use super::error::UseCaseError;

/// ルーム移転のユースケース
pub struct TransferRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl TransferRoomUseCase {
    /// 新しい TransferRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 保管者の移転を実行（無条件）
    pub async fn execute(&self, room_id: &RoomId, new_custodian: UserId) -> Result<(), UseCaseError> {
        let handle = self.repository.find(room_id).await?;
        let mut room = handle.lock().await;
        tracing::info!(
            %room_id,
            from = %room.custodian(),
            to = %new_custodian,
            "Room custody transferred"
        );
        room.transfer(new_custodian);
        Ok(())
    }
}
