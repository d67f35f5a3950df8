//! UseCase: ユーザー名の変更（オーナーのみ）

use std::sync::Arc;

use crate::domain::{Clock, ProfileId, ProfileRepository, UserId, Username};

use super::error::UseCaseError;

/// ユーザー名変更のユースケース
pub struct UpdateUsernameUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateUsernameUseCase {
    /// 新しい UpdateUsernameUseCase を作成
    pub fn new(repository: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// ユーザー名の変更を実行
    pub async fn execute(
        &self,
        profile_id: &ProfileId,
        caller: &UserId,
        new_username: Username,
    ) -> Result<(), UseCaseError> {
        let handle = self.repository.find(profile_id).await?;
        let mut profile = handle.lock().await;
        profile
            .update_username(caller, new_username, self.clock.now())
            .inspect_err(|e| {
                tracing::warn!(%profile_id, %caller, error = %e, "Username update rejected");
            })?;
        tracing::info!(%profile_id, "Username updated");
        Ok(())
    }
}
