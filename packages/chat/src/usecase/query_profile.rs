//! UseCase: プロフィールの参照

use std::sync::Arc;

use crate::domain::{ProfileId, ProfileInfo, ProfileRepository};

use super::error::UseCaseError;

/// プロフィール参照のユースケース
pub struct ProfileQueryUseCase {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileQueryUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// (owner, username, created_at)
    pub async fn get_info(&self, profile_id: &ProfileId) -> Result<ProfileInfo, UseCaseError> {
        let handle = self.repository.find(profile_id).await?;
        let profile = handle.lock().await;
        Ok(profile.info())
    }
}
