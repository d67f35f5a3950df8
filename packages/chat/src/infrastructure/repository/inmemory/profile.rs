//! InMemory Profile Repository 実装

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::{ProfileId, ProfileRepository, RepositoryError, SharedProfile, UserProfile};

/// インメモリ Profile Repository 実装
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<ProfileId, SharedProfile>>,
}

impl InMemoryProfileRepository {
    /// 新しい InMemoryProfileRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn insert(&self, profile: UserProfile) -> Result<SharedProfile, RepositoryError> {
        let mut profiles = self.profiles.write().await;
        let profile_id = profile.id().clone();
        if profiles.contains_key(&profile_id) {
            return Err(RepositoryError::DuplicateProfile(profile_id));
        }
        let shared = Arc::new(Mutex::new(profile));
        profiles.insert(profile_id, shared.clone());
        Ok(shared)
    }

    async fn find(&self, profile_id: &ProfileId) -> Result<SharedProfile, RepositoryError> {
        let profiles = self.profiles.read().await;
        profiles
            .get(profile_id)
            .cloned()
            .ok_or_else(|| RepositoryError::ProfileNotFound(profile_id.clone()))
    }

    async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProfileIdFactory, Timestamp, UserId, Username};

    fn create_profile() -> UserProfile {
        let (profile, _) = UserProfile::register(
            ProfileIdFactory::generate().unwrap(),
            UserId::new("alice".to_string()).unwrap(),
            Username::new("Alice".to_string()).unwrap(),
            Timestamp::new(1000),
        );
        profile
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        // テスト項目: 挿入したプロフィールを ID で取得できる
        // given (前提条件):
        let repo = InMemoryProfileRepository::new();
        let profile = create_profile();
        let profile_id = profile.id().clone();

        // when (操作):
        repo.insert(profile).await.unwrap();
        let found = repo.find(&profile_id).await.unwrap();

        // then (期待する結果):
        assert_eq!(found.lock().await.username().as_str(), "Alice");
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_fails() {
        // テスト項目: 同じ ID のプロフィールを二重に挿入するとエラーになる
        // given (前提条件):
        let repo = InMemoryProfileRepository::new();
        let profile = create_profile();
        let profile_id = profile.id().clone();
        repo.insert(profile.clone()).await.unwrap();

        // when (操作):
        let result = repo.insert(profile).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::DuplicateProfile(profile_id)
        );
    }

    #[tokio::test]
    async fn test_find_nonexistent_profile() {
        // テスト項目: 存在しないプロフィールの検索は ProfileNotFound
        // given (前提条件):
        let repo = InMemoryProfileRepository::new();
        let profile_id = ProfileIdFactory::generate().unwrap();

        // when (操作):
        let result = repo.find(&profile_id).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::ProfileNotFound(profile_id)
        );
    }
}
