//! UseCase: ユーザー登録
//!
//! 同一 ID による重複登録のチェックは行いません（外部の一意性管理に委ねる）。

use std::sync::Arc;

use crate::domain::{
    Clock, DomainEvent, EventPublisher, ProfileId, ProfileIdFactory, ProfileRepository,
    UserId, UserProfile, Username,
};

use super::error::UseCaseError;

/// ユーザー登録のユースケース
pub struct RegisterUserUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
    publisher: Arc<dyn EventPublisher>,
}

impl RegisterUserUseCase {
    /// 新しい RegisterUserUseCase を作成
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        clock: Arc<dyn Clock>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            clock,
            publisher,
        }
    }

    /// 登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok((ProfileId, DomainEvent::UserRegistered))` - 登録成功
    pub async fn execute(
        &self,
        caller: UserId,
        username: Username,
    ) -> Result<(ProfileId, DomainEvent), UseCaseError> {
        let profile_id = ProfileIdFactory::generate()?;
        let (profile, event) =
            UserProfile::register(profile_id.clone(), caller, username, self.clock.now());

        let handle = self.repository.insert(profile).await?;
        let _profile = handle.lock().await;
        tracing::info!(%profile_id, event = event.kind(), "User registered");
        self.publisher.publish(event.clone());

        Ok((profile_id, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Timestamp,
        infrastructure::InMemoryProfileRepository,
        usecase::test_support::{expect_one_event, fixed_clock, user},
    };

    #[tokio::test]
    async fn test_register_success() {
        // テスト項目: プロフィールが登録され、UserRegistered が発行される
        // given (前提条件):
        let repository = Arc::new(InMemoryProfileRepository::new());
        let publisher = expect_one_event(|e| matches!(e, DomainEvent::UserRegistered { .. }));
        let usecase = RegisterUserUseCase::new(repository.clone(), fixed_clock(1000), publisher);

        // when (操作):
        let username = Username::new("Alice".to_string()).unwrap();
        let (profile_id, event) = usecase
            .execute(user("alice"), username.clone())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            DomainEvent::UserRegistered {
                identity: user("alice"),
                username,
                timestamp: Timestamp::new(1000),
            }
        );
        let handle = repository.find(&profile_id).await.unwrap();
        assert_eq!(handle.lock().await.owner(), &user("alice"));
    }
}
