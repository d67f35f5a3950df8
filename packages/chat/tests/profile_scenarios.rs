//! End-to-end profile scenarios through `ChatService`.

mod fixtures;

use agora_chat::{
    domain::{DomainEvent, ProfileError, ValueObjectError},
    usecase::UseCaseError,
};
use fixtures::{service, user};

#[tokio::test]
async fn test_register_and_get_info() {
    // テスト項目: 登録したプロフィールの情報を取得でき、UserRegistered が届く
    // given (前提条件):
    let service = service();
    let mut events = service.subscribe();

    // when (操作):
    let (profile_id, _) = service.register(&user("alice"), "Alice").await.unwrap();

    // then (期待する結果):
    let info = service.profile_info(&profile_id).await.unwrap();
    assert_eq!(info.owner, user("alice"));
    assert_eq!(info.username.as_str(), "Alice");
    let event = events.try_recv().unwrap();
    assert!(matches!(
        event,
        DomainEvent::UserRegistered { identity, .. } if identity == user("alice")
    ));
}

#[tokio::test]
async fn test_update_username_owner_only() {
    // テスト項目: ユーザー名はオーナーだけが変更できる
    // given (前提条件):
    let service = service();
    let (profile_id, _) = service.register(&user("alice"), "Alice").await.unwrap();

    // when (操作):
    let by_other = service
        .update_username(&user("bob"), &profile_id, "Bobby")
        .await;
    let by_owner = service
        .update_username(&user("alice"), &profile_id, "Alicia")
        .await;

    // then (期待する結果):
    assert_eq!(
        by_other,
        Err(UseCaseError::Profile(ProfileError::NotAuthorized))
    );
    assert!(by_owner.is_ok());
    let info = service.profile_info(&profile_id).await.unwrap();
    assert_eq!(info.username.as_str(), "Alicia");
}

#[tokio::test]
async fn test_username_bound_applies_to_updates() {
    // テスト項目: 変更後のユーザー名にも 64 バイトの上限が適用される
    // given (前提条件):
    let service = service();
    let (profile_id, _) = service.register(&user("alice"), "Alice").await.unwrap();

    // when (操作):
    let result = service
        .update_username(&user("alice"), &profile_id, &"a".repeat(65))
        .await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(UseCaseError::InvalidValue(ValueObjectError::UsernameTooLong {
            max: 64,
            actual: 65
        }))
    );
}

#[tokio::test]
async fn test_same_identity_may_register_twice() {
    // テスト項目: 同一 ID の重複登録はこの層では拒否されない
    // given (前提条件):
    let service = service();

    // when (操作):
    let (first, _) = service.register(&user("alice"), "Alice").await.unwrap();
    let (second, _) = service.register(&user("alice"), "Alice2").await.unwrap();

    // then (期待する結果):
    assert_ne!(first, second);
}
