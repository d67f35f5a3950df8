//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{ProfileError, RepositoryError, RoomError, ValueObjectError};

/// UseCase 実行時のエラー
///
/// ドメイン層・Repository のエラーをそのまま包みます。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    /// ルームの状態遷移が拒否された
    #[error(transparent)]
    Room(#[from] RoomError),

    /// プロフィールの変更が拒否された
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// 対象が見つからない、または重複している
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// 入力値が Value Object の制約を満たさない
    #[error(transparent)]
    InvalidValue(#[from] ValueObjectError),
}
