//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{MessagePushError, RepositoryError};

/// join 処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Push(#[from] MessagePushError),
}

/// メッセージ送信処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Push(#[from] MessagePushError),
}

/// タイピング通知のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypingError {
    #[error(transparent)]
    Push(#[from] MessagePushError),
}

/// 切断処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisconnectError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Push(#[from] MessagePushError),
}

/// Hub 状態取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetHubStateError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
