//! UseCase: タイピング通知
//!
//! 送信者の表示名を他の全ての接続に中継するだけで、サーバー側では
//! タイピング状態を保持しない（デバウンスはクライアント側の責務）。

use std::sync::Arc;

use crate::domain::{ConnectionId, HubEvent, HubRepository, MessagePusher};

use super::{error::TypingError, others};

/// タイピング通知のユースケース
pub struct TypingUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn HubRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl TypingUseCase {
    /// 新しい TypingUseCase を作成
    pub fn new(
        repository: Arc<dyn HubRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 入力開始を他の接続に通知
    pub async fn start(&self, from: ConnectionId) -> Result<(), TypingError> {
        let name = self.repository.name_of(&from).await;
        self.relay(from, HubEvent::UserTyping(name)).await
    }

    /// 入力終了を他の接続に通知
    pub async fn stop(&self, from: ConnectionId) -> Result<(), TypingError> {
        let name = self.repository.name_of(&from).await;
        self.relay(from, HubEvent::UserStopTyping(name)).await
    }

    async fn relay(&self, from: ConnectionId, event: HubEvent) -> Result<(), TypingError> {
        let targets = others(self.message_pusher.as_ref(), &from).await;
        self.message_pusher.broadcast(targets, &event).await?;
        Ok(())
    }
}
