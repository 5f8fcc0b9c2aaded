//! UseCase: メッセージ送信処理
//!
//! 送信者の表示名でメッセージを作成し、履歴に追加してから
//! 送信者を含む全ての接続にブロードキャストする。
//!
//! 未参加の接続からの送信も拒否しない（作者なしのメッセージになる）。

use std::sync::Arc;

use hiroba_shared::time::{Clock, format_time_of_day};

use crate::domain::{
    ChatMessage, ConnectionId, HubEvent, HubRepository, MessageId, MessagePusher,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn HubRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        repository: Arc<dyn HubRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信元の接続 ID
    /// * `body` - メッセージ本文（ペイロードに無ければ None）
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - 履歴に追加されたメッセージ
    /// * `Err(SendMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        from: ConnectionId,
        body: Option<String>,
    ) -> Result<ChatMessage, SendMessageError> {
        let author = self.repository.name_of(&from).await;
        if author.is_none() {
            tracing::debug!("Connection '{}' sent a message before joining", from);
        }

        let now = self.clock.now_millis();
        let message = ChatMessage::new(
            MessageId::from_millis(now),
            author,
            body,
            format_time_of_day(now),
        );

        // 1. 履歴に追加（容量超過分は古い順に削除）
        self.repository.append_message(message.clone()).await?;

        // 2. 送信者を含む全ての接続にブロードキャスト
        let everyone = self.message_pusher.connected_clients().await;
        self.message_pusher
            .broadcast(everyone, &HubEvent::NewMessage(message.clone()))
            .await?;

        Ok(message)
    }
}
