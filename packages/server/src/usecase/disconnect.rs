//! UseCase: 切断処理
//!
//! ## 処理の流れ
//!
//! 1. 接続の送信チャンネルを登録解除する
//! 2. 参加していた場合はロースターから削除し、残りの全ての接続に
//!    `user-left` と更新後の `user-list` を送る
//!
//! 参加していなかった接続の切断では何も通知しない。

use std::sync::Arc;

use hiroba_shared::time::{Clock, format_time_of_day};

use crate::domain::{ConnectionId, HubEvent, HubRepository, Member, MessagePusher, PresenceNotice};

use super::error::DisconnectError;

/// 切断のユースケース
pub struct DisconnectUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn HubRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl DisconnectUseCase {
    /// 新しい DisconnectUseCase を作成
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

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Member))` - 参加していた接続（名前なしの参加も含む）
    /// * `Ok(None)` - 参加していなかった接続
    /// * `Err(DisconnectError)` - 状態の更新またはエンコードに失敗
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
    ) -> Result<Option<Member>, DisconnectError> {
        // 1. 送信チャンネルを登録解除
        self.message_pusher.unregister_client(&connection_id).await;

        // 2. ロースターから削除
        let Some(member) = self.repository.remove_member(&connection_id).await? else {
            tracing::info!("Connection '{}' closed without joining", connection_id);
            return Ok(None);
        };
        match &member.name {
            Some(name) => tracing::info!("'{}' left (connection '{}')", name, connection_id),
            None => tracing::info!("Nameless member left (connection '{}')", connection_id),
        }

        // 3. 残りの接続に通知
        let remaining = self.message_pusher.connected_clients().await;
        let left = HubEvent::UserLeft(PresenceNotice {
            username: member.name.clone(),
            timestamp: format_time_of_day(self.clock.now_millis()),
        });
        self.message_pusher
            .broadcast(remaining.clone(), &left)
            .await?;

        let names = self.repository.display_names().await;
        self.message_pusher
            .broadcast(remaining, &HubEvent::UserList(names))
            .await?;

        Ok(Some(member))
    }
}
