//! InMemory Hub Repository 実装
//!
//! ドメイン層が定義する HubRepository trait の具体的な実装。
//! Hub ドメインモデルをそのままインメモリストアとして保持します。
//! プロセス終了時に全ての状態は失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, ConnectionId, DisplayName, Hub, HubRepository, Member, RepositoryError,
};

/// インメモリ Hub Repository 実装
pub struct InMemoryHubRepository {
    /// Hub ドメインモデル
    hub: Arc<Mutex<Hub>>,
}

impl InMemoryHubRepository {
    /// 新しい InMemoryHubRepository を作成
    pub fn new(hub: Arc<Mutex<Hub>>) -> Self {
        Self { hub }
    }
}

#[async_trait]
impl HubRepository for InMemoryHubRepository {
    async fn get_hub(&self) -> Result<Hub, RepositoryError> {
        let hub = self.hub.lock().await;
        Ok(hub.clone())
    }

    async fn record_name(
        &self,
        connection_id: ConnectionId,
        name: Option<DisplayName>,
    ) -> Result<Vec<Option<DisplayName>>, RepositoryError> {
        let mut hub = self.hub.lock().await;
        hub.record_name(connection_id, name);
        Ok(hub.display_names())
    }

    async fn name_of(&self, connection_id: &ConnectionId) -> Option<DisplayName> {
        let hub = self.hub.lock().await;
        hub.name_of(connection_id).cloned()
    }

    async fn remove_member(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<Member>, RepositoryError> {
        let mut hub = self.hub.lock().await;
        Ok(hub.remove_member(connection_id))
    }

    async fn display_names(&self) -> Vec<Option<DisplayName>> {
        let hub = self.hub.lock().await;
        hub.display_names()
    }

    async fn append_message(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut hub = self.hub.lock().await;
        let evicted = hub.append_message(message);
        if evicted > 0 {
            tracing::debug!("Evicted {} message(s) from history", evicted);
        }
        Ok(())
    }

    async fn history(&self) -> Vec<ChatMessage> {
        let hub = self.hub.lock().await;
        hub.history().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageId;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryHubRepository の基本操作（名前の記録・削除、履歴の追加）
    //
    // 【なぜこのテストが必要か】
    // - UseCase 層はこの Repository の返す表示名リストをそのままブロードキャストする
    // - 履歴の容量制限が Repository 経由でも守られることを保証する
    // ========================================

    fn create_test_repository(history_capacity: usize) -> InMemoryHubRepository {
        InMemoryHubRepository::new(Arc::new(Mutex::new(Hub::new(history_capacity))))
    }

    fn message(n: i64) -> ChatMessage {
        ChatMessage::new(
            MessageId::from_millis(n),
            None,
            Some(n.to_string()),
            "12:00:00 PM".to_string(),
        )
    }

    #[tokio::test]
    async fn test_record_name_returns_updated_names() {
        // テスト項目: 名前を記録すると更新後の表示名リストが返される
        // given (前提条件):
        let repo = create_test_repository(100);
        let alice = ConnectionId::generate();
        let bob = ConnectionId::generate();

        // when (操作):
        repo.record_name(alice, Some(DisplayName::new("alice")))
            .await
            .unwrap();
        let names = repo
            .record_name(bob, Some(DisplayName::new("bob")))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(
            names,
            vec![Some(DisplayName::new("alice")), Some(DisplayName::new("bob"))]
        );
        assert_eq!(repo.name_of(&bob).await, Some(DisplayName::new("bob")));
    }

    #[tokio::test]
    async fn test_remove_member() {
        // テスト項目: 参加者を削除すると表示名リストから消える
        // given (前提条件):
        let repo = create_test_repository(100);
        let alice = ConnectionId::generate();
        repo.record_name(alice, Some(DisplayName::new("alice")))
            .await
            .unwrap();

        // when (操作):
        let removed = repo.remove_member(&alice).await.unwrap();
        let removed_again = repo.remove_member(&alice).await.unwrap();

        // then (期待する結果):
        assert_eq!(removed.and_then(|m| m.name), Some(DisplayName::new("alice")));
        assert_eq!(removed_again, None);
        assert!(repo.display_names().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_message_respects_capacity() {
        // テスト項目: 履歴は容量を超えると古いものから削除される
        // given (前提条件):
        let repo = create_test_repository(2);

        // when (操作):
        for n in 1..=3 {
            repo.append_message(message(n)).await.unwrap();
        }

        // then (期待する結果):
        let history = repo.history().await;
        assert_eq!(history, vec![message(2), message(3)]);
        let hub = repo.get_hub().await.unwrap();
        assert_eq!(hub.history().capacity(), 2);
    }
}
