//! UseCase: 参加（join）処理
//!
//! ## 処理の流れ
//!
//! 1. 接続の表示名を記録する（検証なし、重複可、名前なしも可）
//! 2. 他の全ての接続に `user-joined` を通知する
//! 3. 参加した接続にだけメッセージ履歴を送る
//! 4. 全ての接続に更新後の `user-list` を送る

use std::sync::Arc;

use hiroba_shared::time::{Clock, format_time_of_day};

use crate::domain::{ConnectionId, DisplayName, HubEvent, HubRepository, MessagePusher, PresenceNotice};

use super::{error::JoinError, others, push_or_warn};

/// 参加のユースケース
pub struct JoinUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn HubRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl JoinUseCase {
    /// 新しい JoinUseCase を作成
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

    /// 参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Option<DisplayName>>)` - 参加後の表示名リスト（名前なしの参加者は None）
    /// * `Err(JoinError)` - 状態の更新またはエンコードに失敗
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        name: Option<DisplayName>,
    ) -> Result<Vec<Option<DisplayName>>, JoinError> {
        // 1. 表示名を記録
        let names = self
            .repository
            .record_name(connection_id, name.clone())
            .await?;
        match &name {
            Some(name) => tracing::info!("Connection '{}' joined as '{}'", connection_id, name),
            None => tracing::info!("Connection '{}' joined without a name", connection_id),
        }

        // 2. 他の接続に参加を通知
        let joined = HubEvent::UserJoined(PresenceNotice {
            username: name,
            timestamp: format_time_of_day(self.clock.now_millis()),
        });
        let targets = others(self.message_pusher.as_ref(), &connection_id).await;
        self.message_pusher.broadcast(targets, &joined).await?;

        // 3. 参加した接続に履歴を送信
        let history = HubEvent::MessageHistory(self.repository.history().await);
        push_or_warn(self.message_pusher.as_ref(), &connection_id, &history).await;

        // 4. 全ての接続に表示名リストを送信
        let everyone = self.message_pusher.connected_clients().await;
        self.message_pusher
            .broadcast(everyone, &HubEvent::UserList(names.clone()))
            .await?;

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ChatMessage, MessageId, message_pusher::MockMessagePusher},
        usecase::test_support::{
            FIXED_TIME, TestConnection, create_test_clock, create_test_message_pusher,
            create_test_repository,
        },
    };
    use mockall::Sequence;
    use serde_json::json;

    fn create_usecase(
        repository: Arc<dyn HubRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> JoinUseCase {
        JoinUseCase::new(repository, message_pusher, create_test_clock())
    }

    #[tokio::test]
    async fn test_join_notifies_others_and_sends_history_to_joiner() {
        // テスト項目: 参加者本人には履歴とリスト、他の接続には参加通知とリストが届く
        // given (前提条件):
        let repository = create_test_repository(100);
        let message_pusher = create_test_message_pusher();
        let usecase = create_usecase(repository.clone(), message_pusher.clone());
        let mut alice = TestConnection::open(message_pusher.as_ref()).await;
        let mut lurker = TestConnection::open(message_pusher.as_ref()).await;

        // when (操作):
        let names = usecase
            .execute(alice.id, Some(DisplayName::new("alice")))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(names, vec![Some(DisplayName::new("alice"))]);
        assert_eq!(
            alice.drain(),
            vec![
                json!({"event": "message-history", "data": []}),
                json!({"event": "user-list", "data": ["alice"]}),
            ]
        );
        let timestamp = format_time_of_day(FIXED_TIME);
        assert_eq!(
            lurker.drain(),
            vec![
                json!({"event": "user-joined", "data": {"username": "alice", "timestamp": timestamp}}),
                json!({"event": "user-list", "data": ["alice"]}),
            ]
        );
    }

    #[tokio::test]
    async fn test_join_delivers_existing_history_in_send_order() {
        // テスト項目: 参加時に既存の履歴が送信順に届く
        // given (前提条件):
        let repository = create_test_repository(100);
        let message_pusher = create_test_message_pusher();
        let usecase = create_usecase(repository.clone(), message_pusher.clone());
        for n in 1..=3 {
            repository
                .append_message(ChatMessage::new(
                    MessageId::from_millis(n),
                    Some(DisplayName::new("bob")),
                    Some(format!("hello {}", n)),
                    "12:00:00 PM".to_string(),
                ))
                .await
                .unwrap();
        }
        let mut alice = TestConnection::open(message_pusher.as_ref()).await;

        // when (操作):
        usecase
            .execute(alice.id, Some(DisplayName::new("alice")))
            .await
            .unwrap();

        // then (期待する結果):
        let frames = alice.drain();
        assert_eq!(frames[0]["event"], "message-history");
        let bodies: Vec<&str> = frames[0]["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["message"].as_str().unwrap())
            .collect();
        assert_eq!(bodies, vec!["hello 1", "hello 2", "hello 3"]);
    }

    #[tokio::test]
    async fn test_join_with_duplicate_and_empty_names() {
        // テスト項目: 重複した名前や空の名前でもサーバー側では拒否しない
        // given (前提条件):
        let repository = create_test_repository(100);
        let message_pusher = create_test_message_pusher();
        let usecase = create_usecase(repository.clone(), message_pusher.clone());
        let first = TestConnection::open(message_pusher.as_ref()).await;
        let second = TestConnection::open(message_pusher.as_ref()).await;
        let third = TestConnection::open(message_pusher.as_ref()).await;

        // when (操作):
        usecase
            .execute(first.id, Some(DisplayName::new("alice")))
            .await
            .unwrap();
        usecase
            .execute(second.id, Some(DisplayName::new("alice")))
            .await
            .unwrap();
        let names = usecase
            .execute(third.id, Some(DisplayName::new("")))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(
            names,
            vec![
                Some(DisplayName::new("alice")),
                Some(DisplayName::new("alice")),
                Some(DisplayName::new("")),
            ]
        );
    }

    #[tokio::test]
    async fn test_join_emits_events_in_order() {
        // テスト項目: user-joined → message-history → user-list の順に送信される
        // given (前提条件):
        let repository = create_test_repository(100);
        let joiner = ConnectionId::generate();
        let other = ConnectionId::generate();
        let mut message_pusher = MockMessagePusher::new();
        let mut seq = Sequence::new();
        message_pusher
            .expect_connected_clients()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || vec![joiner, other]);
        message_pusher
            .expect_broadcast()
            .withf(move |targets, event| {
                targets.as_slice() == [other] && matches!(event, HubEvent::UserJoined(_))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        message_pusher
            .expect_push_to()
            .withf(|_, event| matches!(event, HubEvent::MessageHistory(history) if history.is_empty()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        message_pusher
            .expect_connected_clients()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || vec![joiner, other]);
        message_pusher
            .expect_broadcast()
            .withf(|targets, event| targets.len() == 2 && matches!(event, HubEvent::UserList(_)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let usecase = create_usecase(repository, Arc::new(message_pusher));

        // when (操作):
        let result = usecase.execute(joiner, Some(DisplayName::new("alice"))).await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_join_without_name_still_gets_history_and_list() {
        // テスト項目: 名前なしの参加でも履歴とリストが届き、名前は null として通知される
        // given (前提条件):
        let repository = create_test_repository(100);
        let message_pusher = create_test_message_pusher();
        let usecase = create_usecase(repository.clone(), message_pusher.clone());
        let mut nameless = TestConnection::open(message_pusher.as_ref()).await;
        let mut lurker = TestConnection::open(message_pusher.as_ref()).await;

        // when (操作):
        let names = usecase.execute(nameless.id, None).await.unwrap();

        // then (期待する結果):
        assert_eq!(names, vec![None]);
        assert_eq!(
            nameless.drain(),
            vec![
                json!({"event": "message-history", "data": []}),
                json!({"event": "user-list", "data": [null]}),
            ]
        );
        let timestamp = format_time_of_day(FIXED_TIME);
        assert_eq!(
            lurker.drain(),
            vec![
                json!({"event": "user-joined", "data": {"username": null, "timestamp": timestamp}}),
                json!({"event": "user-list", "data": [null]}),
            ]
        );
    }
}
