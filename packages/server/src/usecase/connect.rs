//! UseCase: 接続処理
//!
//! WebSocket 接続が確立したときに、その接続の送信チャンネルを登録する。
//! 接続しただけでは参加者（ロースター）には含まれない。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

/// 接続のユースケース
pub struct ConnectUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectUseCase {
    /// 新しい ConnectUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 接続を登録する
    pub async fn execute(&self, connection_id: ConnectionId, sender: PusherChannel) {
        self.message_pusher
            .register_client(connection_id, sender)
            .await;
        tracing::info!("New connection: {}", connection_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::create_test_message_pusher;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_connect_registers_channel() {
        // テスト項目: 接続すると送信チャンネルが登録される
        // given (前提条件):
        let message_pusher = create_test_message_pusher();
        let usecase = ConnectUseCase::new(message_pusher.clone());
        let (tx, _rx) = mpsc::unbounded_channel();
        let connection_id = ConnectionId::generate();

        // when (操作):
        usecase.execute(connection_id, tx).await;

        // then (期待する結果):
        assert_eq!(
            message_pusher.connected_clients().await,
            vec![connection_id]
        );
    }
}
