//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理
//! - `HubEvent` をワイヤ形式（JSON エンベロープ）にエンコードして送信
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, HubEvent, MessagePushError, MessagePusher, PusherChannel},
    infrastructure::dto::conversion::encode_event,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.push_to(&connection_id, &HubEvent::UserList(names)).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの送信チャンネル
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

fn encode(event: &HubEvent) -> Result<String, MessagePushError> {
    encode_event(event).map_err(|e| MessagePushError::Serialization(e.to_string()))
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection_id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
    }

    async fn connected_clients(&self) -> Vec<ConnectionId> {
        let clients = self.clients.lock().await;
        clients.keys().copied().collect()
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &HubEvent,
    ) -> Result<(), MessagePushError> {
        let frame = encode(event)?;
        let clients = self.clients.lock().await;

        if let Some(sender) = clients.get(connection_id) {
            sender
                .send(frame)
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed '{}' to connection '{}'", event.name(), connection_id);
            Ok(())
        } else {
            Err(MessagePushError::ClientNotFound(connection_id.to_string()))
        }
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &HubEvent,
    ) -> Result<(), MessagePushError> {
        let frame = encode(event)?;
        let clients = self.clients.lock().await;

        for target in targets {
            if let Some(sender) = clients.get(&target) {
                // ブロードキャストでは一部の送信失敗を許容
                if let Err(e) = sender.send(frame.clone()) {
                    tracing::warn!("Failed to push '{}' to '{}': {}", event.name(), target, e);
                } else {
                    tracing::debug!("Broadcasted '{}' to connection '{}'", event.name(), target);
                }
            } else {
                tracing::warn!(
                    "Connection '{}' not found during broadcast, skipping",
                    target
                );
            }
        }

        Ok(())
    }
}
