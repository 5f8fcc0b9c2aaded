//! MessagePusher trait 定義
//!
//! 接続へのイベント送信（通知）のインターフェース。
//! エンコード方式と送信経路は Infrastructure 層が決める。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, HubEvent, MessagePushError};

/// Outbound channel of one connection, carrying encoded frames.
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信チャンネルを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続の送信チャンネルを登録解除
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 登録済みの全ての接続 ID を取得（参加前の接続も含む）
    async fn connected_clients(&self) -> Vec<ConnectionId>;

    /// 特定の接続にイベントを送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &HubEvent,
    ) -> Result<(), MessagePushError>;

    /// 複数の接続にイベントを送信（一部の失敗は許容する）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &HubEvent,
    ) -> Result<(), MessagePushError>;
}
