//! UseCase 層
//!
//! クライアントから届くイベントごとに 1 つのユースケースを持つ。
//! 各ユースケースは Repository と MessagePusher の trait にのみ依存する。

mod connect;
mod disconnect;
mod error;
mod get_hub_state;
mod join;
mod send_message;
mod typing;

#[cfg(test)]
pub(crate) mod test_support;

pub use connect::ConnectUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::{DisconnectError, GetHubStateError, JoinError, SendMessageError, TypingError};
pub use get_hub_state::{GetHubStateUseCase, HubState};
pub use join::JoinUseCase;
pub use send_message::SendMessageUseCase;
pub use typing::TypingUseCase;

use crate::domain::{ConnectionId, HubEvent, MessagePusher};

/// 送信者以外の全ての接続 ID を取得（参加前の接続も含む）
async fn others(message_pusher: &dyn MessagePusher, exclude: &ConnectionId) -> Vec<ConnectionId> {
    message_pusher
        .connected_clients()
        .await
        .into_iter()
        .filter(|id| id != exclude)
        .collect()
}

/// 特定の接続への送信。失敗しても処理は続行する（fire-and-forget）
async fn push_or_warn(
    message_pusher: &dyn MessagePusher,
    connection_id: &ConnectionId,
    event: &HubEvent,
) {
    if let Err(e) = message_pusher.push_to(connection_id, event).await {
        tracing::warn!(
            "Failed to push '{}' to connection '{}': {}",
            event.name(),
            connection_id,
            e
        );
    }
}
