//! UseCase: Hub 状態取得（デバッグ用）

use std::sync::Arc;

use crate::domain::{Hub, HubRepository, MessagePusher};

use super::error::GetHubStateError;

/// Hub の状態と接続数
#[derive(Debug, Clone)]
pub struct HubState {
    pub hub: Hub,
    /// 参加前の接続も含む接続数
    pub connections: usize,
}

/// Hub 状態取得のユースケース
pub struct GetHubStateUseCase {
    repository: Arc<dyn HubRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl GetHubStateUseCase {
    pub fn new(
        repository: Arc<dyn HubRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn execute(&self) -> Result<HubState, GetHubStateError> {
        let hub = self.repository.get_hub().await?;
        let connections = self.message_pusher.connected_clients().await.len();
        Ok(HubState { hub, connections })
    }
}
