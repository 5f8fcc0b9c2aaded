//! Server state shared by the handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::usecase::GetHubStateUseCase;

use super::dispatcher::HubCommand;

/// Shared application state
pub struct AppState {
    /// Inbound command queue of the hub dispatcher
    pub hub: mpsc::UnboundedSender<HubCommand>,
    /// GetHubStateUseCase（Hub 状態取得のユースケース）
    pub get_hub_state_usecase: Arc<GetHubStateUseCase>,
}
