//! Sequential dispatch of hub commands.
//!
//! Every WebSocket handler forwards what happens on its connection into one
//! channel. A single task drains that channel and runs the matching use case to
//! completion before taking the next command, so roster and history mutations
//! and the broadcasts derived from them happen in one global order.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, DisplayName, PusherChannel},
    infrastructure::dto::websocket::ClientEvent,
    usecase::{
        ConnectUseCase, DisconnectUseCase, JoinUseCase, SendMessageUseCase, TypingUseCase,
    },
};

/// What happened on a connection
#[derive(Debug)]
pub enum HubCommand {
    /// The connection was upgraded; frames for it go to `sender`
    Connected {
        connection_id: ConnectionId,
        sender: PusherChannel,
    },
    /// The connection sent an event
    Event {
        connection_id: ConnectionId,
        event: ClientEvent,
    },
    /// The connection is gone
    Disconnected { connection_id: ConnectionId },
}

/// Owns the use cases and applies commands one at a time
pub struct HubDispatcher {
    connect_usecase: Arc<ConnectUseCase>,
    join_usecase: Arc<JoinUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    typing_usecase: Arc<TypingUseCase>,
    disconnect_usecase: Arc<DisconnectUseCase>,
}

impl HubDispatcher {
    pub fn new(
        connect_usecase: Arc<ConnectUseCase>,
        join_usecase: Arc<JoinUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        typing_usecase: Arc<TypingUseCase>,
        disconnect_usecase: Arc<DisconnectUseCase>,
    ) -> Self {
        Self {
            connect_usecase,
            join_usecase,
            send_message_usecase,
            typing_usecase,
            disconnect_usecase,
        }
    }

    /// Run until every sender of `commands` has been dropped
    pub async fn run(self, mut commands: mpsc::UnboundedReceiver<HubCommand>) {
        while let Some(command) = commands.recv().await {
            self.dispatch(command).await;
        }
        tracing::debug!("Hub dispatcher stopped");
    }

    pub async fn dispatch(&self, command: HubCommand) {
        match command {
            HubCommand::Connected {
                connection_id,
                sender,
            } => {
                self.connect_usecase.execute(connection_id, sender).await;
            }
            HubCommand::Event {
                connection_id,
                event,
            } => self.handle_event(connection_id, event).await,
            HubCommand::Disconnected { connection_id } => {
                if let Err(e) = self.disconnect_usecase.execute(connection_id).await {
                    tracing::warn!("Failed to disconnect '{}': {}", connection_id, e);
                }
            }
        }
    }

    async fn handle_event(&self, connection_id: ConnectionId, event: ClientEvent) {
        let event_name = event.name();
        let result = match event {
            ClientEvent::UserJoined(name) => self
                .join_usecase
                .execute(connection_id, name.map(DisplayName::from))
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
            ClientEvent::SendMessage(payload) => self
                .send_message_usecase
                .execute(connection_id, payload.message)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
            ClientEvent::Typing => self
                .typing_usecase
                .start(connection_id)
                .await
                .map_err(|e| e.to_string()),
            ClientEvent::StopTyping => self
                .typing_usecase
                .stop(connection_id)
                .await
                .map_err(|e| e.to_string()),
        };

        if let Err(e) = result {
            tracing::warn!(
                "Failed to handle '{}' from '{}': {}",
                event_name,
                connection_id,
                e
            );
        }
    }
}
