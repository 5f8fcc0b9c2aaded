//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId,
    infrastructure::dto::websocket::ClientEvent,
    ui::{HubCommand, state::AppState},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // The transport assigns the identifier; clients never choose it
    let connection_id = ConnectionId::generate();
    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// # Arguments
///
/// * `rx` - Channel receiver for frames addressed to this connection
/// * `sender` - WebSocket sink of this connection
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (sender, mut receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel();

    if state
        .hub
        .send(HubCommand::Connected {
            connection_id,
            sender: tx,
        })
        .is_err()
    {
        tracing::error!("Hub dispatcher is gone, dropping connection '{}'", connection_id);
        return;
    }

    let hub = state.hub.clone();

    // Spawn a task to receive events from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received from '{}': {}", connection_id, text.as_str());

                    let event = match ClientEvent::decode(text.as_str()) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!("Dropping frame from '{}': {}", connection_id, e);
                            continue;
                        }
                    };

                    if hub
                        .send(HubCommand::Event {
                            connection_id,
                            event,
                        })
                        .is_err()
                    {
                        break;
                    }
                }
                Message::Close(_) => {
                    tracing::debug!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol; binary frames carry no events
                _ => {}
            }
        }
    });

    // Spawn a task to push frames from the hub to this connection
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if state
        .hub
        .send(HubCommand::Disconnected { connection_id })
        .is_err()
    {
        tracing::warn!(
            "Hub dispatcher is gone, could not report disconnect of '{}'",
            connection_id
        );
    }
    tracing::info!("Connection closed: {}", connection_id);
}
