//! Server execution logic.

use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use tokio::{net::TcpListener, sync::mpsc};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    ConnectUseCase, DisconnectUseCase, GetHubStateUseCase, JoinUseCase, SendMessageUseCase,
    TypingUseCase,
};

use super::{
    dispatcher::HubDispatcher,
    handler::{debug_hub_state, health_check, index, public_files, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Chat hub server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_usecase,
///     join_usecase,
///     send_message_usecase,
///     typing_usecase,
///     disconnect_usecase,
///     get_hub_state_usecase,
/// );
/// server.run("0.0.0.0", 3000).await?;
/// ```
pub struct Server {
    connect_usecase: Arc<ConnectUseCase>,
    join_usecase: Arc<JoinUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    typing_usecase: Arc<TypingUseCase>,
    disconnect_usecase: Arc<DisconnectUseCase>,
    get_hub_state_usecase: Arc<GetHubStateUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        connect_usecase: Arc<ConnectUseCase>,
        join_usecase: Arc<JoinUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        typing_usecase: Arc<TypingUseCase>,
        disconnect_usecase: Arc<DisconnectUseCase>,
        get_hub_state_usecase: Arc<GetHubStateUseCase>,
    ) -> Self {
        Self {
            connect_usecase,
            join_usecase,
            send_message_usecase,
            typing_usecase,
            disconnect_usecase,
            get_hub_state_usecase,
        }
    }

    /// Run the chat server until Ctrl+C or SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Open http://{}/ in a browser", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (hub_tx, hub_rx) = mpsc::unbounded_channel();
        let dispatcher = HubDispatcher::new(
            self.connect_usecase,
            self.join_usecase,
            self.send_message_usecase,
            self.typing_usecase,
            self.disconnect_usecase,
        );
        let dispatcher_task = tokio::spawn(dispatcher.run(hub_rx));

        let app_state = Arc::new(AppState {
            hub: hub_tx,
            get_hub_state_usecase: self.get_hub_state_usecase,
        });

        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/", get(index))
            .route("/api/health", get(health_check))
            .route("/debug/hub", get(debug_hub_state))
            .fallback(public_files)
            .with_state(app_state)
            .layer(TraceLayer::new_for_http());

        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        dispatcher_task.abort();
        result
    }
}
