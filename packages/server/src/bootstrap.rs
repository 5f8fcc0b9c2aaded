//! Dependency wiring for the in-memory hub.

use std::{collections::HashMap, sync::Arc};

use hiroba_shared::time::{Clock, SystemClock};
use tokio::sync::Mutex;

use crate::{
    domain::Hub,
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryHubRepository},
    ui::Server,
    usecase::{
        ConnectUseCase, DisconnectUseCase, GetHubStateUseCase, JoinUseCase, SendMessageUseCase,
        TypingUseCase,
    },
};

/// Build a server whose state lives in memory, keeping at most
/// `history_capacity` messages.
pub fn build_in_memory_server(history_capacity: usize) -> Server {
    build_in_memory_server_with_clock(history_capacity, Arc::new(SystemClock))
}

/// Same as [`build_in_memory_server`] with an explicit clock.
pub fn build_in_memory_server_with_clock(history_capacity: usize, clock: Arc<dyn Clock>) -> Server {
    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create Repository (in-memory hub)
    let hub = Arc::new(Mutex::new(Hub::new(history_capacity)));
    let repository = Arc::new(InMemoryHubRepository::new(hub));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 3. Create UseCases
    let connect_usecase = Arc::new(ConnectUseCase::new(message_pusher.clone()));
    let join_usecase = Arc::new(JoinUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let typing_usecase = Arc::new(TypingUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let disconnect_usecase = Arc::new(DisconnectUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        clock,
    ));
    let get_hub_state_usecase = Arc::new(GetHubStateUseCase::new(repository, message_pusher));

    // 4. Create the server
    Server::new(
        connect_usecase,
        join_usecase,
        send_message_usecase,
        typing_usecase,
        disconnect_usecase,
        get_hub_state_usecase,
    )
}
