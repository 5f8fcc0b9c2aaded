//! UI layer: HTTP/WebSocket entry points of the chat hub.

mod assets;
mod dispatcher;
mod handler;
mod server;
mod signal;
pub mod state;

pub use dispatcher::{HubCommand, HubDispatcher};
pub use server::Server;
pub use signal::shutdown_signal;
