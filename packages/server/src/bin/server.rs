//! Hiroba chat hub.
//!
//! Serves the browser client and relays chat events between all connected
//! WebSocket clients.
//!
//! The listen port comes from `PORT`. The flags below are optional overrides.
//!
//! Run with:
//! ```not_rust
//! PORT=8080 cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 127.0.0.1 --port 3000
//! ```

use clap::Parser;

use hiroba_server::{bootstrap::build_in_memory_server, domain::DEFAULT_HISTORY_CAPACITY};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "Chat hub relaying messages, presence and typing indicators", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Number of recent messages kept in memory and sent to joining users
    #[arg(long, env = "HISTORY_CAPACITY", default_value_t = DEFAULT_HISTORY_CAPACITY)]
    history_capacity: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let server = build_in_memory_server(args.history_capacity);
    tracing::info!(
        "Hub created with a history of {} messages",
        args.history_capacity
    );

    if let Err(e) = server.run(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
