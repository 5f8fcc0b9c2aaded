//! Terminal chat client for the Hiroba chat hub.
//!
//! Joins the hub under a display name, prints incoming messages, presence
//! notices and typing indicators, and sends each entered line as a message.
//! The session ends when the server closes the connection or on Ctrl+C / Ctrl+D.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --name alice
//! cargo run --bin hiroba-client -- -n bob --transcript bob.html
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use hiroba_client::{ClientConfig, run_client};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-client")]
#[command(about = "Terminal client for the Hiroba chat hub", long_about = None)]
struct Args {
    /// Display name (prompted for when omitted)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3000/ws")]
    url: String,

    /// Quiet interval in milliseconds before stop-typing is sent
    #[arg(long, default_value_t = 1000)]
    typing_timeout_ms: u64,

    /// Append an HTML transcript of the session to this file
    #[arg(short = 't', long)]
    transcript: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let config = ClientConfig {
        url: args.url,
        name: args.name,
        typing_timeout: Duration::from_millis(args.typing_timeout_ms),
        transcript: args.transcript,
    };

    if let Err(e) = run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
