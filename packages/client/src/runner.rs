//! Client execution logic.

use std::{path::PathBuf, time::Duration};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    error::ClientError,
    session::run_client_session,
    transcript::Transcript,
    typing::DEFAULT_TYPING_TIMEOUT,
    view::validate_name,
};

/// Settings for one client run
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: String,
    /// Prompted for interactively when absent
    pub name: Option<String>,
    pub typing_timeout: Duration,
    pub transcript: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:3000/ws".to_string(),
            name: None,
            typing_timeout: DEFAULT_TYPING_TIMEOUT,
            transcript: None,
        }
    }
}

/// Run the WebSocket client until the server or the user ends the session.
///
/// There is no reconnection; a lost connection ends the run with an error.
pub async fn run_client(config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let name = match config.name.as_deref() {
        Some(name) => validate_name(name)?,
        None => prompt_name().await?,
    };

    let transcript = match &config.transcript {
        Some(path) => Some(Transcript::open(path).await?),
        None => None,
    };

    tracing::info!("Connecting to {} as '{}'", config.url, name);

    run_client_session(&config.url, &name, config.typing_timeout, transcript).await?;

    tracing::info!("Client session ended normally");
    Ok(())
}

/// Ask for a display name until a non-blank one is entered
async fn prompt_name() -> Result<String, ClientError> {
    tokio::task::spawn_blocking(|| {
        let mut rl = DefaultEditor::new().map_err(|e| ClientError::InputError(e.to_string()))?;
        loop {
            match rl.readline("Display name: ") {
                Ok(line) => match validate_name(&line) {
                    Ok(name) => return Ok(name),
                    Err(e) => println!("{}", e),
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    return Err(ClientError::InputError("no display name entered".to_string()));
                }
                Err(e) => return Err(ClientError::InputError(e.to_string())),
            }
        }
    })
    .await
    .map_err(|e| ClientError::InputError(e.to_string()))?
}
