//! Error types for the terminal client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Display name is empty after trimming
    #[error("Display name must not be empty")]
    EmptyName,

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Terminal input could not be read
    #[error("Input error: {0}")]
    InputError(String),

    /// Outbound event could not be encoded
    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    /// Transcript file could not be written
    #[error("Transcript error: {0}")]
    Transcript(#[from] std::io::Error),
}

impl From<tokio_tungstenite::tungstenite::Error> for ClientError {
    fn from(error: tokio_tungstenite::tungstenite::Error) -> Self {
        ClientError::ConnectionError(error.to_string())
    }
}
