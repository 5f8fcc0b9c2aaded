//! Errors raised by the domain ports.

use thiserror::Error;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The hub state could not be accessed
    #[error("Hub state is unavailable: {0}")]
    Unavailable(String),
}

/// Message push errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// No channel is registered for the connection
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    /// The connection's channel is closed
    #[error("Failed to push message: {0}")]
    PushFailed(String),

    /// The event could not be encoded
    #[error("Failed to serialize event: {0}")]
    Serialization(String),
}
