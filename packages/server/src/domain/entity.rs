//! Entities of the chat hub.

use serde::{Deserialize, Serialize};

use super::{ConnectionId, DisplayName, MessageId};

/// A chat message as stored in the history.
///
/// Immutable once created. `author` is `None` when the sender never joined,
/// `body` is `None` when the inbound payload carried no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub author: Option<DisplayName>,
    pub body: Option<String>,
    /// Server-formatted time of day
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(
        id: MessageId,
        author: Option<DisplayName>,
        body: Option<String>,
        timestamp: String,
    ) -> Self {
        Self {
            id,
            author,
            body,
            timestamp,
        }
    }
}

/// A connection that has joined.
///
/// `name` is `None` when the join carried no usable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub connection_id: ConnectionId,
    pub name: Option<DisplayName>,
}

impl Member {
    pub fn new(connection_id: ConnectionId, name: Option<DisplayName>) -> Self {
        Self {
            connection_id,
            name,
        }
    }
}
