//! WebSocket event DTOs.
//!
//! Every frame is a JSON envelope `{"event": <name>, "data": <payload>}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A chat message on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: String,
}

/// Payload of `user-joined` and `user-left` notifications.
/// `username` is `null` for a member that joined without a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceDto {
    #[serde(default)]
    pub username: Option<String>,
    pub timestamp: String,
}

/// Payload of `send-message`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Events sent by clients to the hub.
///
/// Inbound frames go through [`ClientEvent::decode`]; the derived
/// serialization is the encoding clients use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    UserJoined(Option<String>),
    SendMessage(SendMessagePayload),
    Typing,
    StopTyping,
}

/// Events sent by the hub to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    UserJoined(PresenceDto),
    UserLeft(PresenceDto),
    MessageHistory(Vec<MessageDto>),
    NewMessage(MessageDto),
    UserTyping(Option<String>),
    UserStopTyping(Option<String>),
    UserList(Vec<Option<String>>),
}

/// Errors decoding an inbound frame
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Frame is not an event envelope: {0}")]
    InvalidEnvelope(#[from] serde_json::Error),

    #[error("Unknown event '{0}'")]
    UnknownEvent(String),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Value,
}

impl ClientEvent {
    /// Decode an inbound text frame.
    ///
    /// Payload problems never reject a known event: a `user-joined` without
    /// a string joins with no name, and a `send-message` without a string
    /// `message` leaves the body absent.
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        let envelope: Envelope = serde_json::from_str(text)?;
        match envelope.event.as_str() {
            "user-joined" => Ok(ClientEvent::UserJoined(
                envelope.data.as_str().map(str::to_string),
            )),
            "send-message" => {
                let message = envelope
                    .data
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Ok(ClientEvent::SendMessage(SendMessagePayload { message }))
            }
            "typing" => Ok(ClientEvent::Typing),
            "stop-typing" => Ok(ClientEvent::StopTyping),
            _ => Err(DecodeError::UnknownEvent(envelope.event)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::UserJoined(_) => "user-joined",
            ClientEvent::SendMessage(_) => "send-message",
            ClientEvent::Typing => "typing",
            ClientEvent::StopTyping => "stop-typing",
        }
    }
}
