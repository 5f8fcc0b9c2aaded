//! Outbound events produced by the hub.

use super::{ChatMessage, DisplayName};

/// Join/leave notification payload.
///
/// `username` is `None` for a member that joined without a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceNotice {
    pub username: Option<DisplayName>,
    /// Server-formatted time of day
    pub timestamp: String,
}

/// Events the hub sends to connections.
///
/// The transport decides how each event is encoded on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubEvent {
    UserJoined(PresenceNotice),
    UserLeft(PresenceNotice),
    MessageHistory(Vec<ChatMessage>),
    NewMessage(ChatMessage),
    UserTyping(Option<DisplayName>),
    UserStopTyping(Option<DisplayName>),
    UserList(Vec<Option<DisplayName>>),
}

impl HubEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            HubEvent::UserJoined(_) => "user-joined",
            HubEvent::UserLeft(_) => "user-left",
            HubEvent::MessageHistory(_) => "message-history",
            HubEvent::NewMessage(_) => "new-message",
            HubEvent::UserTyping(_) => "user-typing",
            HubEvent::UserStopTyping(_) => "user-stop-typing",
            HubEvent::UserList(_) => "user-list",
        }
    }
}
