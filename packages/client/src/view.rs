//! Client-side view model.
//!
//! `ChatView` turns hub events into renderer-agnostic view nodes. It keeps a
//! single piece of state: the display name this client joined with.

use hiroba_server::infrastructure::dto::websocket::{MessageDto, ServerEvent};

use crate::error::ClientError;

/// Shown wherever a name is absent on the wire
pub const ANONYMOUS: &str = "anonymous";

/// Who wrote a chat entry, relative to this client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorship {
    Own,
    Other,
}

/// A chat entry ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub authorship: Authorship,
    pub username: String,
    pub body: String,
    pub timestamp: String,
}

/// One line of the online list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub initial: String,
    pub name: String,
}

/// Renderer-agnostic output of [`ChatView::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Chat(ChatEntry),
    System(String),
    Roster(Vec<RosterEntry>),
    TypingStarted(String),
    TypingCleared,
}

#[derive(Debug, Clone, Default)]
pub struct ChatView {
    current_user: Option<String>,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the name this client joined with
    pub fn set_current_user(&mut self, name: impl Into<String>) {
        self.current_user = Some(name.into());
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    fn is_self(&self, name: Option<&str>) -> bool {
        matches!((name, self.current_user()), (Some(a), Some(b)) if a == b)
    }

    /// Map a hub event to the nodes it adds to the view
    pub fn apply(&self, event: &ServerEvent) -> Vec<ViewNode> {
        match event {
            ServerEvent::MessageHistory(messages) => messages
                .iter()
                .map(|message| ViewNode::Chat(self.chat_entry(message)))
                .collect(),
            ServerEvent::NewMessage(message) => vec![ViewNode::Chat(self.chat_entry(message))],
            ServerEvent::UserJoined(notice) => vec![ViewNode::System(format!(
                "{} joined the chat",
                display_name(notice.username.as_deref())
            ))],
            ServerEvent::UserLeft(notice) => vec![ViewNode::System(format!(
                "{} left the chat",
                display_name(notice.username.as_deref())
            ))],
            ServerEvent::UserList(names) => vec![ViewNode::Roster(
                names
                    .iter()
                    .map(|name| {
                        let name = display_name(name.as_deref());
                        RosterEntry {
                            initial: avatar_initial(name),
                            name: name.to_string(),
                        }
                    })
                    .collect(),
            )],
            ServerEvent::UserTyping(name) => {
                if self.is_self(name.as_deref()) {
                    Vec::new()
                } else {
                    vec![ViewNode::TypingStarted(display_name(name.as_deref()).to_string())]
                }
            }
            ServerEvent::UserStopTyping(name) => {
                if self.is_self(name.as_deref()) {
                    Vec::new()
                } else {
                    vec![ViewNode::TypingCleared]
                }
            }
        }
    }

    fn chat_entry(&self, message: &MessageDto) -> ChatEntry {
        let authorship = if self.is_self(message.username.as_deref()) {
            Authorship::Own
        } else {
            Authorship::Other
        };
        ChatEntry {
            authorship,
            username: display_name(message.username.as_deref()).to_string(),
            body: message.message.clone().unwrap_or_default(),
            timestamp: message.timestamp.clone(),
        }
    }
}

/// Name to show for a possibly absent wire name
pub fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or(ANONYMOUS)
}

/// Upper-cased first character of a name, empty for an empty name
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Trim a user-entered display name, rejecting names that end up empty
pub fn validate_name(input: &str) -> Result<String, ClientError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ClientError::EmptyName);
    }
    Ok(name.to_string())
}

/// Neutralize the five HTML metacharacters.
///
/// `&` is replaced first so entities produced by later replacements stay intact.
pub fn escape_html(unsafe_text: &str) -> String {
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
