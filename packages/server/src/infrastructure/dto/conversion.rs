//! Conversion logic between DTOs and domain models.

use crate::domain::{ChatMessage, DisplayName, HubEvent, PresenceNotice};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// Domain Model → DTO
// ========================================

impl From<ChatMessage> for dto::MessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            id: model.id.value(),
            username: model.author.map(DisplayName::into_string),
            message: model.body,
            timestamp: model.timestamp,
        }
    }
}

impl From<PresenceNotice> for dto::PresenceDto {
    fn from(model: PresenceNotice) -> Self {
        Self {
            username: model.username.map(DisplayName::into_string),
            timestamp: model.timestamp,
        }
    }
}

impl From<HubEvent> for dto::ServerEvent {
    fn from(event: HubEvent) -> Self {
        match event {
            HubEvent::UserJoined(notice) => dto::ServerEvent::UserJoined(notice.into()),
            HubEvent::UserLeft(notice) => dto::ServerEvent::UserLeft(notice.into()),
            HubEvent::MessageHistory(messages) => {
                dto::ServerEvent::MessageHistory(messages.into_iter().map(Into::into).collect())
            }
            HubEvent::NewMessage(message) => dto::ServerEvent::NewMessage(message.into()),
            HubEvent::UserTyping(name) => {
                dto::ServerEvent::UserTyping(name.map(DisplayName::into_string))
            }
            HubEvent::UserStopTyping(name) => {
                dto::ServerEvent::UserStopTyping(name.map(DisplayName::into_string))
            }
            HubEvent::UserList(names) => dto::ServerEvent::UserList(
                names
                    .into_iter()
                    .map(|name| name.map(DisplayName::into_string))
                    .collect(),
            ),
        }
    }
}

/// Encode a hub event as a wire frame.
pub fn encode_event(event: &HubEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&dto::ServerEvent::from(event.clone()))
}
