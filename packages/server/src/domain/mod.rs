//! Domain layer: chat hub model and the ports it needs from the outside world.

pub mod entity;
pub mod error;
pub mod event;
pub mod history;
pub mod hub;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, Member};
pub use error::{MessagePushError, RepositoryError};
pub use event::{HubEvent, PresenceNotice};
pub use history::{DEFAULT_HISTORY_CAPACITY, MessageHistory};
pub use hub::Hub;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::HubRepository;
pub use value_object::{ConnectionId, DisplayName, MessageId};
