//! Infrastructure layer: storage, transport and wire format implementations.

pub mod dto;
pub mod message_pusher;
pub mod repository;
