//! Chat hub for the Hiroba browser chat demo.
//!
//! Relays join/leave notifications, chat messages and typing indicators
//! between WebSocket connections and keeps a bounded in-memory history.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod bootstrap;
