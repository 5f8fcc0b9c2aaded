//! Terminal client for the Hiroba chat hub.
//!
//! Joins the hub over WebSocket, renders incoming events in the terminal and
//! optionally appends them to an HTML transcript.

pub mod error;
pub mod formatter;
pub mod markup;
pub mod runner;
pub mod session;
pub mod transcript;
pub mod typing;
pub mod ui;
pub mod view;

pub use error::ClientError;
pub use runner::{ClientConfig, run_client};
