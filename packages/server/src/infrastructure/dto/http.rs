//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Snapshot of the hub returned by the debug endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubStateDto {
    /// Joined display names in roster order, `null` for nameless members
    pub users: Vec<Option<String>>,
    /// Number of open WebSocket connections, joined or not
    pub connections: usize,
    pub history_len: usize,
    pub history_capacity: usize,
}
