//! Hub aggregate: who has joined, and what has been said.

use serde::{Deserialize, Serialize};

use super::{ChatMessage, ConnectionId, DisplayName, Member, MessageHistory};

/// In-memory state of the chat hub.
///
/// The roster keeps members in the order they first joined. Connections that
/// are open but have not joined are not part of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    members: Vec<Member>,
    history: MessageHistory,
}

impl Hub {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            members: Vec::new(),
            history: MessageHistory::new(history_capacity),
        }
    }

    /// Record the display name of a connection.
    ///
    /// A connection joining again keeps its roster position and gets the new name.
    /// Returns `true` if the connection was not in the roster before.
    pub fn record_name(
        &mut self,
        connection_id: ConnectionId,
        name: Option<DisplayName>,
    ) -> bool {
        match self
            .members
            .iter_mut()
            .find(|m| m.connection_id == connection_id)
        {
            Some(member) => {
                member.name = name;
                false
            }
            None => {
                self.members.push(Member::new(connection_id, name));
                true
            }
        }
    }

    /// Name of a member; `None` if the connection never joined or joined without a name.
    pub fn name_of(&self, connection_id: &ConnectionId) -> Option<&DisplayName> {
        self.members
            .iter()
            .find(|m| &m.connection_id == connection_id)
            .and_then(|m| m.name.as_ref())
    }

    /// Remove a connection from the roster, returning the member if it had joined.
    pub fn remove_member(&mut self, connection_id: &ConnectionId) -> Option<Member> {
        let index = self
            .members
            .iter()
            .position(|m| &m.connection_id == connection_id)?;
        Some(self.members.remove(index))
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Display names in roster order (duplicates and absent names preserved).
    pub fn display_names(&self) -> Vec<Option<DisplayName>> {
        self.members.iter().map(|m| m.name.clone()).collect()
    }

    pub fn append_message(&mut self, message: ChatMessage) -> usize {
        self.history.push(message)
    }

    pub fn history(&self) -> &MessageHistory {
        &self.history
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(super::DEFAULT_HISTORY_CAPACITY)
    }
}
