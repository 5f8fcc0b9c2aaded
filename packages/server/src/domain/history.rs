//! Bounded message history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::ChatMessage;

/// Number of messages retained when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Insertion-ordered message log that evicts the oldest entries beyond its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHistory {
    capacity: usize,
    messages: VecDeque<ChatMessage>,
}

impl MessageHistory {
    /// Create an empty history. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            messages: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a message, evicting from the front while over capacity.
    ///
    /// Returns the number of evicted messages.
    pub fn push(&mut self, message: ChatMessage) -> usize {
        self.messages.push_back(message);
        let mut evicted = 0;
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Copy of the retained messages, oldest first.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }
}

impl Default for MessageHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
