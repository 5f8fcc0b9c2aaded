//! Message formatting utilities for terminal display.

use crate::view::{Authorship, ChatEntry, RosterEntry, ViewNode};

const RULE: &str = "------------------------------------------------------------";
const DOUBLE_RULE: &str = "============================================================";

/// Message formatter for terminal display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format any view node for the terminal
    pub fn format_node(node: &ViewNode) -> String {
        match node {
            ViewNode::Chat(entry) => Self::format_chat_entry(entry),
            ViewNode::System(line) => Self::format_system_line(line),
            ViewNode::Roster(entries) => Self::format_roster(entries),
            ViewNode::TypingStarted(name) => Self::format_typing_started(name),
            ViewNode::TypingCleared => Self::format_typing_cleared(),
        }
    }

    /// Format a chat entry
    ///
    /// Own messages are marked with `(me)`.
    pub fn format_chat_entry(entry: &ChatEntry) -> String {
        let me_suffix = match entry.authorship {
            Authorship::Own => " (me)",
            Authorship::Other => "",
        };
        format!(
            "\n\n{}\n\
             @{}{}: {}\n\
             sent at {}\n\
             {}\n",
            RULE, entry.username, me_suffix, entry.body, entry.timestamp, RULE
        )
    }

    /// Format a system line such as a join or leave notice
    pub fn format_system_line(line: &str) -> String {
        format!("\n* {}\n", line)
    }

    /// Format the online list with its count
    pub fn format_roster(entries: &[RosterEntry]) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n\n{}\n", DOUBLE_RULE));
        output.push_str(&format!("Online ({}):\n", entries.len()));

        if entries.is_empty() {
            output.push_str("(No users)\n");
        } else {
            for entry in entries {
                output.push_str(&format!("[{}] {}\n", entry.initial, entry.name));
            }
        }

        output.push_str(&format!("{}\n", DOUBLE_RULE));
        output
    }

    pub fn format_typing_started(name: &str) -> String {
        format!("\n… {} is typing...\n", name)
    }

    pub fn format_typing_cleared() -> String {
        String::new()
    }

    /// Format a binary message notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a frame that could not be decoded
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}
