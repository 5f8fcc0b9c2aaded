//! HTML rendering of view nodes.
//!
//! Mirrors the markup of the browser client so a transcript can be styled
//! with the same `style.css`. Every piece of text that came over the wire is
//! passed through [`escape_html`].

use crate::view::{Authorship, ChatEntry, RosterEntry, ViewNode, escape_html};

pub struct MarkupRenderer;

impl MarkupRenderer {
    /// Render a node, or `None` for transient nodes that leave no markup
    pub fn render(node: &ViewNode) -> Option<String> {
        match node {
            ViewNode::Chat(entry) => Some(Self::render_chat_entry(entry)),
            ViewNode::System(line) => Some(Self::render_system_line(line)),
            ViewNode::Roster(entries) => Some(Self::render_roster(entries)),
            ViewNode::TypingStarted(_) | ViewNode::TypingCleared => None,
        }
    }

    pub fn render_chat_entry(entry: &ChatEntry) -> String {
        let class = match entry.authorship {
            Authorship::Own => "own",
            Authorship::Other => "other",
        };
        format!(
            "<div class=\"message {}\">\
             <div class=\"message-header\">\
             <span class=\"username\">{}</span>\
             <span class=\"timestamp\">{}</span>\
             </div>\
             <div class=\"message-content\">{}</div>\
             </div>\n",
            class,
            escape_html(&entry.username),
            escape_html(&entry.timestamp),
            escape_html(&entry.body)
        )
    }

    pub fn render_system_line(line: &str) -> String {
        format!("<div class=\"system-message\">{}</div>\n", escape_html(line))
    }

    pub fn render_roster(entries: &[RosterEntry]) -> String {
        let mut output = format!(
            "<div class=\"users-list\" data-count=\"{}\">",
            entries.len()
        );
        for entry in entries {
            output.push_str(&format!(
                "<div class=\"user-item\">\
                 <div class=\"user-avatar\">{}</div>\
                 <span class=\"user-name\">{}</span>\
                 </div>",
                escape_html(&entry.initial),
                escape_html(&entry.name)
            ));
        }
        output.push_str("</div>\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_chat_entry_escapes_untrusted_text() {
        // テスト項目: 本文・投稿者名・時刻がすべてエスケープされる
        // given (前提条件):
        let entry = ChatEntry {
            authorship: Authorship::Other,
            username: "<b>mallory</b>".to_string(),
            body: "<script>alert('x')</script>".to_string(),
            timestamp: "\"noon\" & later".to_string(),
        };

        // when (操作):
        let html = MarkupRenderer::render_chat_entry(&entry);

        // then (期待する結果):
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;mallory&lt;/b&gt;"));
        assert!(html.contains("&quot;noon&quot; &amp; later"));
        assert!(html.starts_with("<div class=\"message other\">"));
    }

    #[test]
    fn test_render_own_chat_entry_class() {
        // テスト項目: 自分のメッセージには own クラスが付く
        // given (前提条件):
        let entry = ChatEntry {
            authorship: Authorship::Own,
            username: "alice".to_string(),
            body: "hi".to_string(),
            timestamp: "3:04:05 PM".to_string(),
        };

        // when (操作):
        let html = MarkupRenderer::render_chat_entry(&entry);

        // then (期待する結果):
        assert!(html.starts_with("<div class=\"message own\">"));
        assert!(html.contains("<div class=\"message-content\">hi</div>"));
    }

    #[test]
    fn test_render_system_line_escapes_name() {
        // テスト項目: システム行に含まれる名前もエスケープされる
        // given (前提条件):
        let node = ViewNode::System("<img src=x> joined the chat".to_string());

        // when (操作):
        let html = MarkupRenderer::render(&node).unwrap();

        // then (期待する結果):
        assert_eq!(
            html,
            "<div class=\"system-message\">&lt;img src=x&gt; joined the chat</div>\n"
        );
    }

    #[test]
    fn test_render_roster() {
        // テスト項目: 参加者一覧が人数・頭文字付きで出力される
        // given (前提条件):
        let entries = vec![RosterEntry {
            initial: "&".to_string(),
            name: "&co".to_string(),
        }];

        // when (操作):
        let html = MarkupRenderer::render_roster(&entries);

        // then (期待する結果):
        assert!(html.contains("data-count=\"1\""));
        assert!(html.contains("<div class=\"user-avatar\">&amp;</div>"));
        assert!(html.contains("<span class=\"user-name\">&amp;co</span>"));
    }

    #[test]
    fn test_typing_nodes_leave_no_markup() {
        // テスト項目: 入力中表示は記録に残らない
        // given (前提条件):
        let started = ViewNode::TypingStarted("bob".to_string());

        // when (操作):
        let rendered = (
            MarkupRenderer::render(&started),
            MarkupRenderer::render(&ViewNode::TypingCleared),
        );

        // then (期待する結果):
        assert_eq!(rendered, (None, None));
    }
}
