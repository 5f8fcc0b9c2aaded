//! HTML transcript of a chat session.

use std::path::Path;

use chrono::Local;
use tokio::{
    fs::{File, OpenOptions},
    io::AsyncWriteExt,
};

use crate::{error::ClientError, markup::MarkupRenderer, view::ViewNode};

/// Append-only HTML log of everything rendered during a session
pub struct Transcript {
    file: File,
}

impl Transcript {
    /// Open `path` for appending and write a session header
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;

        let header = format!(
            "<!-- session started {} -->\n",
            Local::now().format("%Y-%m-%d %H:%M:%S %:z")
        );
        file.write_all(header.as_bytes()).await?;

        tracing::debug!("Writing transcript to {}", path.display());
        Ok(Self { file })
    }

    /// Append the markup for `node`, if it has any
    pub async fn record(&mut self, node: &ViewNode) -> Result<(), ClientError> {
        if let Some(markup) = MarkupRenderer::render(node) {
            self.file.write_all(markup.as_bytes()).await?;
            self.file.flush().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Authorship, ChatEntry};

    #[tokio::test]
    async fn test_transcript_records_escaped_markup() {
        // テスト項目: 記録された HTML はエスケープ済みで、入力中表示は含まれない
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.html");
        let mut transcript = Transcript::open(&path).await.unwrap();

        // when (操作):
        transcript
            .record(&ViewNode::Chat(ChatEntry {
                authorship: Authorship::Other,
                username: "bob".to_string(),
                body: "<script>alert('x')</script>".to_string(),
                timestamp: "3:04:05 PM".to_string(),
            }))
            .await
            .unwrap();
        transcript
            .record(&ViewNode::TypingStarted("bob".to_string()))
            .await
            .unwrap();
        transcript
            .record(&ViewNode::System("bob left the chat".to_string()))
            .await
            .unwrap();

        // then (期待する結果):
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.starts_with("<!-- session started "));
        assert!(contents.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(!contents.contains("<script>"));
        assert!(!contents.contains("is typing"));
        assert!(contents.ends_with("<div class=\"system-message\">bob left the chat</div>\n"));
    }

    #[tokio::test]
    async fn test_transcript_appends_across_sessions() {
        // テスト項目: 既存の記録は上書きされず追記される
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.html");
        let mut first = Transcript::open(&path).await.unwrap();
        first
            .record(&ViewNode::System("first".to_string()))
            .await
            .unwrap();
        drop(first);

        // when (操作):
        let mut second = Transcript::open(&path).await.unwrap();
        second
            .record(&ViewNode::System("second".to_string()))
            .await
            .unwrap();

        // then (期待する結果):
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents.matches("<!-- session started ").count(), 2);
        let first_at = contents.find("first").unwrap();
        let second_at = contents.find("second").unwrap();
        assert!(first_at < second_at);
    }
}
