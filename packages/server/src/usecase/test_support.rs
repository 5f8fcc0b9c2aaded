//! UseCase テスト用の共通フィクスチャ

use std::{collections::HashMap, sync::Arc};

use hiroba_shared::time::{Clock, FixedClock};
use serde_json::Value;
use tokio::sync::{Mutex, mpsc};

use crate::{
    domain::{ConnectionId, Hub, MessagePusher},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryHubRepository,
    },
};

/// 2023-11-14 22:13:20 UTC
pub const FIXED_TIME: i64 = 1_700_000_000_000;

pub fn create_test_repository(history_capacity: usize) -> Arc<InMemoryHubRepository> {
    Arc::new(InMemoryHubRepository::new(Arc::new(Mutex::new(Hub::new(
        history_capacity,
    )))))
}

pub fn create_test_message_pusher() -> Arc<WebSocketMessagePusher> {
    Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))))
}

pub fn create_test_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(FIXED_TIME))
}

/// 接続済みのテスト用クライアント（送信チャンネルの受信側を保持する）
pub struct TestConnection {
    pub id: ConnectionId,
    rx: mpsc::UnboundedReceiver<String>,
}

impl TestConnection {
    pub async fn open(message_pusher: &dyn MessagePusher) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = ConnectionId::generate();
        message_pusher.register_client(id, tx).await;
        Self { id, rx }
    }

    /// 受信済みのフレームを全て取り出して JSON として返す
    pub fn drain(&mut self) -> Vec<Value> {
        let mut frames = Vec::new();
        while let Ok(frame) = self.rx.try_recv() {
            frames.push(serde_json::from_str(&frame).expect("frame should be JSON"));
        }
        frames
    }

    /// 受信済みのフレームのイベント名を取り出す
    pub fn drain_event_names(&mut self) -> Vec<String> {
        self.drain()
            .into_iter()
            .map(|frame| frame["event"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
