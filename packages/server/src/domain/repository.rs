//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ChatMessage, ConnectionId, DisplayName, Hub, Member, RepositoryError};

/// Hub Repository trait
///
/// 参加者ロースターとメッセージ履歴へのインターフェース。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[async_trait]
pub trait HubRepository: Send + Sync {
    /// Hub の状態のコピーを取得
    async fn get_hub(&self) -> Result<Hub, RepositoryError>;

    /// 接続の表示名を記録し、記録後の表示名リストを返す（名前なしの参加は None）
    async fn record_name(
        &self,
        connection_id: ConnectionId,
        name: Option<DisplayName>,
    ) -> Result<Vec<Option<DisplayName>>, RepositoryError>;

    /// 接続の表示名を取得（未参加、または名前なしで参加していれば None）
    async fn name_of(&self, connection_id: &ConnectionId) -> Option<DisplayName>;

    /// 参加者を削除し、参加していた場合はそのメンバーを返す
    async fn remove_member(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<Member>, RepositoryError>;

    /// 表示名リストを参加順に取得
    async fn display_names(&self) -> Vec<Option<DisplayName>>;

    /// メッセージを履歴に追加（容量超過分は古い順に削除）
    async fn append_message(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// メッセージ履歴を古い順に取得
    async fn history(&self) -> Vec<ChatMessage>;
}
