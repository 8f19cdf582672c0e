use crate::domain::value_objects::{RequestId, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 物品リクエストレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub request_id: RequestId,
    pub description: String,
    pub requestor_id: UserId,
    pub created: DateTime<Utc>,
}

/// ID未採番の物品リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub description: String,
    pub requestor_id: UserId,
    pub created: DateTime<Utc>,
}

/// 物品リクエスト掲示板ポート
#[async_trait]
pub trait RequestBoard: Send + Sync {
    /// リクエストを投稿する（ID採番）
    async fn create(&self, draft: RequestDraft) -> Result<ItemRequest>;

    /// IDでリクエストを取得する
    async fn find_by_id(&self, request_id: RequestId) -> Result<Option<ItemRequest>>;

    /// 投稿者の全リクエストを取得する（挿入順）
    async fn find_by_requestor_id(&self, requestor_id: UserId) -> Result<Vec<ItemRequest>>;

    /// 全リクエストを取得する（新しい順）
    async fn find_all(&self) -> Result<Vec<ItemRequest>>;
}
