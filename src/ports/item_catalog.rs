use crate::domain::value_objects::{ItemId, RequestId, UserId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 物品レコード
///
/// 所有者は常にちょうど1人。`request_id`はリクエストへの回答として
/// 出品された場合のみ設定される弱参照。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub item_id: ItemId,
    pub name: String,
    pub description: String,
    /// 貸出可否フラグ。falseの物品は予約できない
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<RequestId>,
}

/// ID未採番の物品
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<RequestId>,
}

/// 物品カタログポート
///
/// 予約コンテキストとカタログコンテキストの境界を維持する。
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    /// 物品を新規登録する（ID採番）
    async fn create(&self, draft: ItemDraft) -> Result<Item>;

    /// 既存の物品を保存する
    async fn save(&self, item: Item) -> Result<Item>;

    /// IDで物品を取得する
    async fn find_by_id(&self, item_id: ItemId) -> Result<Option<Item>>;

    /// 所有者の全物品を取得する（挿入順）
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Item>>;

    /// 名前・説明のテキスト検索
    ///
    /// 大文字小文字を区別せず、貸出可能な物品のみを返す。
    /// 空文字の検索語は空リストを返す。
    async fn search(&self, text: &str) -> Result<Vec<Item>>;

    /// リクエストへの回答として出品された物品を取得する
    async fn find_by_request_id(&self, request_id: RequestId) -> Result<Vec<Item>>;
}
