use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, ItemId, RequestId, UserId};

/// コマンド：予約を作成する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub booker_id: UserId,
    pub item_id: ItemId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// コマンド：予約を判断する（承認／却下）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecideBooking {
    pub acting_user_id: UserId,
    pub booking_id: BookingId,
    pub approved: bool,
}

/// コマンド：コメントを追加する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddComment {
    pub item_id: ItemId,
    pub author_id: UserId,
    pub text: String,
}

/// コマンド：利用者を作成する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

/// コマンド：利用者を部分更新する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// コマンド：物品を出品する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub available: bool,
    /// リクエストへの回答として出品する場合に設定される
    pub request_id: Option<RequestId>,
}

/// コマンド：物品を部分更新する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    pub acting_user_id: UserId,
    pub item_id: ItemId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// コマンド：物品リクエストを投稿する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    pub requestor_id: UserId,
    pub description: String,
}
