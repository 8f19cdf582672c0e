use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::booking::BookingView;
use crate::application::comment::CommentView;
use crate::application::request::RequestWithAnswers;
use crate::domain::commands::*;
use crate::domain::value_objects::{ItemId, RequestId, UserId};
use crate::ports::{Item, ItemRequest, User};

// ============================================================================
// リクエストDTO
// ============================================================================

/// 利用者作成のリクエスト
#[derive(Debug, Deserialize)]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
}

impl NewUserRequest {
    pub fn to_command(self) -> CreateUser {
        CreateUser {
            name: self.name,
            email: self.email,
        }
    }
}

/// 利用者更新のリクエスト（部分更新）
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn to_command(self, user_id: UserId) -> UpdateUser {
        UpdateUser {
            user_id,
            name: self.name,
            email: self.email,
        }
    }
}

/// 物品出品のリクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemRequest {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i64>,
}

impl NewItemRequest {
    pub fn to_command(self, owner_id: UserId) -> CreateItem {
        CreateItem {
            owner_id,
            name: self.name,
            description: self.description,
            available: self.available,
            request_id: self.request_id.map(RequestId::from_i64),
        }
    }
}

/// 物品更新のリクエスト（部分更新）
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItemRequest {
    pub fn to_command(self, acting_user_id: UserId, item_id: ItemId) -> UpdateItem {
        UpdateItem {
            acting_user_id,
            item_id,
            name: self.name,
            description: self.description,
            available: self.available,
        }
    }
}

/// 予約作成のリクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    pub item_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl NewBookingRequest {
    pub fn to_command(self, booker_id: UserId) -> CreateBooking {
        CreateBooking {
            booker_id,
            item_id: ItemId::from_i64(self.item_id),
            start: self.start,
            end: self.end,
        }
    }
}

/// コメント追加のリクエスト
#[derive(Debug, Deserialize)]
pub struct NewCommentRequest {
    pub text: String,
}

impl NewCommentRequest {
    pub fn to_command(self, item_id: ItemId, author_id: UserId) -> AddComment {
        AddComment {
            item_id,
            author_id,
            text: self.text,
        }
    }
}

/// 物品リクエスト投稿のリクエスト
#[derive(Debug, Deserialize)]
pub struct NewRequest {
    pub description: String,
}

impl NewRequest {
    pub fn to_command(self, requestor_id: UserId) -> CreateRequest {
        CreateRequest {
            requestor_id,
            description: self.description,
        }
    }
}

// ============================================================================
// クエリパラメータ
// ============================================================================

/// 予約一覧取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct StateQuery {
    /// 状態フィルタのトークン。省略時は`ALL`
    pub state: Option<String>,
}

impl StateQuery {
    pub fn state_or_default(&self) -> &str {
        self.state.as_deref().unwrap_or("ALL")
    }
}

/// 予約判断のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct DecideQuery {
    pub approved: bool,
}

/// 物品検索のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub text: String,
}

// ============================================================================
// レスポンスDTO
// ============================================================================

/// 利用者レスポンス
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.value(),
            name: user.name,
            email: user.email,
        }
    }
}

/// 物品レスポンス
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.item_id.value(),
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id.value(),
            request_id: item.request_id.map(|r| r.value()),
        }
    }
}

/// 予約レスポンス
///
/// IDだけでなく、解決済みの物品と予約者の詳細を含める。
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: String,
    pub item: ItemResponse,
    pub booker: UserResponse,
}

impl From<BookingView> for BookingResponse {
    fn from(view: BookingView) -> Self {
        Self {
            id: view.booking.booking_id.value(),
            start: view.booking.start,
            end: view.booking.end,
            status: view.booking.status.as_str().to_string(),
            item: ItemResponse::from(view.item),
            booker: UserResponse::from(view.booker),
        }
    }
}

/// コメントレスポンス
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub item: ItemResponse,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.comment.comment_id.value(),
            text: view.comment.text.into_string(),
            item: ItemResponse::from(view.item),
            author_name: view.author_name,
            created: view.comment.created,
        }
    }
}

/// 物品リクエストレスポンス
#[derive(Debug, Serialize)]
pub struct RequestResponse {
    pub id: i64,
    pub description: String,
    pub created: DateTime<Utc>,
}

impl From<ItemRequest> for RequestResponse {
    fn from(request: ItemRequest) -> Self {
        Self {
            id: request.request_id.value(),
            description: request.description,
            created: request.created,
        }
    }
}

/// 回答つき物品リクエストレスポンス
#[derive(Debug, Serialize)]
pub struct RequestWithAnswersResponse {
    pub id: i64,
    pub description: String,
    pub created: DateTime<Utc>,
    pub items: Vec<ItemResponse>,
}

impl From<RequestWithAnswers> for RequestWithAnswersResponse {
    fn from(view: RequestWithAnswers) -> Self {
        Self {
            id: view.request.request_id.value(),
            description: view.request.description,
            created: view.request.created,
            items: view.answers.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
