use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::booking::BookingApplicationError;
use crate::application::comment::CommentApplicationError;
use crate::application::item::ItemApplicationError;
use crate::application::request::RequestApplicationError;
use crate::application::user::UserApplicationError;

use super::types::ErrorResponse;

/// API層のエラー型
///
/// 各アプリケーション層のエラーをラップし、HTTPレスポンスへの
/// マッピングを提供する。インフラ障害の詳細はログに記録し、
/// クライアントには一般的なメッセージのみを返す。
#[derive(Debug)]
pub enum ApiError {
    Booking(BookingApplicationError),
    Comment(CommentApplicationError),
    Item(ItemApplicationError),
    User(UserApplicationError),
    Request(RequestApplicationError),
    /// ヘッダ欠落などリクエスト自体の不備
    BadRequest(String),
}

impl From<BookingApplicationError> for ApiError {
    fn from(err: BookingApplicationError) -> Self {
        ApiError::Booking(err)
    }
}

impl From<CommentApplicationError> for ApiError {
    fn from(err: CommentApplicationError) -> Self {
        ApiError::Comment(err)
    }
}

impl From<ItemApplicationError> for ApiError {
    fn from(err: ItemApplicationError) -> Self {
        ApiError::Item(err)
    }
}

impl From<UserApplicationError> for ApiError {
    fn from(err: UserApplicationError) -> Self {
        ApiError::User(err)
    }
}

impl From<RequestApplicationError> for ApiError {
    fn from(err: RequestApplicationError) -> Self {
        ApiError::Request(err)
    }
}

/// インフラ障害の共通マッピング
///
/// 詳細はログにのみ残す。
fn internal(
    source: &(dyn std::error::Error + Send + Sync),
) -> (StatusCode, &'static str, String) {
    tracing::error!("Storage error: {}", source);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An unexpected error occurred".to_string(),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Booking(err) => match err {
                // 404 Not Found
                BookingApplicationError::BookerNotFound
                | BookingApplicationError::ItemNotFound
                | BookingApplicationError::BookingNotFound => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
                }

                // 400 Bad Request - クライアント入力の問題
                BookingApplicationError::ItemNotAvailable => (
                    StatusCode::BAD_REQUEST,
                    "ITEM_NOT_AVAILABLE",
                    err.to_string(),
                ),
                BookingApplicationError::InvalidPeriod(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_PERIOD", err.to_string())
                }
                BookingApplicationError::InvalidStateFilter(_) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_STATE_FILTER",
                    err.to_string(),
                ),

                // 403 Forbidden - 認可の失敗
                BookingApplicationError::AccessDenied => {
                    (StatusCode::FORBIDDEN, "ACCESS_DENIED", err.to_string())
                }

                // 500 Internal Server Error
                BookingApplicationError::BookingStoreError(ref e)
                | BookingApplicationError::ItemCatalogError(ref e)
                | BookingApplicationError::UserDirectoryError(ref e) => internal(e.as_ref()),
            },

            ApiError::Comment(err) => match err {
                CommentApplicationError::ItemNotFound
                | CommentApplicationError::AuthorNotFound => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
                }

                // コメント資格の拒否は意味的には認可の失敗だが、
                // 400として返すマッピングを維持する
                CommentApplicationError::CommentAccessDenied(_) => (
                    StatusCode::BAD_REQUEST,
                    "COMMENT_ACCESS_DENIED",
                    err.to_string(),
                ),
                CommentApplicationError::BlankText => {
                    (StatusCode::BAD_REQUEST, "BLANK_TEXT", err.to_string())
                }

                CommentApplicationError::CommentStoreError(ref e)
                | CommentApplicationError::BookingStoreError(ref e)
                | CommentApplicationError::ItemCatalogError(ref e)
                | CommentApplicationError::UserDirectoryError(ref e) => internal(e.as_ref()),
            },

            ApiError::Item(err) => match err {
                ItemApplicationError::ItemNotFound | ItemApplicationError::OwnerNotFound => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
                }
                ItemApplicationError::AccessDenied => {
                    (StatusCode::FORBIDDEN, "ACCESS_DENIED", err.to_string())
                }
                ItemApplicationError::ItemCatalogError(ref e)
                | ItemApplicationError::UserDirectoryError(ref e) => internal(e.as_ref()),
            },

            ApiError::User(err) => match err {
                UserApplicationError::UserNotFound => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
                }

                // 409 Conflict - メールアドレスの一意性違反
                UserApplicationError::DuplicatedEmail => {
                    (StatusCode::CONFLICT, "EMAIL_CONFLICT", err.to_string())
                }
                UserApplicationError::UserDirectoryError(ref e) => internal(e.as_ref()),
            },

            ApiError::Request(err) => match err {
                RequestApplicationError::RequestNotFound
                | RequestApplicationError::RequestorNotFound => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
                }
                RequestApplicationError::RequestBoardError(ref e)
                | RequestApplicationError::ItemCatalogError(ref e)
                | RequestApplicationError::UserDirectoryError(ref e) => internal(e.as_ref()),
            },

            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
