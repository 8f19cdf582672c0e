use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::domain::value_objects::UserId;

use super::error::ApiError;

/// 操作ユーザーIDを運ぶ信頼済みヘッダ
///
/// 認証は上流（ゲートウェイ）で済んでおり、本サービスはヘッダの値を
/// そのまま操作ユーザーとして信頼する。
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// リクエストの前処理を実行後、ハンドラに渡す操作ユーザーID
pub struct SharerId(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for SharerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let value = parts.headers.get(SHARER_USER_ID_HEADER).ok_or_else(|| {
            ApiError::BadRequest(format!("Missing {} header", SHARER_USER_ID_HEADER))
        })?;

        let user_id = value
            .to_str()
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .ok_or_else(|| {
                ApiError::BadRequest(format!("Invalid {} header", SHARER_USER_ID_HEADER))
            })?;

        Ok(SharerId(UserId::from_i64(user_id)))
    }
}
