use thiserror::Error;

/// リクエスト掲示板アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum RequestApplicationError {
    /// リクエストが存在しない
    #[error("Request not found")]
    RequestNotFound,

    /// 投稿者（利用者）が存在しない
    #[error("Requestor not found")]
    RequestorNotFound,

    /// RequestBoardのエラー
    #[error("Request board error")]
    RequestBoardError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ItemCatalogのエラー
    #[error("Item catalog error")]
    ItemCatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// UserDirectoryのエラー
    #[error("User directory error")]
    UserDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, RequestApplicationError>;
