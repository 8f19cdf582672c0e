use thiserror::Error;

/// コメント資格ゲートのアプリケーション層エラー
#[derive(Debug, Error)]
pub enum CommentApplicationError {
    /// 物品が存在しない
    #[error("Item not found")]
    ItemNotFound,

    /// 著者が存在しない
    #[error("Author not found")]
    AuthorNotFound,

    /// コメント資格がない（所有者本人・予約履歴なし・期間未経過）
    #[error("Not eligible to comment: {0}")]
    CommentAccessDenied(String),

    /// 本文が空白のみ
    #[error("Comment text must not be blank")]
    BlankText,

    /// CommentStoreのエラー
    #[error("Comment store error")]
    CommentStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// BookingStoreのエラー
    #[error("Booking store error")]
    BookingStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ItemCatalogのエラー
    #[error("Item catalog error")]
    ItemCatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// UserDirectoryのエラー
    #[error("User directory error")]
    UserDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CommentApplicationError>;
