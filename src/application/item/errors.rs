use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum ItemApplicationError {
    /// 物品が存在しない
    #[error("Item not found")]
    ItemNotFound,

    /// 所有者（利用者）が存在しない
    #[error("Owner not found")]
    OwnerNotFound,

    /// 所有者以外による変更
    #[error("Access to item denied")]
    AccessDenied,

    /// ItemCatalogのエラー
    #[error("Item catalog error")]
    ItemCatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// UserDirectoryのエラー
    #[error("User directory error")]
    UserDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ItemApplicationError>;
