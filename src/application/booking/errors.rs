use thiserror::Error;

/// 予約管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookingApplicationError {
    /// 予約者が存在しない
    #[error("Booker not found")]
    BookerNotFound,

    /// 物品が存在しない
    #[error("Item not found")]
    ItemNotFound,

    /// 予約が見つからない
    #[error("Booking not found")]
    BookingNotFound,

    /// 物品が貸出不可
    #[error("Item is not available for booking")]
    ItemNotAvailable,

    /// 呼び出し元にこの予約操作の権限がない
    #[error("Access to booking denied")]
    AccessDenied,

    /// 予約期間が不正（終了が開始より前、または開始が過去）
    #[error("Invalid booking period: {0}")]
    InvalidPeriod(String),

    /// 状態フィルタのトークンが不正
    #[error("Invalid state filter: {0}")]
    InvalidStateFilter(String),

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
pub type Result<T> = std::result::Result<T, BookingApplicationError>;
