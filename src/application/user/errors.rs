use thiserror::Error;

/// 利用者管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum UserApplicationError {
    /// 利用者が存在しない
    #[error("User not found")]
    UserNotFound,

    /// メールアドレスが既に使用されている
    #[error("Email already in use")]
    DuplicatedEmail,

    /// UserDirectoryのエラー
    #[error("User directory error")]
    UserDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, UserApplicationError>;
