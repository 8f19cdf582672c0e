use crate::domain::value_objects::UserId;
use async_trait::async_trait;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 利用者レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// ID未採番の利用者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

/// メールアドレス重複を表すストアエラー
///
/// メールアドレスは全利用者を通じて一意。違反は競合であり、
/// 黙って無視してよいクライアント入力ではない。
/// アダプタは一意性違反をこの型で報告し、アプリケーション層は
/// downcastで競合とインフラ障害を区別する。
#[derive(Debug, Error)]
#[error("email already in use: {email}")]
pub struct DuplicatedEmail {
    pub email: String,
}

/// 利用者ディレクトリポート
///
/// 予約コンテキストと利用者コンテキストの境界を維持する。
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// 利用者を新規作成する
    ///
    /// IDはストアが採番する。メールアドレス重複は`DuplicatedEmail`を返す。
    async fn create(&self, draft: UserDraft) -> Result<User>;

    /// 既存の利用者を保存する
    ///
    /// メールアドレス重複は`DuplicatedEmail`を返す。
    async fn save(&self, user: User) -> Result<User>;

    /// IDで利用者を取得する
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>>;

    /// 全利用者を取得する（挿入順）
    async fn find_all(&self) -> Result<Vec<User>>;

    /// 利用者を削除する
    async fn delete(&self, user_id: UserId) -> Result<()>;
}
