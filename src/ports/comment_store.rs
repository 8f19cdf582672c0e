use crate::domain::comment::{Comment, CommentDraft};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// コメントストアポート
///
/// コメントは追記のみ。更新・削除の操作は存在しない。
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// コメントを永続化する（ID採番）
    async fn create(&self, draft: CommentDraft) -> Result<Comment>;
}
