use crate::domain::comment::{Comment, CommentDraft};
use crate::domain::value_objects::{CommentId, CommentText, ItemId, UserId};
use crate::ports::comment_store::{CommentStore, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをCommentに変換する
///
/// 本文の不変条件（非空白）は書き込み時に保証されているが、
/// 読み出し時にも`CommentText`の検証を通す。
fn map_row_to_comment(row: &PgRow) -> Result<Comment> {
    let text: String = row.get("text");
    let text = CommentText::new(text).map_err(|e| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid comment text in storage: {:?}", e),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Comment {
        comment_id: CommentId::from_i64(row.get("comment_id")),
        item_id: ItemId::from_i64(row.get("item_id")),
        author_id: UserId::from_i64(row.get("author_id")),
        text,
        created: row.get("created_at"),
    })
}

/// CommentStoreのPostgreSQL実装
pub struct PostgresCommentStore {
    pool: PgPool,
}

impl PostgresCommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for PostgresCommentStore {
    async fn create(&self, draft: CommentDraft) -> Result<Comment> {
        let row = sqlx::query(
            r#"
            INSERT INTO comments (text, item_id, author_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING comment_id, text, item_id, author_id, created_at
            "#,
        )
        .bind(draft.text.value())
        .bind(draft.item_id.value())
        .bind(draft.author_id.value())
        .bind(draft.created)
        .fetch_one(&self.pool)
        .await?;

        map_row_to_comment(&row)
    }
}
