use crate::domain::comment::{Comment, CommentDraft};
use crate::domain::value_objects::CommentId;
use crate::ports::comment_store::{CommentStore, Result};
use async_trait::async_trait;
use std::sync::Arc;

use super::MemoryDb;

/// CommentStoreのインメモリ実装
pub struct InMemoryCommentStore {
    db: Arc<MemoryDb>,
}

impl InMemoryCommentStore {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn create(&self, draft: CommentDraft) -> Result<Comment> {
        let mut tables = self.db.lock();

        let comment = Comment {
            comment_id: CommentId::from_i64(tables.next_comment_id()),
            item_id: draft.item_id,
            author_id: draft.author_id,
            text: draft.text,
            created: draft.created,
        };
        tables
            .comments
            .insert(comment.comment_id.value(), comment.clone());

        Ok(comment)
    }
}
