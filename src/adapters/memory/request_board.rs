use crate::domain::value_objects::{RequestId, UserId};
use crate::ports::request_board::{ItemRequest, RequestBoard, RequestDraft, Result};
use async_trait::async_trait;
use std::sync::Arc;

use super::MemoryDb;

/// RequestBoardのインメモリ実装
pub struct InMemoryRequestBoard {
    db: Arc<MemoryDb>,
}

impl InMemoryRequestBoard {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestBoard for InMemoryRequestBoard {
    async fn create(&self, draft: RequestDraft) -> Result<ItemRequest> {
        let mut tables = self.db.lock();

        let request = ItemRequest {
            request_id: RequestId::from_i64(tables.next_request_id()),
            description: draft.description,
            requestor_id: draft.requestor_id,
            created: draft.created,
        };
        tables
            .requests
            .insert(request.request_id.value(), request.clone());

        Ok(request)
    }

    async fn find_by_id(&self, request_id: RequestId) -> Result<Option<ItemRequest>> {
        let tables = self.db.lock();
        Ok(tables.requests.get(&request_id.value()).cloned())
    }

    async fn find_by_requestor_id(&self, requestor_id: UserId) -> Result<Vec<ItemRequest>> {
        let tables = self.db.lock();
        Ok(tables
            .requests
            .values()
            .filter(|r| r.requestor_id == requestor_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<ItemRequest>> {
        let tables = self.db.lock();
        Ok(tables.requests.values().rev().cloned().collect())
    }
}
