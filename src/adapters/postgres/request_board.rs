use crate::domain::value_objects::{RequestId, UserId};
use crate::ports::request_board::{ItemRequest, RequestBoard, RequestDraft, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをItemRequestに変換する
fn map_row_to_request(row: &PgRow) -> ItemRequest {
    ItemRequest {
        request_id: RequestId::from_i64(row.get("request_id")),
        description: row.get("description"),
        requestor_id: UserId::from_i64(row.get("requestor_id")),
        created: row.get("created_at"),
    }
}

/// RequestBoardのPostgreSQL実装
pub struct PostgresRequestBoard {
    pool: PgPool,
}

impl PostgresRequestBoard {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestBoard for PostgresRequestBoard {
    async fn create(&self, draft: RequestDraft) -> Result<ItemRequest> {
        let row = sqlx::query(
            r#"
            INSERT INTO requests (description, requestor_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING request_id, description, requestor_id, created_at
            "#,
        )
        .bind(&draft.description)
        .bind(draft.requestor_id.value())
        .bind(draft.created)
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_request(&row))
    }

    async fn find_by_id(&self, request_id: RequestId) -> Result<Option<ItemRequest>> {
        let row = sqlx::query(
            r#"
            SELECT request_id, description, requestor_id, created_at
            FROM requests
            WHERE request_id = $1
            "#,
        )
        .bind(request_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_request))
    }

    async fn find_by_requestor_id(&self, requestor_id: UserId) -> Result<Vec<ItemRequest>> {
        let rows = sqlx::query(
            r#"
            SELECT request_id, description, requestor_id, created_at
            FROM requests
            WHERE requestor_id = $1
            ORDER BY request_id ASC
            "#,
        )
        .bind(requestor_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_request).collect())
    }

    async fn find_all(&self) -> Result<Vec<ItemRequest>> {
        let rows = sqlx::query(
            r#"
            SELECT request_id, description, requestor_id, created_at
            FROM requests
            ORDER BY request_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_request).collect())
    }
}
