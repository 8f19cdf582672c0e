use crate::domain::value_objects::{ItemId, RequestId, UserId};
use crate::ports::item_catalog::{Item, ItemCatalog, ItemDraft, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをItemに変換する
fn map_row_to_item(row: &PgRow) -> Item {
    let request_id: Option<i64> = row.get("request_id");

    Item {
        item_id: ItemId::from_i64(row.get("item_id")),
        name: row.get("name"),
        description: row.get("description"),
        available: row.get("available"),
        owner_id: UserId::from_i64(row.get("owner_id")),
        request_id: request_id.map(RequestId::from_i64),
    }
}

/// ItemCatalogのPostgreSQL実装
pub struct PostgresItemCatalog {
    pool: PgPool,
}

impl PostgresItemCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemCatalog for PostgresItemCatalog {
    async fn create(&self, draft: ItemDraft) -> Result<Item> {
        let row = sqlx::query(
            r#"
            INSERT INTO items (name, description, available, owner_id, request_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING item_id, name, description, available, owner_id, request_id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.available)
        .bind(draft.owner_id.value())
        .bind(draft.request_id.map(|r| r.value()))
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_item(&row))
    }

    async fn save(&self, item: Item) -> Result<Item> {
        let row = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, description = $3, available = $4
            WHERE item_id = $1
            RETURNING item_id, name, description, available, owner_id, request_id
            "#,
        )
        .bind(item.item_id.value())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.available)
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_item(&row))
    }

    async fn find_by_id(&self, item_id: ItemId) -> Result<Option<Item>> {
        let row = sqlx::query(
            r#"
            SELECT item_id, name, description, available, owner_id, request_id
            FROM items
            WHERE item_id = $1
            "#,
        )
        .bind(item_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_item))
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Item>> {
        let rows = sqlx::query(
            r#"
            SELECT item_id, name, description, available, owner_id, request_id
            FROM items
            WHERE owner_id = $1
            ORDER BY item_id ASC
            "#,
        )
        .bind(owner_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_item).collect())
    }

    async fn search(&self, text: &str) -> Result<Vec<Item>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT item_id, name, description, available, owner_id, request_id
            FROM items
            WHERE available = TRUE
              AND (name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%')
            ORDER BY item_id ASC
            "#,
        )
        .bind(text)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_item).collect())
    }

    async fn find_by_request_id(&self, request_id: RequestId) -> Result<Vec<Item>> {
        let rows = sqlx::query(
            r#"
            SELECT item_id, name, description, available, owner_id, request_id
            FROM items
            WHERE request_id = $1
            ORDER BY item_id ASC
            "#,
        )
        .bind(request_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_item).collect())
    }
}
