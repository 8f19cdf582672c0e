use crate::domain::value_objects::{ItemId, RequestId, UserId};
use crate::ports::item_catalog::{Item, ItemCatalog, ItemDraft, Result};
use async_trait::async_trait;
use std::sync::Arc;

use super::MemoryDb;

/// ItemCatalogのインメモリ実装
pub struct InMemoryItemCatalog {
    db: Arc<MemoryDb>,
}

impl InMemoryItemCatalog {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemCatalog for InMemoryItemCatalog {
    async fn create(&self, draft: ItemDraft) -> Result<Item> {
        let mut tables = self.db.lock();

        let item = Item {
            item_id: ItemId::from_i64(tables.next_item_id()),
            name: draft.name,
            description: draft.description,
            available: draft.available,
            owner_id: draft.owner_id,
            request_id: draft.request_id,
        };
        tables.items.insert(item.item_id.value(), item.clone());

        Ok(item)
    }

    async fn save(&self, item: Item) -> Result<Item> {
        let mut tables = self.db.lock();
        tables.items.insert(item.item_id.value(), item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, item_id: ItemId) -> Result<Option<Item>> {
        let tables = self.db.lock();
        Ok(tables.items.get(&item_id.value()).cloned())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Item>> {
        let tables = self.db.lock();
        Ok(tables
            .items
            .values()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn search(&self, text: &str) -> Result<Vec<Item>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let needle = text.to_lowercase();
        let tables = self.db.lock();
        Ok(tables
            .items
            .values()
            .filter(|i| {
                i.available
                    && (i.name.to_lowercase().contains(&needle)
                        || i.description.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn find_by_request_id(&self, request_id: RequestId) -> Result<Vec<Item>> {
        let tables = self.db.lock();
        Ok(tables
            .items
            .values()
            .filter(|i| i.request_id == Some(request_id))
            .cloned()
            .collect())
    }
}
