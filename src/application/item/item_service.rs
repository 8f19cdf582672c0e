use crate::application::ServiceDependencies;
use crate::domain::commands::{CreateItem, UpdateItem};
use crate::domain::value_objects::{ItemId, UserId};
use crate::ports::{Item, ItemDraft};

use super::errors::{ItemApplicationError, Result};

/// 物品を出品する
///
/// ビジネスルール：
/// - 所有者が存在すること
/// - `request_id`が設定されている場合、リクエストへの回答として扱われる
pub async fn create_item(deps: &ServiceDependencies, cmd: CreateItem) -> Result<Item> {
    // 所有者の存在確認
    deps.user_directory
        .find_by_id(cmd.owner_id)
        .await
        .map_err(ItemApplicationError::UserDirectoryError)?
        .ok_or(ItemApplicationError::OwnerNotFound)?;

    let draft = ItemDraft {
        name: cmd.name,
        description: cmd.description,
        available: cmd.available,
        owner_id: cmd.owner_id,
        request_id: cmd.request_id,
    };

    deps.item_catalog
        .create(draft)
        .await
        .map_err(ItemApplicationError::ItemCatalogError)
}

/// 物品を部分更新する
///
/// 物品を変更できるのは所有者のみ。指定されたフィールドのみ上書きする。
pub async fn update_item(deps: &ServiceDependencies, cmd: UpdateItem) -> Result<Item> {
    let current = get_item(deps, cmd.item_id).await?;

    if cmd.acting_user_id != current.owner_id {
        return Err(ItemApplicationError::AccessDenied);
    }

    let updated = Item {
        item_id: current.item_id,
        name: cmd.name.unwrap_or(current.name),
        description: cmd.description.unwrap_or(current.description),
        available: cmd.available.unwrap_or(current.available),
        owner_id: current.owner_id,
        request_id: current.request_id,
    };

    deps.item_catalog
        .save(updated)
        .await
        .map_err(ItemApplicationError::ItemCatalogError)
}

/// 物品をIDで取得する
pub async fn get_item(deps: &ServiceDependencies, item_id: ItemId) -> Result<Item> {
    deps.item_catalog
        .find_by_id(item_id)
        .await
        .map_err(ItemApplicationError::ItemCatalogError)?
        .ok_or(ItemApplicationError::ItemNotFound)
}

/// 所有者の全物品を取得する
pub async fn list_items_by_owner(
    deps: &ServiceDependencies,
    owner_id: UserId,
) -> Result<Vec<Item>> {
    // 所有者の存在確認
    deps.user_directory
        .find_by_id(owner_id)
        .await
        .map_err(ItemApplicationError::UserDirectoryError)?
        .ok_or(ItemApplicationError::OwnerNotFound)?;

    deps.item_catalog
        .find_by_owner(owner_id)
        .await
        .map_err(ItemApplicationError::ItemCatalogError)
}

/// 物品をテキスト検索する
///
/// 空文字の検索語は検索せずに空リストを返す。
pub async fn search_items(deps: &ServiceDependencies, text: &str) -> Result<Vec<Item>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    deps.item_catalog
        .search(text)
        .await
        .map_err(ItemApplicationError::ItemCatalogError)
}
