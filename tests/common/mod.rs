#![allow(dead_code)]

use chrono::{DateTime, Utc};
use rusty_lending_ddd::adapters::memory::{
    InMemoryBookingStore, InMemoryCommentStore, InMemoryItemCatalog, InMemoryRequestBoard,
    InMemoryUserDirectory, MemoryDb,
};
use rusty_lending_ddd::application::ServiceDependencies;
use rusty_lending_ddd::domain::booking::{Booking, BookingDraft, BookingStatus};
use rusty_lending_ddd::domain::value_objects::{ItemId, UserId};
use rusty_lending_ddd::ports::{Item, ItemDraft, User, UserDraft};
use std::sync::Arc;

/// インメモリバックエンドで依存関係をセットアップする
///
/// 全ポート実装が同じ`MemoryDb`を共有する。各テストは独立した
/// データベースを持つ。
pub fn memory_deps() -> ServiceDependencies {
    let db = Arc::new(MemoryDb::new());

    ServiceDependencies {
        user_directory: Arc::new(InMemoryUserDirectory::new(db.clone())),
        item_catalog: Arc::new(InMemoryItemCatalog::new(db.clone())),
        booking_store: Arc::new(InMemoryBookingStore::new(db.clone())),
        comment_store: Arc::new(InMemoryCommentStore::new(db.clone())),
        request_board: Arc::new(InMemoryRequestBoard::new(db)),
    }
}

/// テスト用の利用者を登録する
pub async fn seed_user(deps: &ServiceDependencies, name: &str, email: &str) -> User {
    deps.user_directory
        .create(UserDraft {
            name: name.to_string(),
            email: email.to_string(),
        })
        .await
        .unwrap()
}

/// テスト用の物品を登録する
pub async fn seed_item(
    deps: &ServiceDependencies,
    owner_id: UserId,
    name: &str,
    available: bool,
) -> Item {
    deps.item_catalog
        .create(ItemDraft {
            name: name.to_string(),
            description: format!("{} の説明", name),
            available,
            owner_id,
            request_id: None,
        })
        .await
        .unwrap()
}

/// テスト用の予約をストアに直接登録する
///
/// 過去の期間や判断済みステータスなど、作成操作では作れない状態を
/// セットアップするために使う。
pub async fn seed_booking(
    deps: &ServiceDependencies,
    item_id: ItemId,
    booker_id: UserId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
) -> Booking {
    deps.booking_store
        .create(BookingDraft {
            item_id,
            booker_id,
            start,
            end,
            status,
        })
        .await
        .unwrap()
}
