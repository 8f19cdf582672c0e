use crate::domain::booking::Booking;
use crate::domain::comment::Comment;
use crate::ports::{Item, ItemRequest, User};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

mod booking_store;
mod comment_store;
mod item_catalog;
mod request_board;
mod user_directory;

pub use booking_store::InMemoryBookingStore;
pub use comment_store::InMemoryCommentStore;
pub use item_catalog::InMemoryItemCatalog;
pub use request_board::InMemoryRequestBoard;
pub use user_directory::InMemoryUserDirectory;

/// インメモリデータベース
///
/// 全テーブルを1つのMutexで守る。各ポート実装は同じ`Arc<MemoryDb>`を
/// 共有し、物品経由の結合（所有者の予約一覧など）を同一プロセス内で解決する。
///
/// BTreeMapのキーはID（単調増加・再利用なし）。ID順の走査が
/// そのまま挿入順の走査になる。
pub struct MemoryDb {
    inner: Mutex<Tables>,
}

#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) users: BTreeMap<i64, User>,
    pub(crate) items: BTreeMap<i64, Item>,
    pub(crate) bookings: BTreeMap<i64, Booking>,
    pub(crate) comments: BTreeMap<i64, Comment>,
    pub(crate) requests: BTreeMap<i64, ItemRequest>,

    next_user_id: i64,
    next_item_id: i64,
    next_booking_id: i64,
    next_comment_id: i64,
    next_request_id: i64,
}

impl Tables {
    pub(crate) fn next_user_id(&mut self) -> i64 {
        self.next_user_id += 1;
        self.next_user_id
    }

    pub(crate) fn next_item_id(&mut self) -> i64 {
        self.next_item_id += 1;
        self.next_item_id
    }

    pub(crate) fn next_booking_id(&mut self) -> i64 {
        self.next_booking_id += 1;
        self.next_booking_id
    }

    pub(crate) fn next_comment_id(&mut self) -> i64 {
        self.next_comment_id += 1;
        self.next_comment_id
    }

    pub(crate) fn next_request_id(&mut self) -> i64 {
        self.next_request_id += 1;
        self.next_request_id
    }
}

impl MemoryDb {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Tables::default()),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().unwrap()
    }
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new()
    }
}
