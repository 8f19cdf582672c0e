use crate::domain::booking::{Booking, BookingDraft};
use crate::domain::value_objects::{BookingId, ItemId, UserId};
use crate::ports::booking_store::{BookingStore, Result};
use async_trait::async_trait;
use std::sync::Arc;

use super::MemoryDb;

/// BookingStoreのインメモリ実装
///
/// 所有者経由の一覧は、同じ`MemoryDb`内のitemsテーブルを参照して解決する。
pub struct InMemoryBookingStore {
    db: Arc<MemoryDb>,
}

impl InMemoryBookingStore {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, draft: BookingDraft) -> Result<Booking> {
        let mut tables = self.db.lock();

        let booking = Booking {
            booking_id: BookingId::from_i64(tables.next_booking_id()),
            item_id: draft.item_id,
            booker_id: draft.booker_id,
            start: draft.start,
            end: draft.end,
            status: draft.status,
        };
        tables
            .bookings
            .insert(booking.booking_id.value(), booking.clone());

        Ok(booking)
    }

    async fn save(&self, booking: Booking) -> Result<Booking> {
        let mut tables = self.db.lock();
        tables
            .bookings
            .insert(booking.booking_id.value(), booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>> {
        let tables = self.db.lock();
        Ok(tables.bookings.get(&booking_id.value()).cloned())
    }

    async fn find_by_booker_id(&self, booker_id: UserId) -> Result<Vec<Booking>> {
        let tables = self.db.lock();
        Ok(tables
            .bookings
            .values()
            .filter(|b| b.booker_id == booker_id)
            .cloned()
            .collect())
    }

    async fn find_by_item_owner_id(&self, owner_id: UserId) -> Result<Vec<Booking>> {
        let tables = self.db.lock();
        Ok(tables
            .bookings
            .values()
            .filter(|b| {
                tables
                    .items
                    .get(&b.item_id.value())
                    .is_some_and(|i| i.owner_id == owner_id)
            })
            .cloned()
            .collect())
    }

    async fn find_by_item_and_booker(
        &self,
        item_id: ItemId,
        booker_id: UserId,
    ) -> Result<Option<Booking>> {
        let tables = self.db.lock();
        Ok(tables
            .bookings
            .values()
            .find(|b| b.item_id == item_id && b.booker_id == booker_id)
            .cloned())
    }
}
