use crate::domain::booking::{Booking, BookingDraft, BookingStatus};
use crate::domain::value_objects::{BookingId, ItemId, UserId};
use crate::ports::booking_store::{BookingStore, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをBookingに変換する
///
/// statusの文字列からの変換でエラーハンドリングを行う。
fn map_row_to_booking(row: &PgRow) -> Result<Booking> {
    let status_str: &str = row.get("status");
    let status = BookingStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Booking {
        booking_id: BookingId::from_i64(row.get("booking_id")),
        item_id: ItemId::from_i64(row.get("item_id")),
        booker_id: UserId::from_i64(row.get("booker_id")),
        start: row.get("start_at"),
        end: row.get("end_at"),
        status,
    })
}

/// BookingStoreのPostgreSQL実装
///
/// 一覧系はID昇順（挿入順）で返す。所有者経由の一覧はitemsテーブルとの
/// 結合で解決する。
pub struct PostgresBookingStore {
    pool: PgPool,
}

impl PostgresBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PostgresBookingStore {
    async fn create(&self, draft: BookingDraft) -> Result<Booking> {
        let row = sqlx::query(
            r#"
            INSERT INTO bookings (item_id, booker_id, start_at, end_at, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING booking_id, item_id, booker_id, start_at, end_at, status
            "#,
        )
        .bind(draft.item_id.value())
        .bind(draft.booker_id.value())
        .bind(draft.start)
        .bind(draft.end)
        .bind(draft.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        map_row_to_booking(&row)
    }

    async fn save(&self, booking: Booking) -> Result<Booking> {
        let row = sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2
            WHERE booking_id = $1
            RETURNING booking_id, item_id, booker_id, start_at, end_at, status
            "#,
        )
        .bind(booking.booking_id.value())
        .bind(booking.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        map_row_to_booking(&row)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT booking_id, item_id, booker_id, start_at, end_at, status
            FROM bookings
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }

    async fn find_by_booker_id(&self, booker_id: UserId) -> Result<Vec<Booking>> {
        let rows = sqlx::query(
            r#"
            SELECT booking_id, item_id, booker_id, start_at, end_at, status
            FROM bookings
            WHERE booker_id = $1
            ORDER BY booking_id ASC
            "#,
        )
        .bind(booker_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_booking).collect()
    }

    async fn find_by_item_owner_id(&self, owner_id: UserId) -> Result<Vec<Booking>> {
        let rows = sqlx::query(
            r#"
            SELECT b.booking_id, b.item_id, b.booker_id, b.start_at, b.end_at, b.status
            FROM bookings b
            JOIN items i ON i.item_id = b.item_id
            WHERE i.owner_id = $1
            ORDER BY b.booking_id ASC
            "#,
        )
        .bind(owner_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_booking).collect()
    }

    async fn find_by_item_and_booker(
        &self,
        item_id: ItemId,
        booker_id: UserId,
    ) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT booking_id, item_id, booker_id, start_at, end_at, status
            FROM bookings
            WHERE item_id = $1 AND booker_id = $2
            ORDER BY booking_id ASC
            LIMIT 1
            "#,
        )
        .bind(item_id.value())
        .bind(booker_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }
}
