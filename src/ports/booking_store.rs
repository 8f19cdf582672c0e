use crate::domain::booking::{Booking, BookingDraft};
use crate::domain::value_objects::{BookingId, ItemId, UserId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約ストアポート
///
/// 一覧系の操作はストアの挿入順（ID昇順）を保って返す。
/// 1件の予約に対するread-modify-write（ステータス判断）の原子性は
/// ストア側のトランザクション分離に委ねる。エンジン自身はロックしない。
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// 予約を新規作成する（ID採番）
    async fn create(&self, draft: BookingDraft) -> Result<Booking>;

    /// 既存の予約を保存する（ステータス遷移後の保存）
    async fn save(&self, booking: Booking) -> Result<Booking>;

    /// IDで予約を取得する
    async fn find_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>>;

    /// 予約者の全予約を取得する
    async fn find_by_booker_id(&self, booker_id: UserId) -> Result<Vec<Booking>>;

    /// 所有者の物品に対する全予約を取得する
    ///
    /// 予約は所有者を直接持たないため、物品を経由して解決される。
    async fn find_by_item_owner_id(&self, owner_id: UserId) -> Result<Vec<Booking>>;

    /// `(item, booker)`に合致する予約を1件取得する
    ///
    /// 複数件存在する場合にどの1件を返すかは規定しない。
    async fn find_by_item_and_booker(
        &self,
        item_id: ItemId,
        booker_id: UserId,
    ) -> Result<Option<Booking>>;
}
