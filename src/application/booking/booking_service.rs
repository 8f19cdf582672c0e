use crate::application::ServiceDependencies;
use crate::domain::{self, commands::*, value_objects::*};
use crate::domain::booking::{Booking, StateFilter};
use crate::ports::{Item, User};
use chrono::Utc;

use super::errors::{BookingApplicationError, Result};

/// 予約ビュー
///
/// 予約本体に、解決済みの物品と予約者の詳細を添えて返す。
/// API層はIDだけでなく完全な表現を提示する。
#[derive(Debug, Clone)]
pub struct BookingView {
    pub booking: Booking,
    pub item: Item,
    pub booker: User,
}

/// 予約から物品と予約者を解決してビューを構築するヘルパー関数
///
/// create/decide/get/一覧の全操作で共通利用される。
async fn build_booking_view(
    deps: &ServiceDependencies,
    booking: Booking,
) -> Result<BookingView> {
    let item = deps
        .item_catalog
        .find_by_id(booking.item_id)
        .await
        .map_err(BookingApplicationError::ItemCatalogError)?
        .ok_or(BookingApplicationError::ItemNotFound)?;

    let booker = deps
        .user_directory
        .find_by_id(booking.booker_id)
        .await
        .map_err(BookingApplicationError::UserDirectoryError)?
        .ok_or(BookingApplicationError::BookerNotFound)?;

    Ok(BookingView {
        booking,
        item,
        booker,
    })
}

/// 予約を作成する
///
/// ビジネスルール：
/// - 予約者が存在すること
/// - 物品が存在すること
/// - 物品が予約時点で貸出可能であること（継続的には強制しない）
/// - 期間が正しいこと（終了は開始より後、開始は過去でない）
///
/// 同一物品・重複期間に対する既存予約との衝突チェックは行わない。
/// 衝突の裁定は所有者の承認／却下に委ねられる。
///
/// # 戻り値
/// 作成された予約のビュー（ステータスは`Waiting`）
pub async fn create_booking(
    deps: &ServiceDependencies,
    cmd: CreateBooking,
) -> Result<BookingView> {
    // 1. 予約者の存在確認
    let booker = deps
        .user_directory
        .find_by_id(cmd.booker_id)
        .await
        .map_err(BookingApplicationError::UserDirectoryError)?
        .ok_or(BookingApplicationError::BookerNotFound)?;

    // 2. 物品の存在確認
    let item = deps
        .item_catalog
        .find_by_id(cmd.item_id)
        .await
        .map_err(BookingApplicationError::ItemCatalogError)?
        .ok_or(BookingApplicationError::ItemNotFound)?;

    // 3. 貸出可否の確認
    if !item.available {
        return Err(BookingApplicationError::ItemNotAvailable);
    }

    // 4. ドメイン層の純粋関数で期間を検証し、ドラフトを作成
    let draft = domain::booking::plan_booking(
        cmd.item_id,
        cmd.booker_id,
        cmd.start,
        cmd.end,
        Utc::now(),
    )
    .map_err(|e| BookingApplicationError::InvalidPeriod(format!("{:?}", e)))?;

    // 5. ストアに保存（ID採番）
    let booking = deps
        .booking_store
        .create(draft)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    Ok(BookingView {
        booking,
        item,
        booker,
    })
}

/// 予約を判断する（承認／却下）
///
/// ビジネスルール：
/// - 予約が存在すること
/// - 操作者が予約対象物品の**所有者**であること（予約者自身は不可）
/// - `approved = true`なら`Approved`、falseなら`Rejected`に設定する
/// - 判断済みの予約への再判断は防がれず、ステータスは上書きされる（現行の挙動）
pub async fn decide_booking(
    deps: &ServiceDependencies,
    cmd: DecideBooking,
) -> Result<BookingView> {
    // 1. 予約の取得
    let booking = deps
        .booking_store
        .find_by_id(cmd.booking_id)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?
        .ok_or(BookingApplicationError::BookingNotFound)?;

    // 2. 対象物品の所有者を解決
    let item = deps
        .item_catalog
        .find_by_id(booking.item_id)
        .await
        .map_err(BookingApplicationError::ItemCatalogError)?
        .ok_or(BookingApplicationError::ItemNotFound)?;

    // 3. 認可：物品の所有者のみ。予約者にも権限はない
    if cmd.acting_user_id != item.owner_id {
        return Err(BookingApplicationError::AccessDenied);
    }

    // 4. ドメイン層の純粋関数でステータス遷移
    let decided = domain::booking::decide_booking(booking, cmd.approved);

    // 5. 保存
    let saved = deps
        .booking_store
        .save(decided)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    let booker = deps
        .user_directory
        .find_by_id(saved.booker_id)
        .await
        .map_err(BookingApplicationError::UserDirectoryError)?
        .ok_or(BookingApplicationError::BookerNotFound)?;

    Ok(BookingView {
        booking: saved,
        item,
        booker,
    })
}

/// 予約をIDで取得する
///
/// 物品の所有者または予約者のみ閲覧できる。読み取り専用で副作用なし。
pub async fn get_booking(
    deps: &ServiceDependencies,
    acting_user_id: UserId,
    booking_id: BookingId,
) -> Result<BookingView> {
    let booking = deps
        .booking_store
        .find_by_id(booking_id)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?
        .ok_or(BookingApplicationError::BookingNotFound)?;

    let view = build_booking_view(deps, booking).await?;

    // 認可：所有者または予約者
    if acting_user_id != view.item.owner_id && acting_user_id != view.booking.booker_id {
        return Err(BookingApplicationError::AccessDenied);
    }

    Ok(view)
}

/// 状態フィルタを適用してビューの一覧を構築するヘルパー関数
///
/// 1回の呼び出しにつき`now`のスナップショットは1つ。
/// ストアが返した順序（挿入順）を保つ。
async fn filter_into_views(
    deps: &ServiceDependencies,
    bookings: Vec<Booking>,
    state: &str,
) -> Result<Vec<BookingView>> {
    let filter: StateFilter = state
        .parse()
        .map_err(|_| BookingApplicationError::InvalidStateFilter(state.to_string()))?;

    let now = Utc::now();
    let mut views = Vec::new();
    for booking in bookings {
        if filter.matches(&booking, now) {
            views.push(build_booking_view(deps, booking).await?);
        }
    }

    Ok(views)
}

/// 予約者の予約一覧を取得する
///
/// `state`は7つのリテラルトークン
/// （`ALL`/`CURRENT`/`PAST`/`FUTURE`/`WAITING`/`REJECTED`）のいずれか。
/// それ以外のトークンは`InvalidStateFilter`エラー。
pub async fn list_bookings_by_booker(
    deps: &ServiceDependencies,
    booker_id: UserId,
    state: &str,
) -> Result<Vec<BookingView>> {
    let bookings = deps
        .booking_store
        .find_by_booker_id(booker_id)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    filter_into_views(deps, bookings, state).await
}

/// 所有者の物品に対する予約一覧を取得する
///
/// 対象集合は所有者の全物品に対する予約（物品経由で解決）。
/// フィルタの意味は`list_bookings_by_booker`と同じ。
pub async fn list_bookings_by_owner(
    deps: &ServiceDependencies,
    owner_id: UserId,
    state: &str,
) -> Result<Vec<BookingView>> {
    let bookings = deps
        .booking_store
        .find_by_item_owner_id(owner_id)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    filter_into_views(deps, bookings, state).await
}
