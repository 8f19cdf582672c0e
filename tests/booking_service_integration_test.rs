use chrono::{Duration, Utc};
use rusty_lending_ddd::application::booking::{
    BookingApplicationError, create_booking, decide_booking, get_booking,
    list_bookings_by_booker, list_bookings_by_owner,
};
use rusty_lending_ddd::domain::booking::BookingStatus;
use rusty_lending_ddd::domain::commands::{CreateBooking, DecideBooking};
use rusty_lending_ddd::domain::value_objects::{BookingId, ItemId, UserId};

mod common;
use common::{memory_deps, seed_booking, seed_item, seed_user};

// ============================================================================
// 予約作成
// ============================================================================

#[tokio::test]
async fn test_create_booking_success() {
    // Arrange: 所有者・予約者・貸出可能な物品
    let deps = memory_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, "ドリル", true).await;

    let now = Utc::now();
    let cmd = CreateBooking {
        booker_id: booker.user_id,
        item_id: item.item_id,
        start: now + Duration::days(1),
        end: now + Duration::days(2),
    };

    // Act
    let result = create_booking(&deps, cmd).await;

    // Assert: WAITINGで作成され、ビューに物品と予約者の詳細が含まれる
    assert!(result.is_ok());
    let view = result.unwrap();
    assert_eq!(view.booking.status, BookingStatus::Waiting);
    assert_eq!(view.booking.item_id, item.item_id);
    assert_eq!(view.booking.booker_id, booker.user_id);
    assert_eq!(view.item.name, "ドリル");
    assert_eq!(view.booker.name, "booker");
}

#[tokio::test]
async fn test_create_booking_fails_for_unknown_booker() {
    let deps = memory_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let item = seed_item(&deps, owner.user_id, "ドリル", true).await;

    let now = Utc::now();
    let cmd = CreateBooking {
        booker_id: UserId::from_i64(999),
        item_id: item.item_id,
        start: now + Duration::days(1),
        end: now + Duration::days(2),
    };

    let result = create_booking(&deps, cmd).await;

    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::BookerNotFound
    ));
}

#[tokio::test]
async fn test_create_booking_fails_for_unknown_item() {
    let deps = memory_deps();
    let booker = seed_user(&deps, "booker", "booker@example.com").await;

    let now = Utc::now();
    let cmd = CreateBooking {
        booker_id: booker.user_id,
        item_id: ItemId::from_i64(999),
        start: now + Duration::days(1),
        end: now + Duration::days(2),
    };

    let result = create_booking(&deps, cmd).await;

    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::ItemNotFound
    ));
}

#[tokio::test]
async fn test_create_booking_fails_for_unavailable_item() {
    // available = false の物品は予約できない
    let deps = memory_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, "修理中のドリル", false).await;

    let now = Utc::now();
    let cmd = CreateBooking {
        booker_id: booker.user_id,
        item_id: item.item_id,
        start: now + Duration::days(1),
        end: now + Duration::days(2),
    };

    let result = create_booking(&deps, cmd).await;

    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::ItemNotAvailable
    ));
}

#[tokio::test]
async fn test_create_booking_fails_for_invalid_period() {
    let deps = memory_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, "ドリル", true).await;

    let now = Utc::now();

    // 終了が開始より前
    let cmd = CreateBooking {
        booker_id: booker.user_id,
        item_id: item.item_id,
        start: now + Duration::days(2),
        end: now + Duration::days(1),
    };
    let result = create_booking(&deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::InvalidPeriod(_)
    ));

    // 開始が過去
    let cmd = CreateBooking {
        booker_id: booker.user_id,
        item_id: item.item_id,
        start: now - Duration::days(1),
        end: now + Duration::days(1),
    };
    let result = create_booking(&deps, cmd).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::InvalidPeriod(_)
    ));
}

// ============================================================================
// 予約の判断（承認／却下）
// ============================================================================

/// 共通セットアップ：所有者・予約者・物品・WAITING予約
async fn setup_waiting_booking() -> (
    rusty_lending_ddd::application::ServiceDependencies,
    UserId,
    UserId,
    BookingId,
) {
    let deps = memory_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, "ドリル", true).await;

    let now = Utc::now();
    let view = create_booking(
        &deps,
        CreateBooking {
            booker_id: booker.user_id,
            item_id: item.item_id,
            start: now + Duration::days(1),
            end: now + Duration::days(2),
        },
    )
    .await
    .unwrap();

    (deps, owner.user_id, booker.user_id, view.booking.booking_id)
}

#[tokio::test]
async fn test_decide_booking_owner_approves() {
    let (deps, owner_id, _, booking_id) = setup_waiting_booking().await;

    let result = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner_id,
            booking_id,
            approved: true,
        },
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().booking.status, BookingStatus::Approved);
}

#[tokio::test]
async fn test_decide_booking_owner_rejects() {
    let (deps, owner_id, _, booking_id) = setup_waiting_booking().await;

    let result = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner_id,
            booking_id,
            approved: false,
        },
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().booking.status, BookingStatus::Rejected);
}

#[tokio::test]
async fn test_decide_booking_denied_for_booker() {
    // 予約者自身には判断の権限がない
    let (deps, _, booker_id, booking_id) = setup_waiting_booking().await;

    let result = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: booker_id,
            booking_id,
            approved: true,
        },
    )
    .await;

    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::AccessDenied
    ));
}

#[tokio::test]
async fn test_decide_booking_denied_for_third_party() {
    let (deps, _, _, booking_id) = setup_waiting_booking().await;
    let third = seed_user(&deps, "third", "third@example.com").await;

    let result = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: third.user_id,
            booking_id,
            approved: true,
        },
    )
    .await;

    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::AccessDenied
    ));
}

#[tokio::test]
async fn test_decide_booking_fails_for_unknown_booking() {
    let (deps, owner_id, _, _) = setup_waiting_booking().await;

    let result = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner_id,
            booking_id: BookingId::from_i64(999),
            approved: true,
        },
    )
    .await;

    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::BookingNotFound
    ));
}

#[tokio::test]
async fn test_redecide_overwrites_status() {
    // 判断済みの予約への再判断は防がれない（現行の挙動として文書化）
    let (deps, owner_id, _, booking_id) = setup_waiting_booking().await;

    let approved = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner_id,
            booking_id,
            approved: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(approved.booking.status, BookingStatus::Approved);

    // 2回目の判断も成功し、ステータスを上書きする
    let rejected = decide_booking(
        &deps,
        DecideBooking {
            acting_user_id: owner_id,
            booking_id,
            approved: false,
        },
    )
    .await
    .unwrap();
    assert_eq!(rejected.booking.status, BookingStatus::Rejected);
}

// ============================================================================
// 予約の取得
// ============================================================================

#[tokio::test]
async fn test_get_booking_visible_to_owner_and_booker_only() {
    let (deps, owner_id, booker_id, booking_id) = setup_waiting_booking().await;
    let third = seed_user(&deps, "third", "third@example.com").await;

    // 予約者は閲覧できる
    assert!(get_booking(&deps, booker_id, booking_id).await.is_ok());

    // 所有者も閲覧できる
    assert!(get_booking(&deps, owner_id, booking_id).await.is_ok());

    // 第三者は拒否される
    let result = get_booking(&deps, third.user_id, booking_id).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::AccessDenied
    ));
}

#[tokio::test]
async fn test_get_booking_fails_for_unknown_id() {
    let (deps, owner_id, _, _) = setup_waiting_booking().await;

    let result = get_booking(&deps, owner_id, BookingId::from_i64(999)).await;
    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::BookingNotFound
    ));
}

// ============================================================================
// 一覧取得と状態フィルタ
// ============================================================================

/// フィルタ検証用のセットアップ
///
/// 予約者に対し、性質の異なる4件の予約をストアに直接登録する：
/// 1. 終了済み（WAITING, end < now）
/// 2. 未来（WAITING, start > now）
/// 3. 未来・承認済み（APPROVED）
/// 4. 未来・却下（REJECTED）
async fn setup_filter_fixtures() -> (
    rusty_lending_ddd::application::ServiceDependencies,
    UserId,
    UserId,
    Vec<BookingId>,
) {
    let deps = memory_deps();
    let owner = seed_user(&deps, "owner", "owner@example.com").await;
    let booker = seed_user(&deps, "booker", "booker@example.com").await;
    let item = seed_item(&deps, owner.user_id, "ドリル", true).await;

    let now = Utc::now();
    let mut ids = Vec::new();

    let past = seed_booking(
        &deps,
        item.item_id,
        booker.user_id,
        now - Duration::days(2),
        now - Duration::days(1),
        BookingStatus::Waiting,
    )
    .await;
    ids.push(past.booking_id);

    let future_waiting = seed_booking(
        &deps,
        item.item_id,
        booker.user_id,
        now + Duration::days(1),
        now + Duration::days(2),
        BookingStatus::Waiting,
    )
    .await;
    ids.push(future_waiting.booking_id);

    let future_approved = seed_booking(
        &deps,
        item.item_id,
        booker.user_id,
        now + Duration::days(3),
        now + Duration::days(4),
        BookingStatus::Approved,
    )
    .await;
    ids.push(future_approved.booking_id);

    let future_rejected = seed_booking(
        &deps,
        item.item_id,
        booker.user_id,
        now + Duration::days(5),
        now + Duration::days(6),
        BookingStatus::Rejected,
    )
    .await;
    ids.push(future_rejected.booking_id);

    (deps, owner.user_id, booker.user_id, ids)
}

#[tokio::test]
async fn test_list_by_booker_all_preserves_insertion_order() {
    let (deps, _, booker_id, ids) = setup_filter_fixtures().await;

    let views = list_bookings_by_booker(&deps, booker_id, "ALL").await.unwrap();

    let listed: Vec<BookingId> = views.iter().map(|v| v.booking.booking_id).collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_list_by_booker_past() {
    let (deps, _, booker_id, ids) = setup_filter_fixtures().await;

    let views = list_bookings_by_booker(&deps, booker_id, "PAST").await.unwrap();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].booking.booking_id, ids[0]);
}

#[tokio::test]
async fn test_list_by_booker_future() {
    let (deps, _, booker_id, ids) = setup_filter_fixtures().await;

    let views = list_bookings_by_booker(&deps, booker_id, "FUTURE").await.unwrap();

    let listed: Vec<BookingId> = views.iter().map(|v| v.booking.booking_id).collect();
    assert_eq!(listed, vec![ids[1], ids[2], ids[3]]);
}

#[tokio::test]
async fn test_list_by_booker_waiting() {
    let (deps, _, booker_id, ids) = setup_filter_fixtures().await;

    let views = list_bookings_by_booker(&deps, booker_id, "WAITING").await.unwrap();

    let listed: Vec<BookingId> = views.iter().map(|v| v.booking.booking_id).collect();
    assert_eq!(listed, vec![ids[0], ids[1]]);
}

#[tokio::test]
async fn test_list_by_booker_rejected() {
    let (deps, _, booker_id, ids) = setup_filter_fixtures().await;

    let views = list_bookings_by_booker(&deps, booker_id, "REJECTED").await.unwrap();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].booking.booking_id, ids[3]);
}

#[tokio::test]
async fn test_list_by_booker_current_filters_by_approval() {
    // CURRENTは期間ではなく承認ステータスで判定される
    let (deps, _, booker_id, ids) = setup_filter_fixtures().await;

    let views = list_bookings_by_booker(&deps, booker_id, "CURRENT").await.unwrap();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].booking.booking_id, ids[2]);
}

#[tokio::test]
async fn test_list_by_booker_rejects_unknown_token() {
    let (deps, _, booker_id, _) = setup_filter_fixtures().await;

    let result = list_bookings_by_booker(&deps, booker_id, "SOMETHING").await;

    assert!(matches!(
        result.unwrap_err(),
        BookingApplicationError::InvalidStateFilter(_)
    ));
}

#[tokio::test]
async fn test_list_by_owner_resolves_through_items() {
    // 対象集合は所有者の物品に対する予約。予約者は複数でもよい
    let (deps, owner_id, _, ids) = setup_filter_fixtures().await;

    // 別の所有者の物品に対する予約はこの一覧に含まれない
    let other_owner = seed_user(&deps, "other", "other@example.com").await;
    let other_booker = seed_user(&deps, "ob", "ob@example.com").await;
    let other_item = seed_item(&deps, other_owner.user_id, "テント", true).await;
    let now = Utc::now();
    seed_booking(
        &deps,
        other_item.item_id,
        other_booker.user_id,
        now + Duration::days(1),
        now + Duration::days(2),
        BookingStatus::Waiting,
    )
    .await;

    let views = list_bookings_by_owner(&deps, owner_id, "ALL").await.unwrap();

    let listed: Vec<BookingId> = views.iter().map(|v| v.booking.booking_id).collect();
    assert_eq!(listed, ids);

    // 別所有者側の一覧には1件だけ
    let other_views = list_bookings_by_owner(&deps, other_owner.user_id, "ALL")
        .await
        .unwrap();
    assert_eq!(other_views.len(), 1);
    assert_eq!(other_views[0].item.name, "テント");
}

#[tokio::test]
async fn test_list_by_owner_applies_same_filter_semantics() {
    let (deps, owner_id, _, ids) = setup_filter_fixtures().await;

    let views = list_bookings_by_owner(&deps, owner_id, "WAITING").await.unwrap();

    let listed: Vec<BookingId> = views.iter().map(|v| v.booking.booking_id).collect();
    assert_eq!(listed, vec![ids[0], ids[1]]);
}
