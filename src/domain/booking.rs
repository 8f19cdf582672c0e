use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, BookingPeriodError, ItemId, UserId};

// ============================================================================
// 予約ステータス
// ============================================================================

/// 予約ステータス
///
/// 状態遷移：
/// - `Waiting`（作成時の初期状態）→ `Approved` | `Rejected`（所有者の判断）
/// - `Canceled`はデータモデル上定義されるが、本コアのどの操作からも到達しない
///
/// `Approved`/`Rejected`からの遷移を禁じるガードは存在せず、
/// 再判断は常にステータスを上書きする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// 承認待ち
    Waiting,
    /// 所有者が承認済み
    Approved,
    /// 所有者が却下
    Rejected,
    /// 予約者が取り消し（未使用）
    Canceled,
}

impl BookingStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Canceled => "CANCELED",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            "CANCELED" => Ok(BookingStatus::Canceled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

// ============================================================================
// Booking集約
// ============================================================================

/// Booking集約 - 1つの物品に対する1回の時間枠つき予約
///
/// 不変条件：`(start, end)`は作成時に固定され、以後はstatusのみ変化する。
/// 予約は削除されない（削除操作は存在しない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    // 識別子
    pub booking_id: BookingId,

    // 他の集約への参照（IDのみ）
    pub item_id: ItemId,
    pub booker_id: UserId,

    // 予約期間（作成後は不変）
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,

    pub status: BookingStatus,
}

/// ID未採番の予約
///
/// IDはストアが採番するため、ドメイン層は採番前のドラフトを返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub item_id: ItemId,
    pub booker_id: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
}

/// 純粋関数：予約を起案する
///
/// ビジネスルール：
/// - 終了時刻は開始時刻より厳密に後であること
/// - 開始時刻は作成時点で過去でないこと
/// - 初期ステータスは`Waiting`
///
/// 副作用なし。ID未採番のドラフトを返す。
pub fn plan_booking(
    item_id: ItemId,
    booker_id: UserId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<BookingDraft, BookingPeriodError> {
    if end <= start {
        return Err(BookingPeriodError::EndNotAfterStart);
    }
    if start < now {
        return Err(BookingPeriodError::StartInPast);
    }

    Ok(BookingDraft {
        item_id,
        booker_id,
        start,
        end,
        status: BookingStatus::Waiting,
    })
}

/// 純粋関数：予約を判断する（承認／却下）
///
/// ビジネスルール：
/// - `approved = true`なら`Approved`、falseなら`Rejected`
/// - 判断済みの予約への再判断を防ぐガードはなく、常に上書きされる
/// - `(start, end)`と参照は変化しない
///
/// 副作用なし。新しいBookingを返す。
pub fn decide_booking(booking: Booking, approved: bool) -> Booking {
    let status = if approved {
        BookingStatus::Approved
    } else {
        BookingStatus::Rejected
    };

    Booking { status, ..booking }
}

// ============================================================================
// 一覧取得の状態フィルタ
// ============================================================================

/// 一覧取得の状態フィルタ
///
/// クライアントは7つのリテラルトークンのいずれかを送る。
/// それ以外のトークンはクライアントエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl StateFilter {
    /// 予約がこのフィルタに合致するか判定する
    ///
    /// 1回の一覧取得の間は同じ`now`スナップショットで評価すること。
    pub fn matches(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        match self {
            StateFilter::All => true,
            // CURRENTは期間に「現在」が含まれるかではなく、承認ステータスで判定する
            StateFilter::Current => booking.status == BookingStatus::Approved,
            StateFilter::Past => booking.end < now,
            StateFilter::Future => booking.start > now,
            StateFilter::Waiting => booking.status == BookingStatus::Waiting,
            StateFilter::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}

impl std::str::FromStr for StateFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(StateFilter::All),
            "CURRENT" => Ok(StateFilter::Current),
            "PAST" => Ok(StateFilter::Past),
            "FUTURE" => Ok(StateFilter::Future),
            "WAITING" => Ok(StateFilter::Waiting),
            "REJECTED" => Ok(StateFilter::Rejected),
            _ => Err(format!("Invalid state filter: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking_with(
        status: BookingStatus,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Booking {
        Booking {
            booking_id: BookingId::from_i64(1),
            item_id: ItemId::from_i64(10),
            booker_id: UserId::from_i64(20),
            start,
            end,
            status,
        }
    }

    // TDD: plan_booking() のテスト
    #[test]
    fn test_plan_booking_creates_waiting_draft() {
        let now = Utc::now();
        let start = now + Duration::days(1);
        let end = now + Duration::days(2);

        let result = plan_booking(
            ItemId::from_i64(10),
            UserId::from_i64(20),
            start,
            end,
            now,
        );
        assert!(result.is_ok());

        let draft = result.unwrap();
        assert_eq!(draft.status, BookingStatus::Waiting);
        assert_eq!(draft.item_id, ItemId::from_i64(10));
        assert_eq!(draft.booker_id, UserId::from_i64(20));
        assert_eq!(draft.start, start);
        assert_eq!(draft.end, end);
    }

    #[test]
    fn test_plan_booking_fails_when_end_equals_start() {
        let now = Utc::now();
        let start = now + Duration::days(1);

        let result = plan_booking(
            ItemId::from_i64(10),
            UserId::from_i64(20),
            start,
            start,
            now,
        );
        assert_eq!(result.unwrap_err(), BookingPeriodError::EndNotAfterStart);
    }

    #[test]
    fn test_plan_booking_fails_when_end_before_start() {
        let now = Utc::now();

        let result = plan_booking(
            ItemId::from_i64(10),
            UserId::from_i64(20),
            now + Duration::days(2),
            now + Duration::days(1),
            now,
        );
        assert_eq!(result.unwrap_err(), BookingPeriodError::EndNotAfterStart);
    }

    #[test]
    fn test_plan_booking_fails_when_start_in_past() {
        let now = Utc::now();

        let result = plan_booking(
            ItemId::from_i64(10),
            UserId::from_i64(20),
            now - Duration::hours(1),
            now + Duration::days(1),
            now,
        );
        assert_eq!(result.unwrap_err(), BookingPeriodError::StartInPast);
    }

    #[test]
    fn test_plan_booking_accepts_start_equal_to_now() {
        let now = Utc::now();

        let result = plan_booking(
            ItemId::from_i64(10),
            UserId::from_i64(20),
            now,
            now + Duration::days(1),
            now,
        );
        assert!(result.is_ok());
    }

    // TDD: decide_booking() のテスト
    #[test]
    fn test_decide_booking_approves() {
        let now = Utc::now();
        let booking = booking_with(
            BookingStatus::Waiting,
            now + Duration::days(1),
            now + Duration::days(2),
        );

        let decided = decide_booking(booking.clone(), true);

        assert_eq!(decided.status, BookingStatus::Approved);
        // 期間と参照は不変
        assert_eq!(decided.booking_id, booking.booking_id);
        assert_eq!(decided.start, booking.start);
        assert_eq!(decided.end, booking.end);
        assert_eq!(decided.item_id, booking.item_id);
        assert_eq!(decided.booker_id, booking.booker_id);
    }

    #[test]
    fn test_decide_booking_rejects() {
        let now = Utc::now();
        let booking = booking_with(
            BookingStatus::Waiting,
            now + Duration::days(1),
            now + Duration::days(2),
        );

        let decided = decide_booking(booking, false);
        assert_eq!(decided.status, BookingStatus::Rejected);
    }

    #[test]
    fn test_decide_booking_overwrites_prior_decision() {
        let now = Utc::now();
        let booking = booking_with(
            BookingStatus::Waiting,
            now + Duration::days(1),
            now + Duration::days(2),
        );

        // 承認 → 却下 → 承認。ガードはなく、最後の判断が残る（現行の挙動）
        let decided = decide_booking(booking, true);
        assert_eq!(decided.status, BookingStatus::Approved);

        let decided = decide_booking(decided, false);
        assert_eq!(decided.status, BookingStatus::Rejected);

        let decided = decide_booking(decided, true);
        assert_eq!(decided.status, BookingStatus::Approved);
    }

    #[test]
    fn test_decide_booking_same_decision_is_idempotent() {
        let now = Utc::now();
        let booking = booking_with(
            BookingStatus::Waiting,
            now + Duration::days(1),
            now + Duration::days(2),
        );

        let once = decide_booking(booking, true);
        let twice = decide_booking(once.clone(), true);
        assert_eq!(once, twice);
    }

    // TDD: BookingStatus のテスト
    #[test]
    fn test_booking_status_round_trip() {
        for status in [
            BookingStatus::Waiting,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Canceled,
        ] {
            let parsed: BookingStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_booking_status_rejects_unknown_token() {
        assert!("approved".parse::<BookingStatus>().is_err());
        assert!("UNKNOWN".parse::<BookingStatus>().is_err());
    }

    // TDD: StateFilter のテスト
    #[test]
    fn test_state_filter_parses_all_tokens() {
        assert_eq!("ALL".parse::<StateFilter>().unwrap(), StateFilter::All);
        assert_eq!(
            "CURRENT".parse::<StateFilter>().unwrap(),
            StateFilter::Current
        );
        assert_eq!("PAST".parse::<StateFilter>().unwrap(), StateFilter::Past);
        assert_eq!(
            "FUTURE".parse::<StateFilter>().unwrap(),
            StateFilter::Future
        );
        assert_eq!(
            "WAITING".parse::<StateFilter>().unwrap(),
            StateFilter::Waiting
        );
        assert_eq!(
            "REJECTED".parse::<StateFilter>().unwrap(),
            StateFilter::Rejected
        );
    }

    #[test]
    fn test_state_filter_rejects_unknown_token() {
        assert!("CANCELED".parse::<StateFilter>().is_err());
        assert!("all".parse::<StateFilter>().is_err());
        assert!("".parse::<StateFilter>().is_err());
    }

    #[test]
    fn test_state_filter_all_matches_everything() {
        let now = Utc::now();
        let booking = booking_with(
            BookingStatus::Rejected,
            now - Duration::days(2),
            now - Duration::days(1),
        );
        assert!(StateFilter::All.matches(&booking, now));
    }

    #[test]
    fn test_state_filter_current_matches_by_approval_status() {
        let now = Utc::now();

        // 期間が過去でも、承認済みならCURRENTに合致する
        let past_approved = booking_with(
            BookingStatus::Approved,
            now - Duration::days(2),
            now - Duration::days(1),
        );
        assert!(StateFilter::Current.matches(&past_approved, now));

        // 期間に「現在」が含まれても、承認待ちならCURRENTに合致しない
        let ongoing_waiting = booking_with(
            BookingStatus::Waiting,
            now - Duration::hours(1),
            now + Duration::hours(1),
        );
        assert!(!StateFilter::Current.matches(&ongoing_waiting, now));
    }

    #[test]
    fn test_state_filter_past_matches_end_strictly_before_now() {
        let now = Utc::now();

        let ended = booking_with(
            BookingStatus::Waiting,
            now - Duration::days(2),
            now - Duration::seconds(1),
        );
        assert!(StateFilter::Past.matches(&ended, now));

        let ongoing = booking_with(
            BookingStatus::Waiting,
            now - Duration::days(1),
            now + Duration::days(1),
        );
        assert!(!StateFilter::Past.matches(&ongoing, now));

        // end == now は過去ではない（厳密比較）
        let ending_now = booking_with(BookingStatus::Waiting, now - Duration::days(1), now);
        assert!(!StateFilter::Past.matches(&ending_now, now));
    }

    #[test]
    fn test_state_filter_future_matches_start_strictly_after_now() {
        let now = Utc::now();

        let upcoming = booking_with(
            BookingStatus::Waiting,
            now + Duration::seconds(1),
            now + Duration::days(1),
        );
        assert!(StateFilter::Future.matches(&upcoming, now));

        // start == now は未来ではない（厳密比較）
        let starting_now = booking_with(BookingStatus::Waiting, now, now + Duration::days(1));
        assert!(!StateFilter::Future.matches(&starting_now, now));
    }

    #[test]
    fn test_state_filter_status_filters_match_exactly() {
        let now = Utc::now();
        let start = now + Duration::days(1);
        let end = now + Duration::days(2);

        let waiting = booking_with(BookingStatus::Waiting, start, end);
        let approved = booking_with(BookingStatus::Approved, start, end);
        let rejected = booking_with(BookingStatus::Rejected, start, end);

        assert!(StateFilter::Waiting.matches(&waiting, now));
        assert!(!StateFilter::Waiting.matches(&approved, now));

        assert!(StateFilter::Rejected.matches(&rejected, now));
        assert!(!StateFilter::Rejected.matches(&waiting, now));
    }
}
