use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Booking, CommentAccessError, CommentId, CommentText, ItemId, UserId,
};

/// Comment集約 - 過去のレンタルに紐づく物品へのフィードバック
///
/// 作成後は不変。削除されない。
/// 同一著者が同一物品に複数のコメントを残すことを妨げる一意性制約はない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub item_id: ItemId,
    pub author_id: UserId,
    pub text: CommentText,
    pub created: DateTime<Utc>,
}

/// ID未採番のコメント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub item_id: ItemId,
    pub author_id: UserId,
    pub text: CommentText,
    pub created: DateTime<Utc>,
}

/// 純粋関数：コメント資格を判定する
///
/// 評価順序：
/// 1. 著者が物品の所有者なら拒否（予約履歴の有無によらない）
/// 2. `(item, author)`に合致する予約がなければ拒否
/// 3. 予約の終了時刻が現在より前でなければ拒否（レンタル期間の経過が必須）
/// 4. それ以外は許可
///
/// 合致予約のステータスは問わない。`Waiting`や`Rejected`の予約でも
/// 終了時刻が過去であればゲートを満たす（現行の挙動）。
pub fn check_comment_access(
    owner_id: UserId,
    author_id: UserId,
    booking: Option<&Booking>,
    now: DateTime<Utc>,
) -> Result<(), CommentAccessError> {
    if author_id == owner_id {
        return Err(CommentAccessError::OwnItem);
    }

    let booking = booking.ok_or(CommentAccessError::NoBooking)?;

    if booking.end >= now {
        return Err(CommentAccessError::RentalNotFinished);
    }

    Ok(())
}

/// 純粋関数：コメントを起案する
///
/// 資格判定を通過した後に呼ばれる。副作用なし。ID未採番のドラフトを返す。
pub fn compose_comment(
    item_id: ItemId,
    author_id: UserId,
    text: CommentText,
    now: DateTime<Utc>,
) -> CommentDraft {
    CommentDraft {
        item_id,
        author_id,
        text,
        created: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingId, BookingStatus};
    use chrono::Duration;

    fn booking(status: BookingStatus, end: DateTime<Utc>) -> Booking {
        Booking {
            booking_id: BookingId::from_i64(1),
            item_id: ItemId::from_i64(10),
            booker_id: UserId::from_i64(20),
            start: end - Duration::days(1),
            end,
            status,
        }
    }

    // TDD: check_comment_access() のテスト
    #[test]
    fn test_owner_is_denied_even_with_finished_booking() {
        let now = Utc::now();
        let owner = UserId::from_i64(1);
        let finished = booking(BookingStatus::Approved, now - Duration::days(1));

        // 所有者チェックが最優先で評価される
        let result = check_comment_access(owner, owner, Some(&finished), now);
        assert_eq!(result.unwrap_err(), CommentAccessError::OwnItem);
    }

    #[test]
    fn test_denied_without_booking() {
        let now = Utc::now();

        let result =
            check_comment_access(UserId::from_i64(1), UserId::from_i64(2), None, now);
        assert_eq!(result.unwrap_err(), CommentAccessError::NoBooking);
    }

    #[test]
    fn test_denied_while_rental_not_finished() {
        let now = Utc::now();
        let ongoing = booking(BookingStatus::Approved, now + Duration::days(1));

        let result = check_comment_access(
            UserId::from_i64(1),
            UserId::from_i64(2),
            Some(&ongoing),
            now,
        );
        assert_eq!(result.unwrap_err(), CommentAccessError::RentalNotFinished);
    }

    #[test]
    fn test_denied_when_end_equals_now() {
        let now = Utc::now();
        let ending_now = booking(BookingStatus::Approved, now);

        // end == now はまだ「過去」ではない
        let result = check_comment_access(
            UserId::from_i64(1),
            UserId::from_i64(2),
            Some(&ending_now),
            now,
        );
        assert_eq!(result.unwrap_err(), CommentAccessError::RentalNotFinished);
    }

    #[test]
    fn test_permitted_after_rental_finished() {
        let now = Utc::now();
        let finished = booking(BookingStatus::Approved, now - Duration::seconds(1));

        let result = check_comment_access(
            UserId::from_i64(1),
            UserId::from_i64(2),
            Some(&finished),
            now,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_booking_status_does_not_matter() {
        let now = Utc::now();

        // 承認済みに限定しない。終了済みであればWAITING/REJECTEDでも許可される
        for status in [
            BookingStatus::Waiting,
            BookingStatus::Approved,
            BookingStatus::Rejected,
        ] {
            let finished = booking(status, now - Duration::days(1));
            let result = check_comment_access(
                UserId::from_i64(1),
                UserId::from_i64(2),
                Some(&finished),
                now,
            );
            assert!(result.is_ok(), "status {:?} should pass the gate", status);
        }
    }

    // TDD: compose_comment() のテスト
    #[test]
    fn test_compose_comment_carries_inputs() {
        let now = Utc::now();
        let text = CommentText::new("助かりました").unwrap();

        let draft = compose_comment(
            ItemId::from_i64(10),
            UserId::from_i64(2),
            text.clone(),
            now,
        );

        assert_eq!(draft.item_id, ItemId::from_i64(10));
        assert_eq!(draft.author_id, UserId::from_i64(2));
        assert_eq!(draft.text, text);
        assert_eq!(draft.created, now);
    }
}
