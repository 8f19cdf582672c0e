/// 予約期間のエラー
///
/// `(start, end)`は作成時にのみ検証される。作成後の再検証は行わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingPeriodError {
    /// 終了時刻が開始時刻より後でない
    EndNotAfterStart,
    /// 開始時刻が過去
    StartInPast,
}

/// コメント資格のエラー
///
/// いずれの場合もクライアントには「コメント不可」として通知される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAccessError {
    /// 所有者は自分の物品にコメントできない
    OwnItem,
    /// 対象物品の予約履歴がない
    NoBooking,
    /// レンタル期間がまだ終了していない
    RentalNotFinished,
}
