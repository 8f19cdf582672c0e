use serde::{Deserialize, Serialize};

/// 利用者ID - 利用者管理コンテキストへの参照
///
/// IDはストアが採番する単調増加のi64。欠番は再利用されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 物品ID - カタログ管理コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(i64);

impl ItemId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 予約ID - 予約管理コンテキストの集約ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(i64);

impl BookingId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// コメントID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(i64);

impl CommentId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// リクエストID - 物品リクエスト掲示板への参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(i64);

impl RequestId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// コメント本文のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTextError {
    /// 本文が空白のみ
    Blank,
}

/// コメント本文
///
/// 不変条件：空白のみの本文は作成できない。
/// 型システムでこの制約を強制し、ゲート評価の前に不正な入力を排除する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentText(String);

impl CommentText {
    /// 本文を検証して作成する
    ///
    /// # エラー
    /// トリム後に空文字となる場合は`CommentTextError::Blank`を返す
    pub fn new(text: impl Into<String>) -> Result<Self, CommentTextError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CommentTextError::Blank);
        }
        Ok(Self(text))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ID value objects のテスト
    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::from_i64(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_ids_compare_by_value() {
        assert_eq!(BookingId::from_i64(1), BookingId::from_i64(1));
        assert_ne!(BookingId::from_i64(1), BookingId::from_i64(2));
        assert!(BookingId::from_i64(1) < BookingId::from_i64(2));
    }

    // TDD: CommentText のテスト
    #[test]
    fn test_comment_text_accepts_non_blank() {
        let text = CommentText::new("とても役に立ちました");
        assert!(text.is_ok());
        assert_eq!(text.unwrap().value(), "とても役に立ちました");
    }

    #[test]
    fn test_comment_text_rejects_empty() {
        let text = CommentText::new("");
        assert_eq!(text.unwrap_err(), CommentTextError::Blank);
    }

    #[test]
    fn test_comment_text_rejects_whitespace_only() {
        let text = CommentText::new("   \t\n");
        assert_eq!(text.unwrap_err(), CommentTextError::Blank);
    }

    #[test]
    fn test_comment_text_preserves_original_form() {
        // トリムは検証のみで、保存される本文はそのまま
        let text = CommentText::new(" great item ").unwrap();
        assert_eq!(text.value(), " great item ");
    }
}
