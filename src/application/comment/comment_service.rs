use crate::application::ServiceDependencies;
use crate::domain::{self, commands::AddComment, value_objects::CommentText};
use crate::domain::comment::Comment;
use crate::domain::errors::CommentAccessError;
use crate::ports::Item;
use chrono::Utc;

use super::errors::{CommentApplicationError, Result};

/// コメントビュー
///
/// コメント本体に、著者の表示名と物品参照を添えて返す。
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub item: Item,
    pub author_name: String,
}

fn access_denied(err: CommentAccessError) -> CommentApplicationError {
    let reason = match err {
        CommentAccessError::OwnItem => "owners cannot comment on their own items",
        CommentAccessError::NoBooking => "no booking history for this item",
        CommentAccessError::RentalNotFinished => "rental period has not finished",
    };
    CommentApplicationError::CommentAccessDenied(reason.to_string())
}

/// コメントを追加する
///
/// 前提条件（この順で評価）：
/// 1. 本文が空白のみでないこと（ゲート評価の前に排除）
/// 2. 物品が存在すること
/// 3. 著者が物品の所有者でないこと
/// 4. `(item, author)`の予約が存在し、終了時刻が過去であること
///
/// 合致予約は`Approved`に限定しない（現行の挙動）。
/// 1回の呼び出しで1件のコメント作成のみを判定する。
/// 同一著者・同一物品への再コメントを防ぐ一意性制約はない。
///
/// # 戻り値
/// 作成されたコメントのビュー（著者の表示名を含む）
pub async fn add_comment(
    deps: &ServiceDependencies,
    cmd: AddComment,
) -> Result<CommentView> {
    // 1. 本文の検証
    let text =
        CommentText::new(cmd.text).map_err(|_| CommentApplicationError::BlankText)?;

    // 2. 物品の存在確認
    let item = deps
        .item_catalog
        .find_by_id(cmd.item_id)
        .await
        .map_err(CommentApplicationError::ItemCatalogError)?
        .ok_or(CommentApplicationError::ItemNotFound)?;

    // 3. `(item, author)`の予約を1件取得
    let booking = deps
        .booking_store
        .find_by_item_and_booker(cmd.item_id, cmd.author_id)
        .await
        .map_err(CommentApplicationError::BookingStoreError)?;

    // 4. ドメイン層の純粋関数で資格を判定
    let now = Utc::now();
    domain::comment::check_comment_access(
        item.owner_id,
        cmd.author_id,
        booking.as_ref(),
        now,
    )
    .map_err(access_denied)?;

    // 5. 著者の解決（表示名のため）
    let author = deps
        .user_directory
        .find_by_id(cmd.author_id)
        .await
        .map_err(CommentApplicationError::UserDirectoryError)?
        .ok_or(CommentApplicationError::AuthorNotFound)?;

    // 6. 永続化
    let draft = domain::comment::compose_comment(cmd.item_id, cmd.author_id, text, now);
    let comment = deps
        .comment_store
        .create(draft)
        .await
        .map_err(CommentApplicationError::CommentStoreError)?;

    Ok(CommentView {
        comment,
        item,
        author_name: author.name,
    })
}
