use crate::ports::{BookingStore, CommentStore, ItemCatalog, RequestBoard, UserDirectory};
use std::sync::Arc;

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// このパターンにより：
/// - すべての依存が明示的
/// - データと振る舞いの分離
/// - バックエンド（インメモリ／PostgreSQL）の差し替えが容易
/// - テストが明確
#[derive(Clone)]
pub struct ServiceDependencies {
    pub user_directory: Arc<dyn UserDirectory>,
    pub item_catalog: Arc<dyn ItemCatalog>,
    pub booking_store: Arc<dyn BookingStore>,
    pub comment_store: Arc<dyn CommentStore>,
    pub request_board: Arc<dyn RequestBoard>,
}
