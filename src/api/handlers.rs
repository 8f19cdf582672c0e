use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::{ServiceDependencies, booking, comment, item, request, user};
use crate::domain::value_objects::{BookingId, ItemId, RequestId, UserId};

use super::{
    error::ApiError,
    extractor::SharerId,
    types::{
        BookingResponse, CommentResponse, DecideQuery, ItemResponse, NewBookingRequest,
        NewCommentRequest, NewItemRequest, NewRequest, NewUserRequest, RequestResponse,
        RequestWithAnswersResponse, SearchQuery, StateQuery, UpdateItemRequest,
        UpdateUserRequest, UserResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// 利用者
// ============================================================================

/// POST /users - 利用者を作成
///
/// メールアドレスは全利用者を通じて一意。重複は409。
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let created = user::create_user(&state.service_deps, req.to_command()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

/// GET /users - 全利用者を取得
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = user::list_users(&state.service_deps).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/:id - 利用者をIDで取得
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let found = user::get_user(&state.service_deps, UserId::from_i64(user_id)).await?;
    Ok(Json(UserResponse::from(found)))
}

/// PATCH /users/:id - 利用者を部分更新
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let updated = user::update_user(
        &state.service_deps,
        req.to_command(UserId::from_i64(user_id)),
    )
    .await?;
    Ok(Json(UserResponse::from(updated)))
}

/// DELETE /users/:id - 利用者を削除
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    user::delete_user(&state.service_deps, UserId::from_i64(user_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// 物品
// ============================================================================

/// POST /items - 物品を出品
///
/// 操作ユーザーが所有者となる。`requestId`を指定すると
/// リクエストへの回答として扱われる。
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    SharerId(owner_id): SharerId,
    Json(req): Json<NewItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let created = item::create_item(&state.service_deps, req.to_command(owner_id)).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::from(created))))
}

/// PATCH /items/:id - 物品を部分更新
///
/// 変更できるのは所有者のみ。
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    SharerId(acting_user_id): SharerId,
    Path(item_id): Path<i64>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let updated = item::update_item(
        &state.service_deps,
        req.to_command(acting_user_id, ItemId::from_i64(item_id)),
    )
    .await?;
    Ok(Json(ItemResponse::from(updated)))
}

/// GET /items/:id - 物品をIDで取得
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let found = item::get_item(&state.service_deps, ItemId::from_i64(item_id)).await?;
    Ok(Json(ItemResponse::from(found)))
}

/// GET /items - 操作ユーザーの物品一覧を取得
pub async fn list_own_items(
    State(state): State<Arc<AppState>>,
    SharerId(owner_id): SharerId,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = item::list_items_by_owner(&state.service_deps, owner_id).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /items/search?text= - 物品をテキスト検索
///
/// 空文字の検索語は空リストを返す。
pub async fn search_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = item::search_items(&state.service_deps, &query.text).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items/:id/comment - コメントを追加
///
/// 資格ルール：
/// - 所有者は自分の物品にコメントできない
/// - 対象物品の予約履歴が必要
/// - 予約の終了時刻が過去であること（レンタル期間の経過）
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    SharerId(author_id): SharerId,
    Path(item_id): Path<i64>,
    Json(req): Json<NewCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let view = comment::add_comment(
        &state.service_deps,
        req.to_command(ItemId::from_i64(item_id), author_id),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from(view))))
}

// ============================================================================
// 予約
// ============================================================================

/// POST /bookings - 予約を作成
///
/// 操作ユーザーが予約者となる。
///
/// 強制されるビジネスルール:
/// - 予約者・物品が存在すること
/// - 物品が貸出可能であること
/// - 期間が正しいこと（終了は開始より後、開始は過去でない）
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    SharerId(booker_id): SharerId,
    Json(req): Json<NewBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let view =
        booking::create_booking(&state.service_deps, req.to_command(booker_id)).await?;
    Ok((StatusCode::CREATED, Json(BookingResponse::from(view))))
}

/// PATCH /bookings/:id?approved= - 予約を判断（承認／却下）
///
/// 判断できるのは予約対象物品の所有者のみ。予約者自身にも権限はない。
pub async fn decide_booking(
    State(state): State<Arc<AppState>>,
    SharerId(acting_user_id): SharerId,
    Path(booking_id): Path<i64>,
    Query(query): Query<DecideQuery>,
) -> Result<Json<BookingResponse>, ApiError> {
    let cmd = crate::domain::commands::DecideBooking {
        acting_user_id,
        booking_id: BookingId::from_i64(booking_id),
        approved: query.approved,
    };

    let view = booking::decide_booking(&state.service_deps, cmd).await?;
    Ok(Json(BookingResponse::from(view)))
}

/// GET /bookings/:id - 予約をIDで取得
///
/// 閲覧できるのは物品の所有者または予約者のみ。
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    SharerId(acting_user_id): SharerId,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, ApiError> {
    let view = booking::get_booking(
        &state.service_deps,
        acting_user_id,
        BookingId::from_i64(booking_id),
    )
    .await?;
    Ok(Json(BookingResponse::from(view)))
}

/// GET /bookings?state= - 操作ユーザーの予約一覧を取得
///
/// `state`は`ALL`/`CURRENT`/`PAST`/`FUTURE`/`WAITING`/`REJECTED`のいずれか。
/// 省略時は`ALL`。それ以外のトークンは400。
pub async fn list_bookings_by_booker(
    State(state): State<Arc<AppState>>,
    SharerId(booker_id): SharerId,
    Query(query): Query<StateQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let views = booking::list_bookings_by_booker(
        &state.service_deps,
        booker_id,
        query.state_or_default(),
    )
    .await?;
    Ok(Json(views.into_iter().map(BookingResponse::from).collect()))
}

/// GET /bookings/owner?state= - 操作ユーザーの物品に対する予約一覧を取得
pub async fn list_bookings_by_owner(
    State(state): State<Arc<AppState>>,
    SharerId(owner_id): SharerId,
    Query(query): Query<StateQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let views = booking::list_bookings_by_owner(
        &state.service_deps,
        owner_id,
        query.state_or_default(),
    )
    .await?;
    Ok(Json(views.into_iter().map(BookingResponse::from).collect()))
}

// ============================================================================
// 物品リクエスト
// ============================================================================

/// POST /requests - 物品リクエストを投稿
pub async fn create_request(
    State(state): State<Arc<AppState>>,
    SharerId(requestor_id): SharerId,
    Json(req): Json<NewRequest>,
) -> Result<(StatusCode, Json<RequestResponse>), ApiError> {
    let created =
        request::create_request(&state.service_deps, req.to_command(requestor_id)).await?;
    Ok((StatusCode::CREATED, Json(RequestResponse::from(created))))
}

/// GET /requests - 操作ユーザーのリクエスト一覧を回答つきで取得
pub async fn list_own_requests(
    State(state): State<Arc<AppState>>,
    SharerId(requestor_id): SharerId,
) -> Result<Json<Vec<RequestWithAnswersResponse>>, ApiError> {
    let views =
        request::list_requests_by_requestor(&state.service_deps, requestor_id).await?;
    Ok(Json(
        views
            .into_iter()
            .map(RequestWithAnswersResponse::from)
            .collect(),
    ))
}

/// GET /requests/all - 全リクエスト一覧を取得（新しい順）
pub async fn list_all_requests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RequestResponse>>, ApiError> {
    let requests = request::list_all_requests(&state.service_deps).await?;
    Ok(Json(
        requests.into_iter().map(RequestResponse::from).collect(),
    ))
}

/// GET /requests/:id - リクエストをIDで回答つきで取得
pub async fn get_request(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<i64>,
) -> Result<Json<RequestWithAnswersResponse>, ApiError> {
    let view =
        request::get_request(&state.service_deps, RequestId::from_i64(request_id)).await?;
    Ok(Json(RequestWithAnswersResponse::from(view)))
}
