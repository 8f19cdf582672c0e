use crate::application::ServiceDependencies;
use crate::domain::commands::CreateRequest;
use crate::domain::value_objects::{RequestId, UserId};
use crate::ports::{Item, ItemRequest, RequestDraft};
use chrono::Utc;

use super::errors::{RequestApplicationError, Result};

/// 回答つきリクエストビュー
///
/// リクエスト本体に、回答として出品された物品の一覧を添えて返す。
#[derive(Debug, Clone)]
pub struct RequestWithAnswers {
    pub request: ItemRequest,
    pub answers: Vec<Item>,
}

async fn resolve_answers(
    deps: &ServiceDependencies,
    request: ItemRequest,
) -> Result<RequestWithAnswers> {
    let answers = deps
        .item_catalog
        .find_by_request_id(request.request_id)
        .await
        .map_err(RequestApplicationError::ItemCatalogError)?;

    Ok(RequestWithAnswers { request, answers })
}

/// 物品リクエストを投稿する
///
/// ビジネスルール：投稿者が存在すること。
pub async fn create_request(
    deps: &ServiceDependencies,
    cmd: CreateRequest,
) -> Result<ItemRequest> {
    deps.user_directory
        .find_by_id(cmd.requestor_id)
        .await
        .map_err(RequestApplicationError::UserDirectoryError)?
        .ok_or(RequestApplicationError::RequestorNotFound)?;

    let draft = RequestDraft {
        description: cmd.description,
        requestor_id: cmd.requestor_id,
        created: Utc::now(),
    };

    deps.request_board
        .create(draft)
        .await
        .map_err(RequestApplicationError::RequestBoardError)
}

/// 投稿者の全リクエストを、それぞれの回答一覧つきで取得する
pub async fn list_requests_by_requestor(
    deps: &ServiceDependencies,
    requestor_id: UserId,
) -> Result<Vec<RequestWithAnswers>> {
    let requests = deps
        .request_board
        .find_by_requestor_id(requestor_id)
        .await
        .map_err(RequestApplicationError::RequestBoardError)?;

    let mut views = Vec::new();
    for request in requests {
        views.push(resolve_answers(deps, request).await?);
    }

    Ok(views)
}

/// 全利用者のリクエスト一覧を取得する（新しい順）
pub async fn list_all_requests(deps: &ServiceDependencies) -> Result<Vec<ItemRequest>> {
    deps.request_board
        .find_all()
        .await
        .map_err(RequestApplicationError::RequestBoardError)
}

/// リクエストをIDで、回答一覧つきで取得する
pub async fn get_request(
    deps: &ServiceDependencies,
    request_id: RequestId,
) -> Result<RequestWithAnswers> {
    let request = deps
        .request_board
        .find_by_id(request_id)
        .await
        .map_err(RequestApplicationError::RequestBoardError)?
        .ok_or(RequestApplicationError::RequestNotFound)?;

    resolve_answers(deps, request).await
}
