use crate::application::ServiceDependencies;
use crate::domain::commands::{CreateUser, UpdateUser};
use crate::domain::value_objects::UserId;
use crate::ports::{DuplicatedEmail, User, UserDraft};

use super::errors::{Result, UserApplicationError};

/// ストアエラーからメールアドレス競合を識別するヘルパー関数
///
/// アダプタは一意性違反を`DuplicatedEmail`として報告する。
/// それ以外はインフラ障害として扱う。
fn map_directory_error(e: Box<dyn std::error::Error + Send + Sync>) -> UserApplicationError {
    if e.downcast_ref::<DuplicatedEmail>().is_some() {
        UserApplicationError::DuplicatedEmail
    } else {
        UserApplicationError::UserDirectoryError(e)
    }
}

/// 利用者を作成する
///
/// メールアドレスは全利用者を通じて一意。重複は競合エラー。
pub async fn create_user(deps: &ServiceDependencies, cmd: CreateUser) -> Result<User> {
    let draft = UserDraft {
        name: cmd.name,
        email: cmd.email,
    };

    deps.user_directory
        .create(draft)
        .await
        .map_err(map_directory_error)
}

/// 利用者をIDで取得する
pub async fn get_user(deps: &ServiceDependencies, user_id: UserId) -> Result<User> {
    deps.user_directory
        .find_by_id(user_id)
        .await
        .map_err(UserApplicationError::UserDirectoryError)?
        .ok_or(UserApplicationError::UserNotFound)
}

/// 全利用者を取得する
pub async fn list_users(deps: &ServiceDependencies) -> Result<Vec<User>> {
    deps.user_directory
        .find_all()
        .await
        .map_err(UserApplicationError::UserDirectoryError)
}

/// 利用者を部分更新する
///
/// 指定されたフィールドのみ上書きする。メールアドレス重複は競合エラー。
pub async fn update_user(deps: &ServiceDependencies, cmd: UpdateUser) -> Result<User> {
    let current = get_user(deps, cmd.user_id).await?;

    let updated = User {
        user_id: current.user_id,
        name: cmd.name.unwrap_or(current.name),
        email: cmd.email.unwrap_or(current.email),
    };

    deps.user_directory
        .save(updated)
        .await
        .map_err(map_directory_error)
}

/// 利用者を削除する
pub async fn delete_user(deps: &ServiceDependencies, user_id: UserId) -> Result<()> {
    // 存在しない利用者の削除はNotFound
    get_user(deps, user_id).await?;

    deps.user_directory
        .delete(user_id)
        .await
        .map_err(UserApplicationError::UserDirectoryError)
}
