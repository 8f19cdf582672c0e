mod errors;
mod user_service;

pub use errors::{Result, UserApplicationError};
pub use user_service::{create_user, delete_user, get_user, list_users, update_user};
