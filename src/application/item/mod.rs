mod errors;
mod item_service;

pub use errors::{ItemApplicationError, Result};
pub use item_service::{create_item, get_item, list_items_by_owner, search_items, update_item};
