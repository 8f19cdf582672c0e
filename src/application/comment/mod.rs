mod comment_service;
mod errors;

pub use comment_service::{CommentView, add_comment};
pub use errors::{CommentApplicationError, Result};
