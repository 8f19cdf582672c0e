mod errors;
mod request_service;

pub use errors::{RequestApplicationError, Result};
pub use request_service::{
    RequestWithAnswers, create_request, get_request, list_all_requests,
    list_requests_by_requestor,
};
