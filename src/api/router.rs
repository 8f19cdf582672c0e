use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_comment, create_booking, create_item, create_request, create_user,
    decide_booking, delete_user, get_booking, get_item, get_request, get_user,
    list_all_requests, list_bookings_by_booker, list_bookings_by_owner, list_own_items,
    list_own_requests, list_users, search_items, update_item, update_user,
};

/// Creates the API router with all endpoints
///
/// Booking lifecycle (the core):
/// - POST /bookings - Create a booking
/// - PATCH /bookings/:id?approved= - Approve or reject (item owner only)
/// - GET /bookings/:id - Get a booking (owner or booker only)
/// - GET /bookings?state= / GET /bookings/owner?state= - Filtered listings
///
/// Comment eligibility gate (the core):
/// - POST /items/:id/comment - Add a comment after a finished rental
///
/// Plumbing: user CRUD, item CRUD + search, item request board.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Users
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
        // Items and comments
        .route("/items", post(create_item).get(list_own_items))
        .route("/items/search", get(search_items))
        .route("/items/:id", get(get_item).patch(update_item))
        .route("/items/:id/comment", post(add_comment))
        // Bookings
        .route(
            "/bookings",
            post(create_booking).get(list_bookings_by_booker),
        )
        .route("/bookings/owner", get(list_bookings_by_owner))
        .route("/bookings/:id", get(get_booking).patch(decide_booking))
        // Item requests
        .route("/requests", post(create_request).get(list_own_requests))
        .route("/requests/all", get(list_all_requests))
        .route("/requests/:id", get(get_request))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
