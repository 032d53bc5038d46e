//! HTTP route handlers.

pub mod movies;

use std::sync::Arc;

use axum::Router;

use crate::server::AppState;

/// Read-only registry routes.
pub fn api_routes() -> Router<Arc<AppState>> {
    movies::routes()
}
