//! HTTP routes
//!
//! - [`home`] - landing page
//! - [`cafes`] - list, add, edit and delete cafes
//! - [`health`] - health check

pub mod cafes;
pub mod health;
pub mod home;

use axum::{Router, http::StatusCode};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::AppError;

/// Build the application router with its middleware stack
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    Router::new()
        .merge(home::router())
        .merge(cafes::router())
        .merge(health::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
