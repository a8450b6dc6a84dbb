//! Home page

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;
use crate::views;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

/// GET / - landing page, no data access
async fn index() -> Html<String> {
    views::home::page()
}
