//! Cafe routes
//!
//! | Path | Method | Effect |
//! |------|--------|--------|
//! | /cafes | GET | list all cafes |
//! | /add | GET, POST | empty form / create, then redirect to /cafes |
//! | /edit/{id} | GET, POST | pre-filled form / overwrite, then redirect to /cafes |
//! | /delete | GET | list with delete buttons |
//! | /delete/{id} | POST, GET | delete, then redirect to /delete |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/cafes", get(handler::list))
        .route("/add", get(handler::add_page).post(handler::add_submit))
        .route(
            "/edit/{id}",
            get(handler::edit_page).post(handler::edit_submit),
        )
        .route("/delete", get(handler::delete_page))
        .route(
            "/delete/{id}",
            get(handler::delete).post(handler::delete),
        )
}
