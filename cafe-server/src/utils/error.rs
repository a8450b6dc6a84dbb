//! Unified error handling
//!
//! [`AppError`] is returned by handlers and rendered as an HTML error page.
//!
//! | Variant | Status |
//! |---------|--------|
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Database | 500 (details logged, not shown) |
//!
//! Form validation failures never become an `AppError`: the handler
//! re-renders the form instead.
//!
//! ```ignore
//! Err(AppError::not_found(format!("Cafe {id} not found")))
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::db::repository::RepoError;
use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 404
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// 409
    Conflict(String),

    // ========== Server errors (5xx) ==========
    #[error("Database error: {0}")]
    /// 500
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(msg) | AppError::Conflict(msg) => msg.as_str(),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error"
            }
        };

        (status, views::error::page(status, message)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(column) => {
                AppError::Conflict(format!("A cafe with this {column} already exists"))
            }
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
