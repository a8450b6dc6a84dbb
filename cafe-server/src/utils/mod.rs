//! Utility module
//!
//! - [`AppError`] - handler error type, rendered as an HTML page
//! - [`AppResult`] - handler result alias
//! - logging setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
