//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod cafe;
pub mod cafe_form;

// Re-exports
pub use cafe::*;
pub use cafe_form::*;
