//! Shared types for the cafe directory
//!
//! The cafe record schema lives here once: the stored row ([`models::Cafe`]),
//! the validated write payload ([`models::CafeInput`]) and the raw HTML form
//! ([`models::CafeForm`]). DB row types derive `sqlx` traits behind the `db`
//! feature.

pub mod models;

// Re-exports
pub use models::{Cafe, CafeForm, CafeInput, FormErrors, Price, SeatBucket};
