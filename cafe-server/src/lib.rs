//! Cafe Server - "Coffee & Wifi" cafe directory
//!
//! Server-rendered CRUD over a single SQLite table of cafes.
//!
//! ```text
//! cafe-server/src/
//! ├── core/     # config, state, server, errors
//! ├── api/      # routes and handlers
//! ├── views/    # HTML pages
//! ├── db/       # pool, migrations, repository
//! └── utils/    # AppError, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;
pub mod views;

pub use api::build_router;
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger_with_file;

/// Load `.env` and install the logger from the resulting configuration
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error>> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    if config.is_development() {
        tracing::debug!(?config, "Loaded configuration");
    }
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ______      ____
  / ____/___ _/ __/__
 / /   / __ `/ /_/ _ \
/ /___/ /_/ / __/  __/
\____/\__,_/_/  \___/   Coffee & Wifi
    "#
    );
}
