use crate::core::{Config, Result};
use crate::db::DbService;

/// State shared by every handler
///
/// Cheap to clone: the pool is reference counted.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Open the database named by the config and apply migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        tracing::info!(database_url = %config.database_url, "Opening database");
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }
}
