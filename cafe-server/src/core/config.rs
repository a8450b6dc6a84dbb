/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite://cafes.db | SQLite connection string |
/// | HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 5000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (ms) |
/// | DB_MAX_CONNECTIONS | 5 | SQLite pool size |
/// | LOG_LEVEL | info | default filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | daily rolling log file directory |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite:///data/cafes.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string
    pub database_url: String,
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
    /// Maximum pooled database connections
    pub db_max_connections: u32,
    /// Default log level
    pub log_level: String,
    /// Optional log directory
    pub log_dir: Option<String>,
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cafes.db";

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Override the database location, keeping everything else from the environment
    ///
    /// Mostly used by tests
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
