use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

/// SQLite database configuration
///
/// Holds the database file location and connection pool settings.
///
/// # Example
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// let config = SqliteConfig::new("./TMA.db");
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database file path (required)
    pub path: String,

    /// Create the database file if it does not exist
    pub create_if_missing: bool,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    ///
    /// Kept at one so an in-memory database is never dropped between
    /// statements (each new SQLite `:memory:` connection is a fresh,
    /// empty database).
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,

    /// SQL logging level
    pub sqlx_logging_level: LevelFilter,
}

impl SqliteConfig {
    /// Create a new SqliteConfig with default pool settings
    ///
    /// # Arguments
    /// * `path` - Database file path, e.g. `./TMA.db`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            create_if_missing: true,
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 8,
            sqlx_logging: true,
            sqlx_logging_level: LevelFilter::Debug,
        }
    }

    /// An in-memory database, useful for tests.
    pub fn in_memory() -> Self {
        Self {
            path: ":memory:".into(),
            create_if_missing: false,
            max_connections: 1,
            min_connections: 1,
            acquire_timeout_secs: 8,
            sqlx_logging: false,
            sqlx_logging_level: LevelFilter::Debug,
        }
    }

    /// The sqlx connection URL for this configuration.
    pub fn url(&self) -> String {
        if self.path == ":memory:" {
            "sqlite::memory:".to_string()
        } else if self.create_if_missing {
            format!("sqlite://{}?mode=rwc", self.path)
        } else {
            format!("sqlite://{}", self.path)
        }
    }

    /// Convert into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url());
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(self.sqlx_logging_level);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_creates_missing_file() {
        let config = SqliteConfig::new("./TMA.db");
        assert_eq!(config.url(), "sqlite://./TMA.db?mode=rwc");
    }

    #[test]
    fn test_url_without_create() {
        let mut config = SqliteConfig::new("/var/lib/tasks.db");
        config.create_if_missing = false;
        assert_eq!(config.url(), "sqlite:///var/lib/tasks.db");
    }

    #[test]
    fn test_in_memory_url() {
        let config = SqliteConfig::in_memory();
        assert_eq!(config.url(), "sqlite::memory:");
    }
}
