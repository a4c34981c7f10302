use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqliteConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect to a SQLite database
///
/// # Arguments
/// * `database_url` - SQLite connection string, e.g. `sqlite://./TMA.db?mode=rwc`
///
/// # Example
/// ```ignore
/// use database::sqlite::connect;
///
/// let db = connect("sqlite://./TMA.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    info!("Successfully connected to SQLite database");

    Ok(db)
}

/// Connect using a SqliteConfig
///
/// This is the recommended way to connect when using configuration.
///
/// # Example
/// ```ignore
/// use database::sqlite::{SqliteConfig, connect_from_config};
///
/// let config = SqliteConfig::new("./TMA.db");
/// let db = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    let options = config.clone().into_connect_options();
    connect_with_options(options).await
}

/// Connect with custom connection options
///
/// Use this when you need fine-grained control over pool settings.
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to SQLite database with custom options");
    Ok(db)
}

/// Connect to SQLite with automatic retry on failure
///
/// Uses exponential backoff with jitter to retry connection attempts.
/// Useful for handling transient filesystem issues during startup.
pub async fn connect_with_retry(
    database_url: &str,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let url = database_url.to_string();

    match retry_config {
        Some(config) => retry_with_backoff(|| connect(&url), config).await,
        None => retry(|| connect(&url)).await,
    }
}

/// Connect from config with automatic retry on failure
///
/// # Example
/// ```ignore
/// use database::sqlite::{SqliteConfig, connect_from_config_with_retry};
/// use database::common::RetryConfig;
///
/// let config = SqliteConfig::new("./TMA.db");
/// let db = connect_from_config_with_retry(&config, None).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.clone().into_connect_options();

    match retry_config {
        Some(retry_cfg) => {
            retry_with_backoff(
                || {
                    let opts = options.clone();
                    connect_with_options(opts)
                },
                retry_cfg,
            )
            .await
        }
        None => {
            retry(|| {
                let opts = options.clone();
                connect_with_options(opts)
            })
            .await
        }
    }
}

/// Run database migrations using the provided Migrator
///
/// This is a generic function that works with any app's Migrator.
/// The migration files remain in the migration crate, but the running
/// logic is here.
///
/// # Arguments
/// * `db` - Database connection
/// * `app_name` - Name of the app for logging (e.g., "tasks-api")
///
/// # Example
/// ```ignore
/// use migration::Migrator;
/// use database::sqlite::run_migrations;
///
/// run_migrations::<Migrator>(&db, "tasks-api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory() {
        let config = SqliteConfig::in_memory();
        let result = connect_from_config(&config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_connect_invalid_url_fails() {
        let result = connect("sqlite:///nonexistent-dir/definitely/missing.db").await;
        assert!(result.is_err());
    }
}
