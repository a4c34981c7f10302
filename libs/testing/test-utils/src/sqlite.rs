//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by an in-memory SQLite database.
//! Unlike a server-backed engine there is no container to manage; the
//! database lives and dies with the connection pool.

use database::sqlite::{self, SqliteConfig};
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Test database wrapper with schema migrations applied
///
/// Every instance is an isolated, empty database. The single pooled
/// connection keeps the in-memory database alive for the test's duration.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let config = SqliteConfig::in_memory();

        let connection = sqlite::connect_from_config(&config)
            .await
            .expect("Failed to open in-memory test database");

        sqlite::run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to run migrations on test database");

        tracing::info!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// A cloneable handle to the underlying connection pool.
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
