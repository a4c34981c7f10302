//! Database library providing the SQLite connector and shared utilities
//!
//! # Examples
//!
//! ```ignore
//! use database::sqlite::{self, SqliteConfig};
//! use migration::Migrator;
//!
//! let config = SqliteConfig::new("./TMA.db");
//! let db = sqlite::connect_from_config(&config).await?;
//! sqlite::run_migrations::<Migrator>(&db, "tasks-api").await?;
//! ```

pub mod common;
pub mod sqlite;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
