//! SQLite database connector and utilities
//!
//! Provides connection management, migration running, and SQLite-specific helpers.

mod config;
mod connector;
mod health;

pub use config::SqliteConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    connect_with_retry, run_migrations,
};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
