//! Configuration for the Tasks API

use core_config::{AppInfo, app_info, server::ServerConfig};
use database::sqlite::SqliteConfig;
use std::net::Ipv4Addr;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// The service listens on a fixed port.
const LISTEN_PORT: u16 = 8000;

/// The task table lives in a fixed local database file.
const DATABASE_PATH: &str = "./TMA.db";

/// Application configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// Assemble the fixed service configuration.
    ///
    /// The listen address and database location are part of the service
    /// contract; only `APP_ENV` (log output format) and `RUST_LOG` (log
    /// levels) are read from the process environment.
    pub fn load() -> Self {
        Self {
            app: app_info!(),
            database: SqliteConfig::new(DATABASE_PATH),
            server: ServerConfig::new(Ipv4Addr::UNSPECIFIED.to_string(), LISTEN_PORT),
            environment: Environment::from_env(),
        }
    }
}
