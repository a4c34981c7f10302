//! Tasks API - REST server over a SQLite-backed task store

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::load();

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!("Opening SQLite database at {}", config.database.path);

    let db = database::sqlite::connect_from_config_with_retry(&config.database, None)
        .await
        .map_err(|e| eyre::eyre!("SQLite connection failed: {}", e))?;

    // Ensure the tasks table exists. Schema creation failure is fatal: the
    // service cannot operate without its table.
    database::sqlite::run_migrations::<migration::Migrator>(&db, "tasks-api")
        .await
        .map_err(|e| eyre::eyre!("Schema creation failed: {}", e))?;

    // Initialize the application state with the database connection
    let state = AppState { config, db };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check with an actual db ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting Tasks API on port {}", state.config.server.port);

    let server_config = state.config.server.clone();
    let db = state.db.clone();

    // Production-ready server with graceful shutdown and cleanup.
    // The pool handle moves into the cleanup future and is closed there.
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            info!("Shutting down: closing database connection");
            match db.close().await {
                Ok(_) => info!("SQLite connection closed successfully"),
                Err(e) => tracing::error!("Error closing SQLite connection: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Tasks API shutdown complete");
    Ok(())
}
