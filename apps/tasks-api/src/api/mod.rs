use axum::Router;
use domain_tasks::{SqliteTaskRepository, TaskService};

pub mod health;

/// Creates the API routes.
///
/// Takes a reference to AppState and initializes the domain service.
/// Returns a stateless Router (the task routes have state already applied);
/// the state reference only lends out a cheap pool clone.
pub fn routes(state: &crate::state::AppState) -> Router {
    let repository = SqliteTaskRepository::new(state.db.clone());
    let service = TaskService::new(repository);

    Router::new().nest("/TMA", domain_tasks::handlers::router(service))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`. The /ready endpoint pings the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
