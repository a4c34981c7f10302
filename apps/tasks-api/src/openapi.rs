use utoipa::OpenApi;

/// Top-level OpenAPI document for the Tasks API
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Tasks API",
        version = "0.1.0",
        description = "CRUD service for task records backed by SQLite"
    ),
    nest(
        (path = "/TMA", api = domain_tasks::ApiDoc)
    )
)]
pub struct ApiDoc;
