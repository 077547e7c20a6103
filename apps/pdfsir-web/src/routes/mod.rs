//! API routes

pub mod tools;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::tools::{CatalogResponse, ErrorResponse, ProcessResponse, ToolInfoResponse},
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::tools::describe_tool,
        handlers::tools::process_tool,
        handlers::tools::list_tools,
        health_handler
    ),
    components(
        schemas(ToolInfoResponse, CatalogResponse, ProcessResponse, ErrorResponse)
    ),
    tags(
        (name = "tools", description = "Tool catalog and document processing"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "PDFsir API",
        version = "0.1.0",
        description = "PDF tools backed by the PDF.co document processing API",
        contact(
            name = "PDFsir Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(tools::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
