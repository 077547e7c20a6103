//! Tool routes

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::{
    handlers::tools::{describe_tool, list_tools, process_tool},
    AppState,
};

/// Create tool routes
///
/// axum's default body limit is lifted: the upload handler enforces the
/// configured size limit itself while streaming.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/{tool_name}", get(describe_tool).post(process_tool))
        .route("/tools", get(list_tools))
        .layer(DefaultBodyLimit::disable())
}
