//! Tool handlers

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::BytesMut;
use pdfsir_domain::{
    processing::{ProcessingError, ProcessingResult, RequestId, SourceFile},
    tools::{self, CatalogFilter},
};
use tracing::{error, info, info_span, warn, Instrument};

use crate::{
    dto::tools::{CatalogQuery, CatalogResponse, ErrorResponse, ProcessResponse, ToolInfoResponse},
    AppState,
};

/// Multipart field carrying the uploaded file
const FILE_FIELD: &str = "file";

/// Describe a tool
#[utoipa::path(
    get,
    path = "/api/{tool_name}",
    params(
        ("tool_name" = String, Path, description = "Tool identifier, e.g. merge-pdf")
    ),
    responses(
        (status = 200, description = "Tool metadata", body = ToolInfoResponse),
        (status = 404, description = "Tool not found", body = ErrorResponse)
    ),
    tag = "tools"
)]
pub async fn describe_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
) -> Response {
    match state.processing_service.describe(&tool_name) {
        Ok(descriptor) => Json(ToolInfoResponse::from(descriptor)).into_response(),
        Err(err) => {
            info!(tool = %tool_name, "Unknown tool requested");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: err.user_message(),
                }),
            )
                .into_response()
        }
    }
}

/// Process an uploaded file with a tool
#[utoipa::path(
    post,
    path = "/api/{tool_name}",
    params(
        ("tool_name" = String, Path, description = "Tool identifier, e.g. merge-pdf")
    ),
    request_body(
        content_type = "multipart/form-data",
        description = "Multipart form with the document in the `file` field"
    ),
    responses(
        (status = 200, description = "File processed successfully", body = ProcessResponse),
        (status = 400, description = "Missing file or file too large", body = ErrorResponse),
        (status = 404, description = "Tool not found", body = ProcessResponse),
        (status = 500, description = "Provider or configuration failure", body = ProcessResponse)
    ),
    tag = "tools"
)]
pub async fn process_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let request_id = RequestId::new();
    let span = info_span!("process_tool", request_id = %request_id, tool = %tool_name);

    async move {
        let service = &state.processing_service;
        let max_size = service.config().max_upload_size;

        let outcome = match multipart {
            Ok(multipart) => match read_upload(multipart, max_size).await {
                Ok(file) => {
                    if let Some(file) = &file {
                        info!(file_name = %file.name(), size = file.size(), "Received processing request");
                    }
                    service.process(&tool_name, file).await
                }
                Err(err) => Err(err),
            },
            Err(rejection) => Err(ProcessingError::invalid_input(format!(
                "Invalid upload: {}",
                rejection.body_text()
            ))),
        };

        match outcome {
            Ok(result) => {
                info!(result_url = ?result.result_url, remaining_credits = ?result.remaining_credits, "Successfully processed file");
                (StatusCode::OK, Json(ProcessResponse::from(result))).into_response()
            }
            Err(err) => error_response(err),
        }
    }
    .instrument(span)
    .await
}

/// List the tool catalog
#[utoipa::path(
    get,
    path = "/tools",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Matching tools", body = CatalogResponse),
        (status = 400, description = "Unknown category", body = ErrorResponse)
    ),
    tag = "tools"
)]
pub async fn list_tools(Query(query): Query<CatalogQuery>) -> Response {
    let filter = match query
        .category
        .as_deref()
        .unwrap_or_default()
        .parse::<CatalogFilter>()
    {
        Ok(filter) => filter,
        Err(err) => return error_response(err),
    };

    let tools: Vec<ToolInfoResponse> = tools::search(filter, query.q.as_deref().unwrap_or_default())
        .into_iter()
        .map(ToolInfoResponse::from)
        .collect();

    Json(CatalogResponse {
        total: tools.len(),
        tools,
    })
    .into_response()
}

/// Map a processing error to its HTTP response
///
/// Client errors answer with a bare `{error}` body, everything else with the
/// failed processing envelope.
fn error_response(err: ProcessingError) -> Response {
    let status = match &err {
        ProcessingError::InvalidInput(_) | ProcessingError::TooLarge { .. } => {
            StatusCode::BAD_REQUEST
        }
        ProcessingError::ToolNotFound(_) => StatusCode::NOT_FOUND,
        ProcessingError::ConfigError(_)
        | ProcessingError::Upstream(_)
        | ProcessingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::BAD_REQUEST {
        warn!(error = %err, "Rejected processing request");
        return (
            status,
            Json(ErrorResponse {
                error: err.user_message(),
            }),
        )
            .into_response();
    }

    if err.is_client_error() {
        warn!(error = %err, "Rejected processing request");
    } else {
        error!(error = %err, "Failed to process file");
    }

    (
        status,
        Json(ProcessResponse::from(ProcessingResult::failed(&err))),
    )
        .into_response()
}

/// Read the `file` field of a multipart upload
///
/// Chunks are counted as they arrive and reading stops as soon as the limit
/// is exceeded, so an oversized upload is never buffered in full. Returns
/// `None` when the form has no `file` field.
async fn read_upload(
    mut multipart: Multipart,
    max_size: u64,
) -> Result<Option<SourceFile>, ProcessingError> {
    while let Some(mut field) = multipart.next_field().await.map_err(|err| {
        ProcessingError::invalid_input(format!("Failed to parse multipart data: {}", err))
    })? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let mut data = BytesMut::new();

        while let Some(chunk) = field.chunk().await.map_err(|err| {
            ProcessingError::invalid_input(format!("Failed to read file chunk: {}", err))
        })? {
            let size = (data.len() + chunk.len()) as u64;
            if size > max_size {
                warn!(file_name = %file_name, size, max_size, "File size limit exceeded, aborting upload");
                return Err(ProcessingError::too_large(size, max_size));
            }
            data.extend_from_slice(&chunk);
        }

        return Ok(Some(SourceFile::new(file_name, data.freeze())));
    }

    Ok(None)
}
