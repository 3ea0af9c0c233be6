use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};

use super::{
    models::{DocumentRequest, DownloadDescriptor, DownloadQuery, HealthResponse},
    state::AppState,
    utils,
    validation::{RequestValidationError, validate_request},
};
use crate::api::error::ApiError;
use crate::storage::StorageError;

/// Document generation endpoint (POST /)
///
/// ## Flow:
/// 1. Check Content-Type when the client sends one
/// 2. Read the body up to `server.api.max_payload_bytes`
/// 3. Decode the [`DocumentRequest`] and resolve `typeofDoc` (400 otherwise)
/// 4. Encode the records on a blocking task (500 on encoder failure)
/// 5. Save the bytes under a fresh file name (500 on storage failure)
/// 6. Return 200 with the download link
pub async fn create_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Body,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let content_type = content_type
            .to_str()
            .map_err(|_| ApiError::InvalidPayload("Content-Type is not valid ASCII".into()))?;
        utils::parse_content_type(content_type)?;
    }

    let max_payload = state.config.server.api.max_payload_bytes.as_usize();
    let body_bytes = read_body(body, max_payload).await?;

    let request: DocumentRequest = serde_json::from_slice(&body_bytes)?;
    let job = validate_request(request).map_err(map_validation_error)?;

    let encoder = state
        .registry
        .get(job.format)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let format = job.format;
    let records = job.records;
    let row_count = records.len();

    let encoded = tokio::task::spawn_blocking(move || encoder.encode(&records))
        .await
        .map_err(|e| ApiError::Internal(format!("encoder task failed: {}", e)))?;

    let bytes = encoded.inspect_err(|_| state.metrics.generation_failed())?;

    let file_name = state
        .storage
        .save(bytes, format)
        .await
        .map_err(|e| {
            state.metrics.generation_failed();
            ApiError::Storage(e.to_string())
        })?;

    let download_link = utils::build_download_link(&state.config.server.base_url, &file_name)?;

    state.metrics.document_generated();
    tracing::info!(%format, rows = row_count, file = %file_name, "Document generated");

    Ok((StatusCode::OK, Json(DownloadDescriptor { download_link })))
}

/// File download endpoint (GET /?file=<name>)
///
/// Returns the raw bytes as an attachment. Names that are not a single plain
/// path segment are rejected with 400 before storage is touched.
pub async fn download_document(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    let file_name = query
        .file
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::InvalidPayload("file name is missing".into()))?;

    let bytes = state.storage.load(&file_name).await.map_err(|e| {
        if matches!(e, StorageError::NotFound(_)) {
            state.metrics.download_missing();
        }
        ApiError::from(e)
    })?;

    state.metrics.download_served();

    let headers = [
        (header::CONTENT_TYPE, mime::APPLICATION_OCTET_STREAM.to_string()),
        (
            header::CONTENT_DISPOSITION,
            utils::content_disposition(&file_name),
        ),
    ];

    Ok((StatusCode::OK, headers, bytes).into_response())
}

/// Health check endpoint (GET /health)
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    use std::collections::HashMap;

    let mut components = HashMap::new();
    components.insert("api".to_string(), "healthy".to_string());
    components.insert(
        "storage".to_string(),
        format!("healthy ({})", state.storage.location),
    );
    let formats: Vec<String> = state.registry.formats().map(|f| f.to_string()).collect();
    components.insert("encoders".to_string(), formats.join(","));

    let response = HealthResponse {
        status: "healthy".to_string(),
        components,
        version: env!("CARGO_PKG_VERSION").to_string(),
        metrics: state.metrics.snapshot(),
    };

    (StatusCode::OK, Json(response))
}

fn map_validation_error(err: RequestValidationError) -> ApiError {
    ApiError::InvalidPayload(err.to_string())
}

/// Reads the request body, failing once it grows past `max_size` bytes
///
/// Decompression is handled by RequestDecompressionLayer, so the limit applies
/// to the decoded payload.
async fn read_body(body: axum::body::Body, max_size: usize) -> Result<Vec<u8>, ApiError> {
    let collected = Limited::new(body, max_size).collect().await.map_err(|err| {
        if err.downcast_ref::<LengthLimitError>().is_some() {
            ApiError::PayloadTooLarge(max_size)
        } else {
            ApiError::InvalidPayload(format!("failed to read body: {}", err))
        }
    })?;

    Ok(collected.to_bytes().to_vec())
}
