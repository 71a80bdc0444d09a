use crate::error::ServerError;
use crate::headers::shared_cache_headers;
use crate::init::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use d4sign_client::client::validate_identifier;
use d4sign_client::models::DocumentSummary;
use global_utils::common_resp::ErrorResponse;
use report_proxy_document_aggregator::aggregator::DocumentScope;
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/safes/{uuidSafe}/documents",
    params(("uuidSafe" = String, Path, description = "Safe identifier")),
    responses(
        (status = 200, description = "Documents of one safe", body = [DocumentSummary]),
        (status = 400, description = "Malformed safe identifier", body = ErrorResponse),
    ),
)]
#[instrument(level = "trace", skip(state))]
pub async fn handle(State(state): State<AppState>, Path(safe_id): Path<String>) -> Result<Response, ServerError> {
    let safe_id = validate_identifier(&safe_id)?;
    let listing = state
        .aggregator
        .list_documents(DocumentScope::SingleSafe(safe_id.to_string()))
        .await?;
    Ok((
        shared_cache_headers(&state.shared_cache_control),
        Json(listing.to_vec()),
    )
        .into_response())
}
