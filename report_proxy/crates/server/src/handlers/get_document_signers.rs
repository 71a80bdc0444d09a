use crate::error::ServerError;
use crate::headers::no_cache_headers;
use crate::init::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use d4sign_client::client::validate_identifier;
use global_utils::common_resp::ErrorResponse;
use tracing::instrument;

/// Signers listing exactly as D4Sign returned it, never cached
#[utoipa::path(
    get,
    path = "/documents/{uuidDoc}/signers",
    params(("uuidDoc" = String, Path, description = "Document identifier")),
    responses(
        (status = 200, description = "Upstream signers listing", body = serde_json::Value),
        (status = 400, description = "Malformed document identifier", body = ErrorResponse),
        (status = 404, description = "Unknown document", body = ErrorResponse),
        (status = 500, description = "Upstream failure", body = ErrorResponse),
    ),
)]
#[instrument(level = "trace", skip(state))]
pub async fn handle(State(state): State<AppState>, Path(document_id): Path<String>) -> Result<Response, ServerError> {
    let document_id = validate_identifier(&document_id)?;
    let listing = state.signer_lookup.get_signers_raw(document_id).await?;
    Ok((no_cache_headers(), Json(listing)).into_response())
}
