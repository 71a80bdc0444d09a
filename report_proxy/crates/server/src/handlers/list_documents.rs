use crate::error::ServerError;
use crate::headers::shared_cache_headers;
use crate::init::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use d4sign_client::models::DocumentSummary;
use global_utils::common_resp::ErrorResponse;
use report_proxy_document_aggregator::aggregator::DocumentScope;
use tracing::instrument;

/// Documents of every safe, served from the aggregation cache when fresh
#[utoipa::path(
    get,
    path = "/documents",
    responses(
        (status = 200, description = "Documents of all safes, in safe order", body = [DocumentSummary]),
        (status = 500, description = "Safes could not be enumerated", body = ErrorResponse),
    ),
)]
#[instrument(level = "trace", skip(state))]
pub async fn handle(State(state): State<AppState>) -> Result<Response, ServerError> {
    let listing = state.aggregator.list_documents(DocumentScope::AllSafes).await?;
    Ok((
        shared_cache_headers(&state.shared_cache_control),
        Json(listing.to_vec()),
    )
        .into_response())
}
