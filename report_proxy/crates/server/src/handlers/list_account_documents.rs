use crate::error::ServerError;
use crate::headers::shared_cache_headers;
use crate::init::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use d4sign_client::models::DocumentSummary;
use tracing::instrument;

/// Flat account listing, independent of safes
#[utoipa::path(
    get,
    path = "/account/documents",
    responses(
        (status = 200, description = "Documents visible to the account", body = [DocumentSummary]),
    ),
)]
#[instrument(level = "trace", skip(state))]
pub async fn handle(State(state): State<AppState>) -> Result<Response, ServerError> {
    let listing = state.aggregator.list_account_documents().await;
    Ok((
        shared_cache_headers(&state.shared_cache_control),
        Json(listing.to_vec()),
    )
        .into_response())
}
