use crate::error::ServerError;
use crate::init::AppState;
use axum::Json;
use axum::extract::State;
use d4sign_client::models::Safe;
use global_utils::common_resp::ErrorResponse;
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/safes",
    responses(
        (status = 200, description = "Safes in upstream order", body = [Safe]),
        (status = 500, description = "Safes could not be listed", body = ErrorResponse),
    ),
)]
#[instrument(level = "trace", skip(state), ret)]
pub async fn handle(State(state): State<AppState>) -> Result<Json<Vec<Safe>>, ServerError> {
    let safes = state.aggregator.list_safes().await?;
    Ok(Json(safes))
}
