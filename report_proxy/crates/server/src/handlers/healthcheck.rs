use crate::error::ServerError;
use axum::Json;
use global_utils::common_resp::Empty;
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Proxy is up", body = Empty),
    ),
)]
#[instrument(level = "trace", ret)]
pub async fn handle() -> Result<Json<Empty>, ServerError> {
    tracing::debug!("Handling healthcheck request...");
    Ok(Json(Empty {}))
}
