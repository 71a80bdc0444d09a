use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use d4sign_client::D4SignClientError;
use global_utils::common_resp::{ErrorIntoStatusMsgTuple, ErrorResponse};
use report_proxy_document_aggregator::error::AggregatorError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("{0}")]
    Client(#[from] D4SignClientError),
    #[error("{0}")]
    Upstream(#[from] AggregatorError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    MissingCredentials(String),
}

impl ErrorIntoStatusMsgTuple for ServerError {
    fn into_status_msg_tuple(self) -> (StatusCode, String) {
        let status = match &self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::MissingCredentials(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Client(err) => client_error_status(err),
            ServerError::Upstream(err) => client_error_status(err.upstream()),
        };
        (status, self.to_string())
    }
}

fn client_error_status(err: &D4SignClientError) -> StatusCode {
    match err {
        D4SignClientError::NotFound(_) => StatusCode::NOT_FOUND,
        D4SignClientError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.into_status_msg_tuple();
        if status.is_server_error() {
            tracing::error!(%status, "Report proxy error: {message}");
        } else {
            tracing::debug!(%status, "Rejected request: {message}");
        }
        ErrorResponse::new(message).with_status(status)
    }
}
