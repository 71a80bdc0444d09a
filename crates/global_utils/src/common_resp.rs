use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[schema(example = json!({ }))]
pub struct Empty {}

/// Uniform error body returned by every route: `{"error": "..."}`
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[schema(example = json!({ "error": "Upstream returned 500 Internal Server Error" }))]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self { error: error.to_string() }
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

pub trait ErrorIntoStatusMsgTuple {
    fn into_status_msg_tuple(self) -> (StatusCode, String);
}
