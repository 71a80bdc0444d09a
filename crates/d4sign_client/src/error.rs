use global_utils::http_client::HttpClientError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum D4SignClientError {
    #[error("D4Sign is unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("D4Sign responded with status {status}: {message}")]
    UpstreamError { status: u16, message: String },
    #[error("Malformed D4Sign response: {0}")]
    MalformedResponse(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),
    #[error("Invalid D4Sign client configuration: {0}")]
    InvalidConfig(String),
}

impl From<HttpClientError> for D4SignClientError {
    fn from(error: HttpClientError) -> Self {
        match error {
            HttpClientError::URLParse(err) => D4SignClientError::InvalidConfig(err.to_string()),
            HttpClientError::ReqwestError(err) => D4SignClientError::UpstreamUnavailable(err.to_string()),
            HttpClientError::ParseError { path, err } => {
                D4SignClientError::MalformedResponse(format!("'{path}': {err}"))
            }
            HttpClientError::RequestFailedError { path, status, .. } if status == reqwest::StatusCode::NOT_FOUND => {
                D4SignClientError::NotFound(path)
            }
            HttpClientError::RequestFailedError { status, body, .. } => D4SignClientError::UpstreamError {
                status: status.as_u16(),
                message: body,
            },
        }
    }
}
