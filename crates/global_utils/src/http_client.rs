use std::time::Duration;

use reqwest::{Client, Method, StatusCode, Url, header};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("URL parse error: {0}")]
    URLParse(#[from] url::ParseError),
    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Failed to parse response from '{path}': {err}")]
    ParseError { path: String, err: serde_json::Error },
    #[error("Failed to do request: {path} - {status} - {body}")]
    RequestFailedError {
        path: String,
        status: StatusCode,
        body: String,
    },
}

/// Thin JSON client bound to one base url.
///
/// `default_query` is appended to every request. It usually carries credentials,
/// so logs only ever mention the request path, never the full url.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: Url,
    default_query: Vec<(String, String)>,
    client: Client,
}

impl HttpClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            default_query: Vec::new(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, HttpClientError> {
        Ok(Self {
            base_url,
            default_query: Vec::new(),
            client: Client::builder().timeout(timeout).build()?,
        })
    }

    pub fn with_default_query(mut self, query: impl IntoIterator<Item = (String, String)>) -> Self {
        self.default_query.extend(query);
        self
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&impl Serialize>,
        headers: Option<header::HeaderMap>,
    ) -> Result<T, HttpClientError> {
        self.send_request(Method::GET, path, query, headers).await
    }

    async fn send_request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        query: Option<&impl Serialize>,
        headers: Option<header::HeaderMap>,
    ) -> Result<T, HttpClientError> {
        let url = self.base_url.join(path)?;
        debug!(?method, path, "performing request");

        let mut request = self.client.request(method, url).query(&self.default_query);

        if let Some(h) = headers {
            request = request.headers(h);
        }
        if let Some(q) = query {
            request = request.query(q);
        }

        let response = request.send().await.map_err(|err| err.without_url())?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_else(|_| "N/A".to_string());
            error!(path, ?status, body = %body_text, "Request failed");
            return Err(HttpClientError::RequestFailedError {
                path: path.to_string(),
                status,
                body: body_text,
            });
        }

        let body_text = response.text().await.map_err(|err| err.without_url())?;
        match serde_json::from_str::<T>(&body_text) {
            Ok(parsed) => {
                debug!(path, ?status, "Request successful");
                Ok(parsed)
            }
            Err(err) => {
                error!(path, ?err, "Failed to parse successful response");
                Err(HttpClientError::ParseError {
                    path: path.to_string(),
                    err,
                })
            }
        }
    }
}
