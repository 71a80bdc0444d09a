use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use global_utils::http_client::HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::error::D4SignClientError;
use crate::models::{RawPage, Safe};
use crate::traits::D4SignApi;

pub const DEFAULT_BASE_URL: &str = "https://secure.d4sign.com.br/api/v1/";
const TOKEN_API_PARAM: &str = "tokenAPI";
const CRYPT_KEY_PARAM: &str = "cryptKey";
const PAGE_PARAM: &str = "pg";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct D4SignConfig {
    pub base_url: Url,
    pub timeout_secs: u64,
}

/// Static key pair appended to every D4Sign request.
#[derive(Clone, PartialEq, Eq)]
pub struct D4SignCredentials {
    pub token_api: String,
    pub crypt_key: String,
}

impl fmt::Debug for D4SignCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("D4SignCredentials")
            .field("token_api", &"<redacted>")
            .field("crypt_key", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct D4SignClient {
    client: HttpClient,
}

impl D4SignClient {
    pub fn new(config: D4SignConfig, credentials: D4SignCredentials) -> Result<Self, D4SignClientError> {
        let client = HttpClient::with_timeout(
            with_trailing_slash(config.base_url),
            Duration::from_secs(config.timeout_secs),
        )?
        .with_default_query([
            (TOKEN_API_PARAM.to_string(), credentials.token_api),
            (CRYPT_KEY_PARAM.to_string(), credentials.crypt_key),
        ]);
        Ok(Self { client })
    }

    async fn get_page(&self, path: &str, page: u32) -> Result<RawPage, D4SignClientError> {
        let body: Value = self.client.get(path, Some(&[(PAGE_PARAM, page)]), None).await?;
        match body {
            Value::Array(records) => Ok(records),
            other => Err(D4SignClientError::MalformedResponse(format!(
                "'{path}' page {page} is not a list: {}",
                json_kind(&other)
            ))),
        }
    }
}

#[async_trait]
impl D4SignApi for D4SignClient {
    #[instrument(level = "debug", skip(self), err)]
    async fn list_safes(&self) -> Result<Vec<Safe>, D4SignClientError> {
        let body: Value = self.client.get("safes", None::<&()>, None).await?;
        let records = match body {
            Value::Array(records) => records,
            other => {
                return Err(D4SignClientError::MalformedResponse(format!(
                    "safes listing is not a list: {}",
                    json_kind(&other)
                )));
            }
        };
        let safes: Vec<Safe> = records.iter().filter_map(Safe::from_record).collect();
        debug!(received = records.len(), kept = safes.len(), "Safes listed");
        Ok(safes)
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_safe_documents_page(&self, safe_id: &str, page: u32) -> Result<RawPage, D4SignClientError> {
        let safe_id = validate_identifier(safe_id)?;
        self.get_page(&format!("documents/{safe_id}/safe"), page).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_account_documents_page(&self, page: u32) -> Result<RawPage, D4SignClientError> {
        self.get_page("documents", page).await
    }

    #[instrument(level = "debug", skip(self), err)]
    async fn list_signers(&self, document_id: &str) -> Result<Value, D4SignClientError> {
        let document_id = validate_identifier(document_id)?;
        Ok(self
            .client
            .get(&format!("documents/{document_id}/list"), None::<&()>, None)
            .await?)
    }
}

/// Identifiers are spliced into url paths, so only uuid-like values pass.
pub fn validate_identifier(id: &str) -> Result<&str, D4SignClientError> {
    let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(D4SignClientError::InvalidIdentifier(id.to_string()))
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
