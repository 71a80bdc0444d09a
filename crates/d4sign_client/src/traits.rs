use crate::error::D4SignClientError;
use crate::models::{RawPage, Safe};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

/// The subset of the D4Sign REST API the report proxy relies on.
///
/// Page numbers start at 1.
#[async_trait]
pub trait D4SignApi: Debug + Send + Sync {
    async fn list_safes(&self) -> Result<Vec<Safe>, D4SignClientError>;
    async fn list_safe_documents_page(&self, safe_id: &str, page: u32) -> Result<RawPage, D4SignClientError>;
    async fn list_account_documents_page(&self, page: u32) -> Result<RawPage, D4SignClientError>;
    async fn list_signers(&self, document_id: &str) -> Result<Value, D4SignClientError>;
}
