use std::sync::Arc;

use d4sign_client::D4SignApi;
use d4sign_client::models::SignerRecord;
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::error::AggregatorError;

/// Fetches signers of one document. Always fresh, never cached, never retried.
#[derive(Clone, Debug)]
pub struct SignerLookup {
    api: Arc<dyn D4SignApi>,
}

impl SignerLookup {
    pub fn new(api: Arc<dyn D4SignApi>) -> Self {
        Self { api }
    }

    /// Upstream listing exactly as D4Sign returned it
    #[instrument(level = "debug", skip(self))]
    pub async fn get_signers_raw(&self, document_id: &str) -> Result<Value, AggregatorError> {
        info!("Fetching signers for document {document_id}");
        self.api
            .list_signers(document_id)
            .await
            .inspect_err(|err| error!("Failed to fetch signers for {document_id}: {err}"))
            .map_err(|err| AggregatorError::SignerLookup {
                document_id: document_id.to_string(),
                err,
            })
    }

    pub async fn get_signers(&self, document_id: &str) -> Result<Vec<SignerRecord>, AggregatorError> {
        let listing = self.get_signers_raw(document_id).await?;
        Ok(SignerRecord::extract_all(&listing))
    }

    /// Signers that can be reached by phone or WhatsApp
    pub async fn get_contacts(&self, document_id: &str) -> Result<Vec<SignerRecord>, AggregatorError> {
        Ok(self
            .get_signers(document_id)
            .await?
            .into_iter()
            .filter(SignerRecord::has_contact)
            .collect())
    }
}
