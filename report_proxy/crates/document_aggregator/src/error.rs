use d4sign_client::D4SignClientError;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AggregatorError {
    #[error("Failed to enumerate safes: {0}")]
    SafeEnumeration(#[source] D4SignClientError),
    #[error("Failed to look up signers of document '{document_id}': {err}")]
    SignerLookup {
        document_id: String,
        #[source]
        err: D4SignClientError,
    },
}

impl AggregatorError {
    pub fn upstream(&self) -> &D4SignClientError {
        match self {
            AggregatorError::SafeEnumeration(err) => err,
            AggregatorError::SignerLookup { err, .. } => err,
        }
    }
}
