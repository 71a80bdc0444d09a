use std::sync::Arc;

use d4sign_client::D4SignApi;
use d4sign_client::models::Safe;
use tracing::{error, info, instrument};

use crate::error::AggregatorError;

/// Lists the safes of the account, in upstream order. Fails fast.
#[derive(Clone, Debug)]
pub struct SafeEnumerator {
    api: Arc<dyn D4SignApi>,
}

impl SafeEnumerator {
    pub fn new(api: Arc<dyn D4SignApi>) -> Self {
        Self { api }
    }

    #[instrument(level = "debug", skip(self), err)]
    pub async fn list_safes(&self) -> Result<Vec<Safe>, AggregatorError> {
        let safes = self
            .api
            .list_safes()
            .await
            .inspect_err(|err| error!("Failed to list safes: {err}"))
            .map_err(AggregatorError::SafeEnumeration)?;
        info!("Enumerated {} safes", safes.len());
        Ok(safes)
    }
}
