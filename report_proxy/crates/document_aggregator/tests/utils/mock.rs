use std::fmt;
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use d4sign_client::models::{DocumentSummary, RawPage, Safe};
use d4sign_client::{D4SignApi, D4SignClientError};
use global_utils::logger::{LoggerGuard, init_logger};
use mockall::mock;
use report_proxy_config_parser::config::{AggregationConfig, CacheConfig};
use report_proxy_document_aggregator::aggregator::DocumentAggregator;
use serde_json::{Value, json};

pub static TEST_LOGGER: LazyLock<LoggerGuard> = LazyLock::new(init_logger);

mock! {
    pub D4Sign {}

    #[async_trait]
    impl D4SignApi for D4Sign {
        async fn list_safes(&self) -> Result<Vec<Safe>, D4SignClientError>;
        async fn list_safe_documents_page(&self, safe_id: &str, page: u32) -> Result<RawPage, D4SignClientError>;
        async fn list_account_documents_page(&self, page: u32) -> Result<RawPage, D4SignClientError>;
        async fn list_signers(&self, document_id: &str) -> Result<Value, D4SignClientError>;
    }
}

impl fmt::Debug for MockD4Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockD4Sign").finish_non_exhaustive()
    }
}

pub fn safe(id: &str) -> Safe {
    Safe {
        id: id.to_string(),
        name: format!("safe {id}"),
    }
}

pub fn doc(id: &str, name: &str) -> Value {
    json!({ "uuidDoc": id, "nameDoc": name, "statusName": "Finalizado" })
}

pub fn summary(id: &str, name: &str) -> DocumentSummary {
    DocumentSummary {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn upstream_error() -> D4SignClientError {
    D4SignClientError::UpstreamError {
        status: 500,
        message: "internal error".to_string(),
    }
}

pub fn aggregation_config(max_pages: u32, safe_concurrency: usize) -> AggregationConfig {
    AggregationConfig {
        max_pages,
        safe_concurrency,
        excluded_document_names: vec![],
    }
}

pub fn cache_config(enabled: bool) -> CacheConfig {
    CacheConfig { enabled, ttl_secs: 300 }
}

/// Scripts `list_safe_documents_page` from a table of `(safe_id, pages)`;
/// pages past the end of a script come back empty.
pub fn script_safe_pages(mock: &mut MockD4Sign, script: Vec<(&'static str, Vec<Result<RawPage, D4SignClientError>>)>) {
    mock.expect_list_safe_documents_page().returning(move |safe_id, page| {
        script
            .iter()
            .find(|(id, _)| *id == safe_id)
            .and_then(|(_, pages)| pages.get(page as usize - 1).cloned())
            .unwrap_or_else(|| Ok(vec![]))
    });
}

pub fn aggregator(mock: MockD4Sign, config: AggregationConfig, cache: CacheConfig) -> DocumentAggregator {
    DocumentAggregator::new(Arc::new(mock), config, &cache)
}
