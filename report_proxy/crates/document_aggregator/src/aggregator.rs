use std::collections::HashSet;
use std::sync::Arc;

use d4sign_client::D4SignApi;
use d4sign_client::models::{DocumentSummary, RawPage, Safe};
use futures::StreamExt;
use report_proxy_config_parser::config::{AggregationConfig, CacheConfig};
use tracing::{info, instrument, warn};

use crate::cache::{AggregationCache, CacheStatus};
use crate::error::AggregatorError;
use crate::paginator::{PagedRecords, Termination, collect_pages};
use crate::safe_enumerator::SafeEnumerator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentScope {
    AllSafes,
    SingleSafe(String),
}

pub type DocumentListing = Arc<Vec<DocumentSummary>>;

/// Merges per-safe document listings into one.
///
/// Safe enumeration fails fast. Everything below it is best effort: a single
/// safe listing that fails mid-way returns what was fetched so far, while
/// inside an all-safes aggregation the failing safe contributes nothing and
/// never aborts the others. Output keeps safe enumeration order and page order
/// inside each safe, without de-duplication.
#[derive(Debug)]
pub struct DocumentAggregator {
    api: Arc<dyn D4SignApi>,
    safe_enumerator: SafeEnumerator,
    config: AggregationConfig,
    excluded_names: HashSet<String>,
    cache: AggregationCache<Vec<DocumentSummary>>,
}

impl DocumentAggregator {
    pub fn new(api: Arc<dyn D4SignApi>, config: AggregationConfig, cache_config: &CacheConfig) -> Self {
        Self {
            safe_enumerator: SafeEnumerator::new(api.clone()),
            excluded_names: config.excluded_document_names.iter().cloned().collect(),
            cache: AggregationCache::from_config(cache_config),
            api,
            config,
        }
    }

    pub async fn list_safes(&self) -> Result<Vec<Safe>, AggregatorError> {
        self.safe_enumerator.list_safes().await
    }

    /// `AllSafes` goes through the aggregation cache, `SingleSafe` is always fetched.
    #[instrument(level = "debug", skip(self), err)]
    pub async fn list_documents(&self, scope: DocumentScope) -> Result<DocumentListing, AggregatorError> {
        match scope {
            DocumentScope::AllSafes => {
                let (listing, status) = self
                    .cache
                    .get_or_populate(|| self.aggregate_all_safes(), |documents| !documents.is_empty())
                    .await?;
                if status != CacheStatus::Hit {
                    info!(status = ?status, documents = listing.len(), "Aggregated documents of all safes");
                }
                Ok(listing)
            }
            DocumentScope::SingleSafe(safe_id) => Ok(Arc::new(self.list_safe_documents(&safe_id).await)),
        }
    }

    /// Flat account listing (`GET documents`), paginated like a safe, not cached.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_account_documents(&self) -> DocumentListing {
        let paged = collect_pages("account", self.config.max_pages, |page| {
            self.api.list_account_documents_page(page)
        })
        .await;
        Arc::new(self.project(&paged.records))
    }

    async fn aggregate_all_safes(&self) -> Result<Vec<DocumentSummary>, AggregatorError> {
        let safes = self.safe_enumerator.list_safes().await?;
        let per_safe: Vec<Vec<DocumentSummary>> = futures::stream::iter(safes)
            .map(|safe| async move { self.safe_contribution(&safe).await })
            .buffered(self.config.safe_concurrency.max(1))
            .collect()
            .await;
        Ok(per_safe.into_iter().flatten().collect())
    }

    /// Inside an all-safes aggregation a safe that failed mid-way contributes nothing.
    async fn safe_contribution(&self, safe: &Safe) -> Vec<DocumentSummary> {
        let paged = self.fetch_safe_pages(&safe.id).await;
        match &paged.termination {
            Termination::UpstreamFailure(err) => {
                warn!(
                    safe_id = %safe.id,
                    safe_name = %safe.name,
                    pages_fetched = paged.pages_fetched,
                    "Omitting safe from aggregation: {err}"
                );
                Vec::new()
            }
            _ => self.project(&paged.records),
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_safe_documents(&self, safe_id: &str) -> Vec<DocumentSummary> {
        let paged = self.fetch_safe_pages(safe_id).await;
        if let Termination::UpstreamFailure(err) = &paged.termination {
            warn!(
                safe_id,
                pages_fetched = paged.pages_fetched,
                "Safe listing cut short, keeping {} records fetched before failure: {err}",
                paged.records.len()
            );
        }
        self.project(&paged.records)
    }

    async fn fetch_safe_pages(&self, safe_id: &str) -> PagedRecords {
        collect_pages(safe_id, self.config.max_pages, |page| {
            self.api.list_safe_documents_page(safe_id, page)
        })
        .await
    }

    fn project(&self, records: &RawPage) -> Vec<DocumentSummary> {
        DocumentSummary::project_page(records)
            .into_iter()
            .filter(|doc| !self.excluded_names.contains(&doc.name))
            .collect()
    }
}
