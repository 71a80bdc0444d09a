use std::future::Future;

use d4sign_client::D4SignClientError;
use d4sign_client::models::{PageHeader, RawPage};
use tracing::{debug, warn};

/// Why a paginated walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Upstream returned a page without records (a bare pagination header counts as empty)
    EmptyPage,
    /// The pagination header reported the page just read as the last one
    LastPage,
    /// Body was not a list
    MalformedPage,
    /// Transport failure or non-success status, records gathered so far are kept
    UpstreamFailure(D4SignClientError),
    /// `max_pages` pages were fetched without reaching the end
    PageCeiling,
}

#[derive(Debug, Clone)]
pub struct PagedRecords {
    pub records: RawPage,
    pub pages_fetched: u32,
    pub termination: Termination,
}

/// Walks pages `1..=max_pages` sequentially, accumulating records until one of
/// the [`Termination`] conditions is hit. Pagination headers are consumed here
/// and never show up in `records`. Never fails.
pub async fn collect_pages<F, Fut>(label: &str, max_pages: u32, mut fetch_page: F) -> PagedRecords
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<RawPage, D4SignClientError>>,
{
    let mut records = RawPage::new();
    let mut pages_fetched = 0;

    for page in 1..=max_pages {
        let termination = match fetch_page(page).await {
            Ok(page_records) => {
                let (headers, mut content): (RawPage, RawPage) = page_records
                    .into_iter()
                    .partition(|record| PageHeader::from_record(record).is_some());
                if content.is_empty() {
                    Termination::EmptyPage
                } else {
                    pages_fetched = page;
                    records.append(&mut content);
                    let last = headers
                        .iter()
                        .filter_map(PageHeader::from_record)
                        .any(|header| header.is_last_page(page));
                    if !last {
                        continue;
                    }
                    Termination::LastPage
                }
            }
            Err(D4SignClientError::MalformedResponse(msg)) => {
                debug!(label, page, "Treating malformed page as end of data: {msg}");
                Termination::MalformedPage
            }
            Err(err) => {
                warn!(label, page, "Stopping pagination on upstream failure: {err}");
                Termination::UpstreamFailure(err)
            }
        };
        debug!(label, pages_fetched, records = records.len(), ?termination, "Pagination finished");
        return PagedRecords {
            records,
            pages_fetched,
            termination,
        };
    }

    warn!(label, max_pages, records = records.len(), "Page ceiling reached, listing truncated");
    PagedRecords {
        records,
        pages_fetched,
        termination: Termination::PageCeiling,
    }
}
