//! Paginated query execution with bounded retry

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use super::client::{PageFetcher, RetryPolicy};
use super::results::SelectResults;
use super::{SparqlError, SparqlResult};

/// Rows per page; every template must carry the matching LIMIT literal.
pub const PAGE_SIZE: usize = 10_000;

/// Offset marker a template must contain
pub const OFFSET_MARKER: &str = "OFFSET ?offset";

/// Fixed page-size literal a template must contain
pub const LIMIT_MARKER: &str = "LIMIT 10000";

/// Check that a template carries both pagination markers.
///
/// Fails synchronously, before any network call is attempted.
pub fn validate_template(template: &str) -> SparqlResult<()> {
    if !template.contains(OFFSET_MARKER) || !template.contains(LIMIT_MARKER) {
        return Err(SparqlError::Template(format!(
            "template must contain '{LIMIT_MARKER}' and '{OFFSET_MARKER}'"
        )));
    }
    Ok(())
}

/// Injectable sleep, so retry paths are testable without blocking.
#[async_trait]
pub trait Backoff: Send + Sync {
    async fn wait(&self, delay: Duration);
}

/// Production backoff backed by the tokio timer
pub struct TokioBackoff;

#[async_trait]
impl Backoff for TokioBackoff {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Runs a SELECT template page by page against a [`PageFetcher`].
///
/// Offsets start at 0 and grow by [`PAGE_SIZE`] per round; pagination stops
/// when a page holds strictly fewer than [`PAGE_SIZE`] rows. Pages are
/// fetched one at a time, in order.
pub struct QueryPager<'a, F: PageFetcher, B: Backoff = TokioBackoff> {
    fetcher: &'a F,
    retry: RetryPolicy,
    backoff: B,
}

impl<'a, F: PageFetcher> QueryPager<'a, F, TokioBackoff> {
    pub fn new(fetcher: &'a F, retry: RetryPolicy) -> Self {
        QueryPager {
            fetcher,
            retry,
            backoff: TokioBackoff,
        }
    }
}

impl<'a, F: PageFetcher, B: Backoff> QueryPager<'a, F, B> {
    /// Pager with a caller-supplied sleep implementation
    pub fn with_backoff(fetcher: &'a F, retry: RetryPolicy, backoff: B) -> Self {
        QueryPager {
            fetcher,
            retry,
            backoff,
        }
    }

    /// Fetch every page of the template and concatenate the solutions in
    /// page order.
    pub async fn run(&self, template: &str) -> SparqlResult<SelectResults> {
        validate_template(template)?;

        let mut offset = 0usize;
        let mut all = SelectResults::empty();
        loop {
            let page_query = template.replace("?offset", &offset.to_string());
            let page = self.fetch_with_retry(&page_query).await?;
            let rows = page.len();
            debug!(offset, rows, "fetched page");
            all.append_page(page);
            if rows < PAGE_SIZE {
                break;
            }
            offset += PAGE_SIZE;
        }
        Ok(all)
    }

    /// Like [`run`](Self::run), flattened to rows of plain literal values.
    pub async fn run_literal(&self, template: &str) -> SparqlResult<Vec<Vec<String>>> {
        Ok(self.run(template).await?.into_rows())
    }

    async fn fetch_with_retry(&self, query: &str) -> SparqlResult<SelectResults> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            match self.fetcher.fetch_page(query).await {
                Ok(page) => return Ok(page),
                Err(err) if err.is_transient() && attempts <= self.retry.max_retries => {
                    warn!(attempt = attempts, error = %err, "page fetch failed, backing off");
                    self.backoff.wait(self.retry.backoff).await;
                }
                Err(err) if err.is_transient() => {
                    return Err(SparqlError::RetriesExhausted {
                        attempts,
                        source: Box::new(err),
                    });
                }
                Err(err) => return Err(err),
            }
        }
    }
}
