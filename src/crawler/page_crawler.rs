//! The pagination loop
//!
//! This module contains the core crawl sequencing: navigate to a page,
//! let client-side rendering settle, wait for quote content within a
//! bounded budget, extract records, and follow the next-page marker
//! until it disappears or a page fails to render in time.

use crate::browser::PageDriver;
use crate::crawler::extract::{extract_quotes, has_next_page, QuoteRecord};
use crate::QuoteError;
use std::time::Duration;

/// CSS class marking a quote container; also the readiness predicate
const QUOTE_SELECTOR: &str = ".quote";

/// How a crawl run ended
///
/// Both variants are graceful stops with whatever was accumulated so far;
/// the distinction lets callers tell "fully paginated" from "gave up on a
/// page that never rendered."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The last visited page carried no next-page marker
    Completed,
    /// A page failed the readiness wait within the budget
    TimedOut,
}

/// Result of a crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// All extracted records, in page order then document order
    pub records: Vec<QuoteRecord>,

    /// Number of pages records were extracted from (a timed-out page
    /// contributes nothing and is not counted)
    pub pages_visited: u32,

    /// How the run ended
    pub outcome: CrawlOutcome,
}

/// Sequentially paginates a quotes site and accumulates records
pub struct PageCrawler<D: PageDriver> {
    driver: D,
    base_url: String,
    settle_delay: Duration,
    wait_budget: Duration,
}

impl<D: PageDriver> PageCrawler<D> {
    /// Creates a crawler over the given driver
    ///
    /// `base_url` is the first page; subsequent pages follow the
    /// `<base>page/<n>/` template. It should end with a slash.
    pub fn new(driver: D, base_url: String, settle_delay: Duration, wait_budget: Duration) -> Self {
        Self {
            driver,
            base_url,
            settle_delay,
            wait_budget,
        }
    }

    /// Runs the crawl to completion
    ///
    /// The loop is strictly sequential: each page is fetched, settled,
    /// waited on, and extracted before the next is considered. A single
    /// readiness timeout ends the whole run; there are no retries.
    /// Malformed quote markup (missing text or author) aborts the run
    /// with an error.
    pub fn crawl(&self) -> Result<CrawlReport, QuoteError> {
        let mut records: Vec<QuoteRecord> = Vec::new();
        let mut pages_visited: u32 = 0;
        let mut page_num: u32 = 1;
        let mut url = self.base_url.clone();

        let outcome = loop {
            tracing::info!("Scraping page {}: {}", page_num, url);
            self.driver.navigate(&url)?;

            // Fixed settle pause for client-side rendering
            if !self.settle_delay.is_zero() {
                std::thread::sleep(self.settle_delay);
            }

            let ready = self
                .driver
                .wait_for_selector(QUOTE_SELECTOR, self.wait_budget)?;
            if !ready {
                tracing::warn!(
                    "No quote content on {} within {:?}, stopping with {} records",
                    url,
                    self.wait_budget,
                    records.len()
                );
                break CrawlOutcome::TimedOut;
            }

            let html = self.driver.page_source()?;

            let page_records = extract_quotes(&html)?;
            tracing::debug!("Extracted {} quotes from page {}", page_records.len(), page_num);
            records.extend(page_records);
            pages_visited += 1;

            if !has_next_page(&html) {
                break CrawlOutcome::Completed;
            }

            page_num += 1;
            url = format!("{}page/{}/", self.base_url, page_num);
        };

        tracing::info!(
            "Crawl finished ({:?}): {} records from {} pages",
            outcome,
            records.len(),
            pages_visited
        );

        Ok(CrawlReport {
            records,
            pages_visited,
            outcome,
        })
    }
}
