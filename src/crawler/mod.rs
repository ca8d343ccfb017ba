//! Crawler module: pagination and extraction
//!
//! This module contains the core scraping logic:
//! - Pure quote extraction over rendered markup
//! - Next-page marker detection
//! - The sequential pagination loop

mod extract;
mod page_crawler;

pub use extract::{extract_quotes, has_next_page, ExtractError, QuoteRecord};
pub use page_crawler::{CrawlOutcome, CrawlReport, PageCrawler};

use crate::browser::ChromeDriver;
use crate::config::Config;
use crate::Result;

/// Runs a complete scrape against a real headless Chrome session
///
/// Launches the browser, paginates from the configured base URL, and
/// returns the accumulated records. The browser is released when this
/// function returns, including on the early-termination paths.
pub fn scrape(config: &Config) -> Result<CrawlReport> {
    let driver = ChromeDriver::launch(&config.browser)?;

    let crawler = PageCrawler::new(
        driver,
        config.source.input_url.clone(),
        config.crawler.settle_delay(),
        config.crawler.wait_budget(),
    );

    crawler.crawl()
}
