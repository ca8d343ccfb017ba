//! Browser driver module
//!
//! This module defines the trait interface the crawler uses to talk to a
//! rendering browser, plus the headless Chrome implementation. The crawl
//! loop only depends on the trait, so tests can script page sequences
//! without launching a browser.

mod chrome;

pub use chrome::ChromeDriver;

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during browser operations
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Browser launch failed: {0}")]
    Launch(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("Script evaluation error: {0}")]
    Evaluation(String),

    #[error("HTML extraction error: {0}")]
    HtmlExtraction(String),
}

/// Driver interface for a single browser page
///
/// A timed-out wait is not an error: `wait_for_selector` returns
/// `Ok(false)` when the budget elapses without the element appearing,
/// and the crawl loop treats that as the end of pagination.
pub trait PageDriver {
    /// Navigates to the given URL and waits for the navigation to finish
    fn navigate(&self, url: &str) -> Result<(), BrowserError>;

    /// Returns the current page's rendered markup
    fn page_source(&self) -> Result<String, BrowserError>;

    /// Waits up to `budget` for an element matching the CSS selector
    ///
    /// Returns `Ok(true)` once the element is present, `Ok(false)` if the
    /// budget elapsed without it appearing.
    fn wait_for_selector(&self, selector: &str, budget: Duration) -> Result<bool, BrowserError>;
}
