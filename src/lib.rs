//! Quotelines: a headless-browser quote scraper
//!
//! This crate drives a headless Chrome session through a paginated quotes
//! site, extracts quote text, author, and tags from the rendered markup,
//! and persists the records as JSON Lines.

pub mod browser;
pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for quotelines operations
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Browser error: {0}")]
    Browser(#[from] browser::BrowserError),

    #[error("Extraction error: {0}")]
    Extract(#[from] crawler::ExtractError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for quotelines operations
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use browser::{BrowserError, ChromeDriver, PageDriver};
pub use config::Config;
pub use crawler::{CrawlOutcome, CrawlReport, ExtractError, PageCrawler, QuoteRecord};
