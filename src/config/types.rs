use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for quotelines
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Source site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the paginated quotes site
    #[serde(rename = "input-url")]
    pub input_url: String,

    /// Optional proxy address. Carried through for configuration
    /// compatibility but not wired into the browser transport.
    #[serde(default)]
    pub proxy: Option<String>,
}

/// Crawler timing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Fixed pause before extracting each page, to let client-side
    /// rendering settle (milliseconds)
    #[serde(rename = "settle-delay-ms", default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Maximum time to wait for quote content to appear on a page (seconds)
    #[serde(rename = "wait-budget-secs", default = "default_wait_budget_secs")]
    pub wait_budget_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON Lines records file
    #[serde(rename = "records-path")]
    pub records_path: String,
}

/// Browser launch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// Run Chrome in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width in pixels
    #[serde(rename = "window-width", default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height in pixels
    #[serde(rename = "window-height", default = "default_window_height")]
    pub window_height: u32,

    /// Additional Chrome command-line flags
    #[serde(rename = "chrome-flags", default)]
    pub chrome_flags: Vec<String>,
}

fn default_settle_delay_ms() -> u64 {
    5000
}

fn default_wait_budget_secs() -> u64 {
    20
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            wait_budget_secs: default_wait_budget_secs(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            chrome_flags: Vec::new(),
        }
    }
}

impl CrawlerConfig {
    /// Settle delay as a Duration
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Wait budget as a Duration
    pub fn wait_budget(&self) -> Duration {
        Duration::from_secs(self.wait_budget_secs)
    }
}
