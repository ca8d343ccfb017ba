//! Headless Chrome implementation of the page driver

use crate::browser::{BrowserError, PageDriver};
use crate::config::BrowserConfig;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often the bounded wait re-checks for the selector
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Drives a single tab of a headless Chrome session
///
/// The browser process is owned by the driver and shut down when the
/// driver is dropped, so a crawl that terminates early still releases it.
pub struct ChromeDriver {
    // Held so the browser process outlives the tab
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeDriver {
    /// Launches a Chrome session with the given configuration
    pub fn launch(config: &BrowserConfig) -> Result<Self, BrowserError> {
        let flag_args: Vec<&OsStr> = config.chrome_flags.iter().map(OsStr::new).collect();

        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .args(flag_args)
            .build()
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| BrowserError::Launch(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::Launch(format!("Failed to open tab: {}", e)))?;

        Ok(Self {
            _browser: browser,
            tab,
        })
    }
}

impl PageDriver for ChromeDriver {
    fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        self.tab.navigate_to(url).map_err(|e| {
            BrowserError::Navigation(format!("Failed to navigate to {}: {}", url, e))
        })?;

        self.tab.wait_until_navigated().map_err(|e| {
            BrowserError::Navigation(format!("Navigation did not settle for {}: {}", url, e))
        })?;

        Ok(())
    }

    fn page_source(&self) -> Result<String, BrowserError> {
        self.tab
            .get_content()
            .map_err(|e| BrowserError::HtmlExtraction(e.to_string()))
    }

    fn wait_for_selector(&self, selector: &str, budget: Duration) -> Result<bool, BrowserError> {
        let script = format!(
            r#"document.querySelector('{}') !== null"#,
            selector.replace('\'', "\\'")
        );

        let start = Instant::now();
        loop {
            match self.tab.evaluate(&script, false) {
                Ok(result) => {
                    if result.value.and_then(|v| v.as_bool()) == Some(true) {
                        return Ok(true);
                    }
                }
                // Evaluation can fail transiently mid-navigation; keep polling
                Err(_) => {}
            }

            if start.elapsed() >= budget {
                return Ok(false);
            }

            std::thread::sleep(POLL_INTERVAL);
        }
    }
}
