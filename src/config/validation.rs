use crate::config::types::{Config, CrawlerConfig, OutputConfig, SourceConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates source configuration
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.input_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid input-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "input-url must use http or https scheme, got '{}'",
            url.scheme()
        )));
    }

    // The proxy is inert but must still be well-formed if present
    if let Some(proxy) = &config.proxy {
        Url::parse(proxy)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid proxy address: {}", e)))?;
    }

    Ok(())
}

/// Validates crawler timing configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.wait_budget_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "wait-budget-secs must be >= 1, got {}",
            config.wait_budget_secs
        )));
    }

    // settle_delay_ms may be zero (useful for static pages and tests)

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.records_path.is_empty() {
        return Err(ConfigError::Validation(
            "records-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::BrowserConfig;

    fn base_config() -> Config {
        Config {
            source: SourceConfig {
                input_url: "https://quotes.toscrape.com/".to_string(),
                proxy: None,
            },
            crawler: CrawlerConfig::default(),
            output: OutputConfig {
                records_path: "./quotes.jsonl".to_string(),
            },
            browser: BrowserConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&base_config()).is_ok());
    }

    #[test]
    fn test_invalid_input_url() {
        let mut config = base_config();
        config.source.input_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = base_config();
        config.source.input_url = "ftp://quotes.toscrape.com/".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_invalid_proxy_rejected() {
        let mut config = base_config();
        config.source.proxy = Some("::::".to_string());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_valid_proxy_accepted() {
        let mut config = base_config();
        config.source.proxy = Some("http://127.0.0.1:8080".to_string());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_wait_budget_rejected() {
        let mut config = base_config();
        config.crawler.wait_budget_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_settle_delay_allowed() {
        let mut config = base_config();
        config.crawler.settle_delay_ms = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_records_path_rejected() {
        let mut config = base_config();
        config.output.records_path = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
