//! Quotelines main entry point
//!
//! Command-line interface for the headless-browser quote scraper.

use anyhow::Context;
use clap::Parser;
use quotelines::config::load_config;
use quotelines::crawler::scrape;
use quotelines::output::write_records;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Quotelines: scrape a paginated quotes site into JSON Lines
#[derive(Parser, Debug)]
#[command(name = "quotelines")]
#[command(version = "0.1.0")]
#[command(about = "Scrape a paginated quotes site into JSON Lines", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without launching a browser
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(&config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotelines=info,warn"),
            1 => EnvFilter::new("quotelines=debug,info"),
            2 => EnvFilter::new("quotelines=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &quotelines::config::Config) {
    println!("=== Quotelines Dry Run ===\n");

    println!("Source:");
    println!("  Input URL: {}", config.source.input_url);
    match &config.source.proxy {
        Some(proxy) => println!("  Proxy: {} (configured but not used)", proxy),
        None => println!("  Proxy: none"),
    }

    println!("\nCrawler:");
    println!("  Settle delay: {}ms", config.crawler.settle_delay_ms);
    println!("  Wait budget: {}s", config.crawler.wait_budget_secs);

    println!("\nBrowser:");
    println!("  Headless: {}", config.browser.headless);
    println!(
        "  Window size: {}x{}",
        config.browser.window_width, config.browser.window_height
    );

    println!("\nOutput:");
    println!("  Records: {}", config.output.records_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
fn handle_scrape(config: &quotelines::config::Config) -> anyhow::Result<()> {
    if let Some(proxy) = &config.source.proxy {
        tracing::warn!("Proxy {} is configured but not used by the browser", proxy);
    }

    tracing::info!("Starting scrape of {}", config.source.input_url);

    let report = scrape(config).context("Scrape failed")?;

    tracing::info!(
        "Scraped {} quotes from {} pages ({:?})",
        report.records.len(),
        report.pages_visited,
        report.outcome
    );

    let records_path = Path::new(&config.output.records_path);
    write_records(records_path, &report.records)
        .with_context(|| format!("Failed to write records to {}", records_path.display()))?;

    tracing::info!("Records written to {}", records_path.display());

    Ok(())
}
