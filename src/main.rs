//! Quote-Scraper main entry point
//!
//! This is the command-line interface for the quote scraper.

use anyhow::Context;
use clap::Parser;
use quote_scraper::config::{load_config, Config};
use quote_scraper::output::{print_preview, BANNER};
use quote_scraper::Coordinator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quote-Scraper: fetches one page of quotes and saves them as CSV
///
/// With no arguments it scrapes quotes.toscrape.com into quotes.csv.
#[derive(Parser, Debug)]
#[command(name = "quote-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes quotes from a web page into a CSV file", long_about = None)]
struct Cli {
    /// Page to scrape (overrides the configured target)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// CSV file to write (overrides the configured path)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Print the page's links instead of extracting quotes
    #[arg(long)]
    links: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let config = load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully");
            config
        }
        None => Config::default(),
    };

    if let Some(url) = cli.url {
        config.target.url = url;
    }
    if let Some(output) = cli.output {
        config.output.csv_path = output;
    }

    let mut coordinator = Coordinator::new(config).context("Failed to build HTTP client")?;

    if cli.links {
        for link in coordinator.collect_links(None).await {
            println!("{}", link);
        }
        return Ok(());
    }

    println!("{}", BANNER);
    let records = coordinator.run(None).await;
    print_preview(&records);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_scraper=info,warn"),
            1 => EnvFilter::new("quote_scraper=debug,info"),
            2 => EnvFilter::new("quote_scraper=trace,debug"),
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
