//! Searchlight main entry point
//!
//! This is the command-line interface for the Searchlight crawler.

use anyhow::Context;
use clap::Parser;
use searchlight::config::{load_config_with_hash, Config};
use searchlight::crawler::run_crawl;
use searchlight::storage::open_index;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Searchlight: a scoped, polite web crawler
///
/// Searchlight crawls pages under a set of seed URLs while respecting
/// robots.txt and per-host crawl delays, and stores each page's title and
/// content in a full-text searchable SQLite index.
#[derive(Parser, Debug)]
#[command(name = "searchlight")]
#[command(version)]
#[command(about = "A scoped, polite web crawler", long_about = None)]
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

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show the number of indexed pages and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_crawl(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("searchlight=info,warn"),
            1 => EnvFilter::new("searchlight=debug,info"),
            2 => EnvFilter::new("searchlight=trace,debug"),
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

/// Handles the --dry-run mode: shows the validated settings
fn handle_dry_run(config: &Config) {
    println!("=== Searchlight Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Default delay: {}s", config.crawler.default_delay);
    println!("  Requeue pause: {}ms", config.crawler.requeue_pause_ms);
    match config.crawler.request_timeout_secs {
        Some(secs) => println!("  Request timeout: {}s", secs),
        None => println!("  Request timeout: none"),
    }

    println!("\nUser Agent:");
    println!("  Header: {}", config.user_agent.header_value());
    println!("  Robots agent: {}", config.user_agent.robots_agent());

    println!("\nIndex:");
    println!("  Database: {}", config.index.database_path);

    println!("\nSeeds ({}):", config.crawler.seed_links.len());
    for seed in &config.crawler.seed_links {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --stats mode: shows what the index holds
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}\n", config.index.database_path);

    let index = open_index(Path::new(&config.index.database_path))
        .with_context(|| format!("Failed to open index {}", config.index.database_path))?;
    let count = index.count_pages().context("Failed to count pages")?;

    println!("Indexed pages: {}", count);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Seed URLs: {}", config.crawler.seed_links.len());

    let index = open_index(Path::new(&config.index.database_path))
        .with_context(|| format!("Failed to open index {}", config.index.database_path))?;

    let stats = run_crawl(config, index).await.context("Crawl failed")?;
    tracing::info!("Crawl finished: {}", stats);

    Ok(())
}
