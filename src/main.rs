//! Doc-Harvest main entry point
//!
//! This is the command-line interface for the Doc-Harvest documentation
//! crawler.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use doc_harvest::config::load_config;
use doc_harvest::crawler::{crawl, CrawlOutcome};
use doc_harvest::output::{assemble_document, write_document, write_json};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Doc-Harvest: a documentation site crawler and aggregator
///
/// Doc-Harvest crawls a documentation website within a page budget,
/// extracts structured content with code blocks isolated, and assembles
/// everything into a single ordered markdown document.
#[derive(Parser, Debug)]
#[command(name = "doc-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A documentation site crawler and aggregator", long_about = None)]
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

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("doc_harvest=info,warn"),
            1 => EnvFilter::new("doc_harvest=debug,info"),
            2 => EnvFilter::new("doc_harvest=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &doc_harvest::config::Config) {
    println!("=== Doc-Harvest Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    if config.site.seeds.is_empty() {
        println!("  Seeds: default top-level sections");
    } else {
        println!("  Seeds ({}):", config.site.seeds.len());
        for seed in &config.site.seeds {
            println!("    - {}", seed);
        }
    }

    println!("\nCrawler:");
    println!("  Page budget: {}", config.crawler.page_budget);
    println!(
        "  Politeness delay: {}ms",
        config.crawler.politeness_delay_ms
    );
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Document: {}", config.output.document_path);
    match &config.output.json_path {
        Some(path) => println!("  JSON export: {}", path),
        None => println!("  JSON export: disabled"),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation: crawl, assemble, write outputs
async fn handle_crawl(config: doc_harvest::config::Config) -> anyhow::Result<()> {
    let output = config.output.clone();

    let report = crawl(config).await.context("Crawl failed")?;

    let outcome = match report.outcome {
        CrawlOutcome::Exhausted => "frontier exhausted",
        CrawlOutcome::BudgetReached => "page budget reached",
    };

    tracing::info!("Assembling document from {} records", report.records.len());
    let document = assemble_document(&report.records, &output.document_title, Utc::now());

    write_document(Path::new(&output.document_path), &document)
        .with_context(|| format!("Failed to write document to {}", output.document_path))?;
    println!("✓ Document written to: {}", output.document_path);

    if let Some(json_path) = &output.json_path {
        write_json(Path::new(json_path), &report.records)
            .with_context(|| format!("Failed to write JSON export to {}", json_path))?;
        println!("✓ JSON export written to: {}", json_path);
    }

    println!(
        "Done: {} pages visited, {} records stored ({})",
        report.pages_visited,
        report.records.len(),
        outcome
    );

    Ok(())
}
