//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with bounded timeouts
//! - Frontier queue and visited-set management
//! - Page budget and politeness delay enforcement
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;

pub use coordinator::{CrawlOutcome, CrawlReport, Crawler};
pub use fetcher::{build_http_client, fetch_url};
pub use frontier::Frontier;

use crate::config::Config;
use crate::HarvestError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It seeds the
/// frontier, drives the fetch/extract loop to completion, and returns the
/// collected records.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl terminated normally (exhausted or budget)
/// * `Err(HarvestError)` - Setup failed before the loop could start
pub async fn crawl(config: Config) -> Result<CrawlReport, HarvestError> {
    let crawler = Crawler::new(config)?;
    crawler.run().await
}
