//! Crawler coordinator - main crawl orchestration logic
//!
//! This module drives the fetch → parse → extract → link-discovery cycle:
//! - Seeding and draining the frontier
//! - Atomic check-and-mark of the visited set before each fetch
//! - Enforcing the page budget and the politeness delay
//! - Collecting extracted records for the document assembler

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::crawler::frontier::Frontier;
use crate::extract::{extract_content, extract_links, PageRecord};
use crate::url::is_in_scope;
use crate::{HarvestError, UrlError};
use reqwest::Client;
use scraper::Html;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use url::Url;

/// Top-level section paths used to seed the frontier when the
/// configuration supplies no explicit seed list
const DEFAULT_SEED_PATHS: &[&str] = &[
    "/",
    "/getting-started/",
    "/nodes/",
    "/workflows/",
    "/api/",
    "/hosting/",
    "/code/",
    "/troubleshooting/",
];

/// How a crawl run ended; both variants are normal, successful termination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The frontier ran dry
    Exhausted,
    /// The visited count reached the page budget
    BudgetReached,
}

/// The result of a completed crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// Extracted records in the order they were stored
    pub records: Vec<PageRecord>,

    /// Total URLs visited (including failed fetches)
    pub pages_visited: usize,

    /// How the run terminated
    pub outcome: CrawlOutcome,
}

/// Main crawler structure owning all mutable crawl state
///
/// Visited set, frontier, and the content store live here rather than in
/// globals so independent runs can coexist (and tests can run crawls in
/// parallel).
pub struct Crawler {
    config: Config,
    client: Client,
    docs_host: String,
    frontier: Frontier,
    visited: HashSet<String>,
    records: Vec<PageRecord>,
}

impl Crawler {
    /// Creates a new crawler and seeds its frontier
    ///
    /// Seeds come from the configuration when given, otherwise from the
    /// base URL joined against the default top-level section paths.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(HarvestError)` - Unresolvable base URL or client build failure
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let base_url = Url::parse(&config.site.base_url)?;
        let docs_host = base_url
            .host_str()
            .ok_or(UrlError::MissingHost)?
            .to_string();

        let client = build_http_client(&config.user_agent)?;

        let mut frontier = Frontier::new();
        if config.site.seeds.is_empty() {
            for path in DEFAULT_SEED_PATHS {
                frontier.push(base_url.join(path)?);
            }
        } else {
            for seed in &config.site.seeds {
                frontier.push(Url::parse(seed)?);
            }
        }

        Ok(Self {
            config,
            client,
            docs_host,
            frontier,
            visited: HashSet::new(),
            records: Vec::new(),
        })
    }

    /// Runs the main crawl loop to completion
    ///
    /// Loops while the frontier is non-empty and the visited count is
    /// below the page budget:
    /// 1. Pop a URL; skip it if already visited
    /// 2. Mark it visited before fetching, so a broken page is never retried
    /// 3. Fetch with a bounded timeout; failures are logged and isolated
    /// 4. Extract content (stored if non-empty) and in-scope links
    /// 5. Sleep the politeness delay before the next fetch
    pub async fn run(mut self) -> Result<CrawlReport, HarvestError> {
        let budget = self.config.crawler.page_budget;
        let delay = Duration::from_millis(self.config.crawler.politeness_delay_ms);
        let timeout = Duration::from_secs(self.config.crawler.fetch_timeout_secs);
        let start = Instant::now();

        tracing::info!(
            "Starting crawl of {} ({} seeds, budget {} pages)",
            self.docs_host,
            self.frontier.len(),
            budget
        );

        let outcome = loop {
            if self.visited.len() >= budget {
                tracing::info!("Page budget of {} reached", budget);
                break CrawlOutcome::BudgetReached;
            }

            let url = match self.frontier.pop() {
                Some(url) => url,
                None => {
                    tracing::info!("Frontier is empty, crawl complete");
                    break CrawlOutcome::Exhausted;
                }
            };

            // Check-and-mark before fetching: a URL is visited at most once
            // per run, even if the fetch fails. The frontier deduplicates on
            // its own, so this is defensive.
            if !self.visited.insert(url.as_str().to_string()) {
                continue;
            }

            tracing::debug!("Fetching: {}", url);
            match fetch_url(&self.client, &url, timeout).await {
                Ok(body) => self.process_page(&url, &body),
                Err(e) => {
                    // Non-fatal: this URL yields no content and no links
                    tracing::warn!("Error fetching {}: {}", url, e);
                }
            }

            // Progress reporting every 10 pages
            if self.visited.len() % 10 == 0 {
                let rate = self.visited.len() as f64 / start.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages visited, {} records stored, {} in frontier, {:.2} pages/sec",
                    self.visited.len(),
                    self.records.len(),
                    self.frontier.len(),
                    rate
                );
            }

            // Politeness: hard floor between consecutive fetches. No sleep
            // after the last fetch of the run.
            if !self.frontier.is_empty() {
                tokio::time::sleep(delay).await;
            }
        };

        tracing::info!(
            "Crawl finished: {} pages visited, {} records stored in {:?}",
            self.visited.len(),
            self.records.len(),
            start.elapsed()
        );

        Ok(CrawlReport {
            pages_visited: self.visited.len(),
            records: self.records,
            outcome,
        })
    }

    /// Parses a fetched page, stores its record, and enqueues in-scope
    /// links
    ///
    /// Synchronous on purpose: the parsed DOM must not live across an
    /// await point.
    fn process_page(&mut self, url: &Url, body: &str) {
        let doc = Html::parse_document(body);

        let record = extract_content(&doc, url);
        if record.is_empty() {
            tracing::debug!("No extractable content at {}", url);
        } else {
            self.records.push(record);
        }

        for link in extract_links(&doc, url) {
            if is_in_scope(&link, &self.docs_host) && !self.visited.contains(link.as_str()) {
                self.frontier.push(link);
            }
        }
    }
}
