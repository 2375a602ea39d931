use serde::Deserialize;

/// Main configuration structure for Doc-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Documentation site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the documentation site (e.g. "https://docs.example.com")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Explicit seed URLs; when empty the crawler seeds itself with the
    /// base URL joined against the default top-level section paths
    #[serde(default)]
    pub seeds: Vec<String>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages to visit in one run
    #[serde(rename = "page-budget")]
    pub page_budget: usize,

    /// Fixed delay between consecutive fetches (milliseconds)
    #[serde(rename = "politeness-delay-ms")]
    pub politeness_delay_ms: u64,

    /// Per-request fetch timeout (seconds)
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the assembled markdown document
    #[serde(rename = "document-path")]
    pub document_path: String,

    /// Optional path for the structured URL-to-record JSON export
    #[serde(rename = "json-path")]
    pub json_path: Option<String>,

    /// Title rendered at the top of the assembled document
    #[serde(rename = "document-title")]
    pub document_title: String,
}
