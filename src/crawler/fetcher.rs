//! HTTP fetcher implementation
//!
//! Builds the HTTP client with a descriptive identifying user agent and
//! performs single-page fetches with a bounded timeout. A non-2xx status
//! or network failure surfaces as an error; callers treat every fetch
//! error as non-fatal and isolated to that URL.

use crate::config::UserAgentConfig;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use doc_harvest::config::UserAgentConfig;
/// use doc_harvest::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "DocHarvest".to_string(),
///     crawler_version: "1.0".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page body with a bounded timeout
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `timeout` - Hard deadline for the whole request
///
/// # Returns
///
/// * `Ok(String)` - The response body for a 2xx response
/// * `Err(HarvestError)` - Timeout, network failure, or non-2xx status
pub async fn fetch_url(client: &Client, url: &Url, timeout: Duration) -> Result<String, HarvestError> {
    let response = client
        .get(url.clone())
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_error(e, url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(e, url))
}

/// Maps a reqwest error to the crawler's error type
fn classify_error(error: reqwest::Error, url: &Url) -> HarvestError {
    if error.is_timeout() {
        HarvestError::Timeout {
            url: url.to_string(),
        }
    } else {
        HarvestError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}
