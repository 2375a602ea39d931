//! Configuration module for Doc-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files that control the crawl (site, budget, politeness, output paths).

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};
pub use validation::validate;
