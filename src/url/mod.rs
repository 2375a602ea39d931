//! URL handling module for Doc-Harvest
//!
//! This module decides which URLs are in scope for the crawl, assigns
//! topical categories from URL paths, and resolves discovered hrefs.

mod category;
mod resolve;
mod scope;

pub use category::{categorize, Category};
pub use resolve::resolve_link;
pub use scope::is_in_scope;
