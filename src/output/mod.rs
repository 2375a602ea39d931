//! Output module for assembling and persisting crawl results
//!
//! This module handles:
//! - Assembling extracted records into one ordered markdown document
//! - Writing the document and the structured JSON export to disk

mod document;
mod json;

pub use document::{assemble_document, write_document};
pub use json::write_json;
