//! Content extraction module
//!
//! Pure, stateless functions that turn a parsed page into a structured
//! [`PageRecord`] and a list of discovered links. Safe to call from any
//! thread; nothing here touches crawl state.

mod content;
mod links;

pub use content::{code_placeholder, extract_content, CodeBlock, PageRecord};
pub use links::extract_links;
