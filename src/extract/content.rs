//! Structured content extraction from parsed documentation pages
//!
//! Extraction isolates code blocks from prose so that code whitespace
//! survives untouched: every `pre`/`code` element in the content region is
//! captured verbatim and stands in for itself in the body text as a
//! `[CODE_BLOCK_i]` placeholder, which the document assembler later
//! replaces with a fenced block.

use crate::url::{categorize, Category};
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node, Selector};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use url::Url;

/// Elements whose text makes up the body, in the order they are rendered
const TEXT_ELEMENTS: &str = "p, h1, h2, h3, h4, h5, h6, li, td, th, pre";

/// Minimum trimmed text length for a fragment to survive the noise filter
/// (strictly greater-than; a 10-character fragment is dropped)
const MIN_TEXT_LEN: usize = 10;

/// The structured extraction result for one page
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    /// Source URL of the page (unique key)
    pub url: String,

    /// Text of the first top-level heading, if any
    pub title: Option<String>,

    /// Topical bucket assigned from the URL path
    pub category: Category,

    /// Body text with headings, list markers, and code placeholders
    pub body: String,

    /// Code blocks in document order, whitespace preserved
    pub code_blocks: Vec<CodeBlock>,
}

/// A single isolated code block
#[derive(Debug, Clone, Serialize)]
pub struct CodeBlock {
    /// Stable 0-based position within the page
    pub index: usize,

    /// Language hint read from the element's first class token; may be
    /// empty, and may be a layout class rather than a real language
    pub language: String,

    /// Raw code text, whitespace preserved byte-for-byte
    pub code: String,
}

impl PageRecord {
    /// True when the page yielded nothing worth storing
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.code_blocks.is_empty()
    }
}

/// Formats the placeholder token that stands in for code block `index`
pub fn code_placeholder(index: usize) -> String {
    format!("[CODE_BLOCK_{}]", index)
}

/// Extracts a structured record from a parsed page
///
/// The content region is located with a prioritized fallback chain
/// (`main`, then `article`, then `div.content`, then any div whose class
/// attribute loosely indicates content). A page without a recognizable
/// region produces a record with an empty body and no code blocks, which
/// callers must not store.
pub fn extract_content(doc: &Html, url: &Url) -> PageRecord {
    let title = extract_title(doc);
    let category = categorize(url);

    let (body, code_blocks) = match find_content_region(doc) {
        Some(region) => extract_region(region),
        None => (String::new(), Vec::new()),
    };

    PageRecord {
        url: url.to_string(),
        title,
        category,
        body,
        code_blocks,
    }
}

/// Extracts the page title from the first h1 anywhere in the document
fn extract_title(doc: &Html) -> Option<String> {
    let selector = Selector::parse("h1").ok()?;

    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Locates the main content region via the prioritized fallback chain
fn find_content_region(doc: &Html) -> Option<ElementRef<'_>> {
    for css in ["main", "article", "div.content"] {
        if let Ok(selector) = Selector::parse(css) {
            if let Some(region) = doc.select(&selector).next() {
                return Some(region);
            }
        }
    }

    // Last resort: any div whose class attribute hints at content
    let selector = Selector::parse("div").ok()?;
    doc.select(&selector).find(|el| {
        el.value().attr("class").is_some_and(|class| {
            let class = class.to_lowercase();
            class.contains("doc") || class.contains("content") || class.contains("main")
        })
    })
}

/// Extracts body text and code blocks from the content region
fn extract_region(region: ElementRef<'_>) -> (String, Vec<CodeBlock>) {
    let (code_blocks, code_ids) = collect_code_blocks(region);

    let mut emitted: HashSet<usize> = HashSet::new();
    let mut fragments: Vec<String> = Vec::new();

    if let Ok(selector) = Selector::parse(TEXT_ELEMENTS) {
        for el in region.select(&selector) {
            let raw = text_with_placeholders(el, &code_ids, &mut emitted);
            let text = raw.trim();

            // Noise filter: short fragments like button labels. Placeholder
            // tokens are longer than the threshold, so they always survive.
            if text.chars().count() <= MIN_TEXT_LEN {
                continue;
            }

            let name = el.value().name();
            let fragment = if let Some(level) = heading_level(name) {
                format!("\n{} {}\n", "#".repeat(level), text)
            } else if name == "li" {
                format!("- {}", text)
            } else {
                text.to_string()
            };
            fragments.push(fragment);
        }
    }

    // A block the walk never reached would vanish from the assembled
    // document; append its placeholder so every block surfaces exactly once.
    for block in &code_blocks {
        if emitted.insert(block.index) {
            fragments.push(code_placeholder(block.index));
        }
    }

    (fragments.join("\n\n"), code_blocks)
}

/// Captures every pre/code element in the region in document order
///
/// An element nested inside an already-captured one (the common
/// `<pre><code>` pairing) is the same block and is skipped, keeping
/// indices contiguous.
fn collect_code_blocks(region: ElementRef<'_>) -> (Vec<CodeBlock>, HashMap<NodeId, usize>) {
    let mut blocks = Vec::new();
    let mut ids: HashMap<NodeId, usize> = HashMap::new();

    if let Ok(selector) = Selector::parse("pre, code") {
        for el in region.select(&selector) {
            if el.ancestors().any(|a| ids.contains_key(&a.id())) {
                continue;
            }

            let index = blocks.len();
            let language = el
                .value()
                .attr("class")
                .and_then(|c| c.split_whitespace().next())
                .unwrap_or("")
                .to_string();

            ids.insert(el.id(), index);
            blocks.push(CodeBlock {
                index,
                language,
                // no trimming: code semantics depend on whitespace
                code: el.text().collect(),
            });
        }
    }

    (blocks, ids)
}

/// Collects the visible text of an element, substituting each captured
/// code element with its placeholder token
///
/// Every placeholder is emitted at most once across the whole body walk,
/// so nested walks (an li and the pre inside it) cannot duplicate it.
fn text_with_placeholders(
    el: ElementRef<'_>,
    code_ids: &HashMap<NodeId, usize>,
    emitted: &mut HashSet<usize>,
) -> String {
    let mut out = String::new();

    if let Some(&index) = code_ids.get(&el.id()) {
        if emitted.insert(index) {
            out.push_str(&code_placeholder(index));
        }
        return out;
    }

    let mut stack: Vec<_> = el.children().collect();
    stack.reverse();
    while let Some(node) = stack.pop() {
        if let Some(&index) = code_ids.get(&node.id()) {
            if emitted.insert(index) {
                out.push_str(&code_placeholder(index));
            }
            continue;
        }

        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                let at = stack.len();
                stack.extend(node.children());
                stack[at..].reverse();
            }
            _ => {}
        }
    }

    out
}

/// Maps a heading tag name to its level, or None for non-headings
fn heading_level(name: &str) -> Option<usize> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}
