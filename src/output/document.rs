//! Document assembly
//!
//! Turns the crawl's collected records into one ordered markdown document:
//! a header with generation metadata, a table of contents over the
//! categories present, and per-category sections with code blocks
//! reinserted where their placeholders sit.

use crate::extract::{code_placeholder, PageRecord};
use crate::HarvestError;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes an assembled document to a file
///
/// # Arguments
///
/// * `path` - Destination path for the markdown file
/// * `document` - The assembled document text
pub fn write_document(path: &Path, document: &str) -> Result<(), HarvestError> {
    let mut file = File::create(path)?;
    file.write_all(document.as_bytes())?;
    Ok(())
}

/// Assembles all extracted records into a single markdown document
///
/// Categories are ordered lexicographically by display name; records
/// within a category keep the order they were stored in. Every
/// `[CODE_BLOCK_i]` placeholder in a record body is replaced by a fenced
/// code block carrying the recorded language hint and raw code text.
///
/// # Arguments
///
/// * `records` - All stored page records, in insertion order
/// * `title` - Document title for the header
/// * `generated_at` - Timestamp rendered in the header
pub fn assemble_document(
    records: &[PageRecord],
    title: &str,
    generated_at: DateTime<Utc>,
) -> String {
    // BTreeMap keys give the sorted category order for TOC and sections
    let mut categories: BTreeMap<&str, Vec<&PageRecord>> = BTreeMap::new();
    for record in records {
        categories
            .entry(record.category.name())
            .or_default()
            .push(record);
    }

    let mut parts: Vec<String> = Vec::new();

    // Header
    parts.push(format!(
        "# {}\n*Generated on {}*\n*Total pages: {}*\n\n## Table of Contents\n",
        title,
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        records.len()
    ));

    // Table of contents
    for group in categories.values() {
        let category = group[0].category;
        parts.push(format!("- [{}](#{})", category.name(), category.slug()));
    }

    parts.push("\n---\n".to_string());

    // Category sections
    for (name, group) in &categories {
        parts.push(format!("\n## {}\n", name));

        for record in group {
            if let Some(page_title) = &record.title {
                parts.push(format!("\n### {}", page_title));
            }
            parts.push(format!("*Source: {}*\n", record.url));
            parts.push(render_body(record));
            parts.push("\n---\n".to_string());
        }
    }

    parts.join("\n")
}

/// Renders a record body with every code placeholder replaced by a fence
fn render_body(record: &PageRecord) -> String {
    let mut text = record.body.clone();

    for block in &record.code_blocks {
        let fence = format!("\n```{}\n{}\n```\n", block.language, block.code);
        text = text.replace(&code_placeholder(block.index), &fence);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::CodeBlock;
    use crate::url::Category;

    fn record(url: &str, title: Option<&str>, category: Category) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            title: title.map(String::from),
            category,
            body: "A body paragraph with enough text.".to_string(),
            code_blocks: vec![],
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-06-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_header_contains_title_and_count() {
        let records = vec![record("https://d/x", Some("X"), Category::General)];
        let doc = assemble_document(&records, "Example Docs", now());

        assert!(doc.starts_with("# Example Docs\n"));
        assert!(doc.contains("*Generated on 2025-06-01 12:00:00*"));
        assert!(doc.contains("*Total pages: 1*"));
    }

    #[test]
    fn test_toc_sorted_by_category_name() {
        let records = vec![
            record("https://d/w", Some("W"), Category::Workflows),
            record("https://d/a", Some("A"), Category::ApiReference),
            record("https://d/c", Some("C"), Category::CoreConcepts),
        ];
        let doc = assemble_document(&records, "Docs", now());

        let api = doc.find("- [API Reference](#api-reference)").unwrap();
        let core = doc.find("- [Core Concepts](#core-concepts)").unwrap();
        let workflows = doc.find("- [Workflows](#workflows)").unwrap();
        assert!(api < core && core < workflows);
    }

    #[test]
    fn test_record_order_within_category_preserved() {
        let mut first = record("https://d/1", Some("First"), Category::General);
        first.body = "First record body text here.".to_string();
        let mut second = record("https://d/2", Some("Second"), Category::General);
        second.body = "Second record body text here.".to_string();

        let doc = assemble_document(&[first, second], "Docs", now());
        assert!(doc.find("First record body").unwrap() < doc.find("Second record body").unwrap());
    }

    #[test]
    fn test_code_blocks_reinserted_in_order() {
        let mut rec = record("https://d/code", Some("Code"), Category::CodeAndExpressions);
        rec.body = format!(
            "Intro paragraph.\n\n{}\n\n{}\n\n{}",
            code_placeholder(0),
            code_placeholder(1),
            code_placeholder(2)
        );
        rec.code_blocks = vec![
            CodeBlock {
                index: 0,
                language: "js".to_string(),
                code: "const a = 1;".to_string(),
            },
            CodeBlock {
                index: 1,
                language: String::new(),
                code: "  indented\n    more\n".to_string(),
            },
            CodeBlock {
                index: 2,
                language: "bash".to_string(),
                code: "echo hi".to_string(),
            },
        ];

        let doc = assemble_document(&[rec], "Docs", now());

        assert_eq!(doc.matches("```").count(), 6); // three fences, open + close
        assert!(doc.contains("```js\nconst a = 1;\n```"));
        assert!(doc.contains("```\n  indented\n    more\n\n```"));
        assert!(doc.contains("```bash\necho hi\n```"));
        assert!(doc.find("const a = 1;").unwrap() < doc.find("echo hi").unwrap());
        // round trip: no residual placeholder tokens
        assert!(!doc.contains("[CODE_BLOCK_"));
    }

    #[test]
    fn test_record_without_title_still_rendered() {
        let rec = record("https://d/untitled", None, Category::General);
        let doc = assemble_document(&[rec], "Docs", now());

        assert!(doc.contains("*Source: https://d/untitled*"));
        assert!(doc.contains("A body paragraph with enough text."));
        assert!(!doc.contains("### "));
    }

    #[test]
    fn test_separator_after_each_record() {
        let records = vec![
            record("https://d/1", Some("One"), Category::General),
            record("https://d/2", Some("Two"), Category::Workflows),
        ];
        let doc = assemble_document(&records, "Docs", now());

        // one separator after the TOC plus one per record
        assert_eq!(doc.matches("\n---\n").count(), 3);
    }

    #[test]
    fn test_empty_run_produces_header_and_empty_toc() {
        let doc = assemble_document(&[], "Docs", now());
        assert!(doc.contains("*Total pages: 0*"));
        assert!(doc.contains("## Table of Contents"));
    }

    #[test]
    fn test_write_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.md");
        write_document(&path, "# Hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Hello\n");
    }
}
