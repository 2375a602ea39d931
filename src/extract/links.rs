use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Collects every hyperlink target on a page as an absolute,
/// fragment-stripped URL
///
/// Hrefs that fail to resolve or use non-HTTP schemes are silently
/// discarded. Scope filtering is the caller's job.
pub fn extract_links(doc: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for el in doc.select(&selector) {
            if let Some(href) = el.value().attr("href") {
                if let Some(absolute) = resolve_link(href, base_url) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}
