use url::Url;

/// File extensions that never hold documentation content (images,
/// stylesheets, scripts, PDFs)
const EXCLUDED_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".css", ".js", ".pdf",
];

/// Checks whether a URL belongs to the documentation site being crawled
///
/// A URL is in scope when its host starts with the configured
/// documentation host and it does not end in an asset extension.
///
/// # Arguments
///
/// * `url` - The absolute URL to check
/// * `docs_host` - The configured documentation host (e.g. "docs.example.com")
///
/// # Examples
///
/// ```
/// use doc_harvest::url::is_in_scope;
/// use url::Url;
///
/// let url = Url::parse("https://docs.example.com/workflows/").unwrap();
/// assert!(is_in_scope(&url, "docs.example.com"));
///
/// let asset = Url::parse("https://docs.example.com/logo.png").unwrap();
/// assert!(!is_in_scope(&asset, "docs.example.com"));
/// ```
pub fn is_in_scope(url: &Url, docs_host: &str) -> bool {
    let host = match url.host_str() {
        Some(h) => h,
        None => return false,
    };

    if !host.starts_with(docs_host) {
        return false;
    }

    let lowered = url.as_str().to_lowercase();
    !EXCLUDED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}
