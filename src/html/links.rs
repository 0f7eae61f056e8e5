//! Anchor link extraction

use crate::html::document::{parse, Document};
use scraper::Selector;
use url::Url;

/// Collects the `href` of every anchor in document order
///
/// Anchors without an `href` attribute are skipped. With a base URL each
/// target is resolved against it; absolute targets come back unchanged and
/// a target that cannot be resolved is kept as written. Duplicates are kept.
///
/// # Example
///
/// ```
/// use quote_scraper::html::{extract_links, parse};
/// use url::Url;
///
/// let doc = parse(Some(r#"<a href="/a">A</a><a href="https://x.test/b">B</a>"#)).unwrap();
/// let base = Url::parse("https://x.test/").unwrap();
/// assert_eq!(
///     extract_links(&doc, Some(&base)),
///     vec!["https://x.test/a", "https://x.test/b"]
/// );
/// ```
pub fn extract_links(document: &Document, base_url: Option<&Url>) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select_with(&selector)
        .into_iter()
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| match base_url {
            Some(base) => resolve_link(href, base),
            None => href.to_string(),
        })
        .collect()
}

/// Parses `raw` first; missing or empty markup yields no links
pub fn extract_links_from_html(raw: Option<&str>, base_url: Option<&Url>) -> Vec<String> {
    parse(raw)
        .map(|doc| extract_links(&doc, base_url))
        .unwrap_or_default()
}

/// Resolves one target against the base URL
fn resolve_link(href: &str, base: &Url) -> String {
    match base.join(href) {
        Ok(absolute) => absolute.to_string(),
        Err(e) => {
            tracing::debug!("Keeping unresolvable link '{}': {}", href, e);
            href.to_string()
        }
    }
}
