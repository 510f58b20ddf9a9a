//! One-hop link extraction

use crate::crawler::document::PageDocument;
use crate::url::resolve_href;
use std::collections::HashSet;
use url::Url;

/// Collects the absolute URLs of every anchor on a page
///
/// Each href is joined onto `base_url`; duplicates collapse into one entry.
/// Only the page's direct links are returned, nothing is followed.
///
/// # Example
///
/// ```
/// use discount_scout::crawler::{extract_links, PageDocument};
/// use url::Url;
///
/// let base = Url::parse("https://shop.example.com/list").unwrap();
/// let doc = PageDocument::parse(r#"<a href="/p/1">A</a><a href="/p/1">A again</a>"#, base.clone());
/// let links = extract_links(&doc, &base);
/// assert_eq!(links.len(), 1);
/// assert!(links.contains("https://shop.example.com/p/1"));
/// ```
pub fn extract_links(document: &PageDocument, base_url: &Url) -> HashSet<String> {
    document
        .find_all_anchors()
        .iter()
        .filter_map(|anchor| resolve_href(&anchor.href, base_url))
        .collect()
}
