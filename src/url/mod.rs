//! URL handling module for Discount Scout
//!
//! This module resolves anchor hrefs against the page they were found on and
//! decides whether a URL belongs to the configured shop site.

use url::Url;

/// Resolves an href against the resolved URL of the page it came from
///
/// Resolution follows standard URL-join semantics, so query strings and
/// fragments are kept exactly as the join produces them.
///
/// # Returns
///
/// * `Some(String)` - The absolute URL
/// * `None` - The href is empty or cannot be joined onto `base_url`
///
/// # Examples
///
/// ```
/// use discount_scout::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://shop.example.com/books/genres?page=1").unwrap();
/// assert_eq!(
///     resolve_href("item/42", &base),
///     Some("https://shop.example.com/books/item/42".to_string())
/// );
/// ```
pub fn resolve_href(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => Some(absolute_url.to_string()),
        Err(e) => {
            tracing::trace!("Skipping href {:?} on {}: {}", href, base_url, e);
            None
        }
    }
}

/// Returns true if the URL string contains the site's domain token
///
/// This is a plain substring test on the whole URL. It runs before any fetch
/// so off-site links never cost a request.
///
/// # Examples
///
/// ```
/// use discount_scout::url::belongs_to_site;
///
/// assert!(belongs_to_site("https://www.uoftbookstore.com/p/1", "uoftbookstore"));
/// assert!(!belongs_to_site("https://twitter.com/share", "uoftbookstore"));
/// ```
pub fn belongs_to_site(url: &str, domain_token: &str) -> bool {
    !domain_token.is_empty() && url.contains(domain_token)
}
