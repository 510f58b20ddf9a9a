//! Queryable view over fetched HTML
//!
//! [`PageDocument`] hides the parsing engine behind the few lookups the
//! pipeline needs. Every lookup fails softly: a missing element is `None`,
//! never an error.

use crate::crawler::fetcher::FetchResult;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A parsed HTML page together with the URL it was finally served from
pub struct PageDocument {
    html: Html,
    base_url: Url,
}

/// An element found by a class lookup
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

/// An `<a>` element with a non-empty href, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Visible link text, whitespace collapsed
    pub text: String,
    /// The raw href attribute, unresolved
    pub href: String,
}

impl PageDocument {
    /// Builds a document from a fetch result
    ///
    /// Returns `None` when the fetch failed or its resolved URL is not a valid
    /// absolute URL, so a document always stands for a page that was served.
    pub fn from_fetch(result: &FetchResult) -> Option<Self> {
        let content = result.content.as_deref()?;
        let base_url = match Url::parse(&result.resolved_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Unusable resolved URL {}: {}", result.resolved_url, e);
                return None;
            }
        };

        Some(Self::parse(content, base_url))
    }

    /// Parses HTML text that was served from `base_url`
    pub fn parse(html: &str, base_url: Url) -> Self {
        Self {
            html: Html::parse_document(html),
            base_url,
        }
    }

    /// The URL relative links on this page resolve against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Finds the first element whose class list contains `name`
    ///
    /// Names that cannot form a CSS class selector are treated as not found.
    pub fn find_first_by_class(&self, name: &str) -> Option<Element<'_>> {
        let selector = class_selector(name)?;
        self.html
            .select(&selector)
            .next()
            .map(|inner| Element { inner })
    }

    /// Returns true if any element carries the class
    pub fn has_class(&self, name: &str) -> bool {
        self.find_first_by_class(name).is_some()
    }

    /// Collects every anchor with a non-empty href
    pub fn find_all_anchors(&self) -> Vec<Anchor> {
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        self.html
            .select(&selector)
            .filter_map(|element| {
                let href = element.value().attr("href")?.trim();
                if href.is_empty() {
                    return None;
                }
                Some(Anchor {
                    text: collapse_text(element),
                    href: href.to_string(),
                })
            })
            .collect()
    }

    /// Extracts the page title from the `<title>` tag
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;

        self.html
            .select(&selector)
            .next()
            .map(collapse_text)
            .filter(|s| !s.is_empty())
    }
}

impl<'a> Element<'a> {
    /// Text content of the element and its descendants, whitespace collapsed
    pub fn text(&self) -> String {
        collapse_text(self.inner)
    }

    /// Value of an attribute on the element
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }
}

fn class_selector(name: &str) -> Option<Selector> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Selector::parse(&format!(".{}", name)).ok()
}

fn collapse_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
