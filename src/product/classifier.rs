//! Product page classification
//!
//! A URL is a product page when it is on the configured site, can be fetched,
//! and its markup carries the site's product marker class. Every failure on
//! the way classifies the URL as "not a product page".

use crate::crawler::{PageDocument, PageFetcher};
use crate::product::SiteRules;

/// Decides which candidate URLs are product detail pages
pub struct ProductClassifier<'a, F> {
    fetcher: &'a F,
    rules: &'a SiteRules,
}

impl<'a, F: PageFetcher> ProductClassifier<'a, F> {
    pub fn new(fetcher: &'a F, rules: &'a SiteRules) -> Self {
        Self { fetcher, rules }
    }

    /// Returns true if the URL is a product page of the configured site
    pub async fn is_product_page(&self, url: &str) -> bool {
        self.classify(url).await.is_some()
    }

    /// Classifies a URL, handing back the product page document on success
    ///
    /// Off-site URLs are rejected before any request is made.
    pub async fn classify(&self, url: &str) -> Option<PageDocument> {
        if !self.rules.belongs_to_site(url) {
            tracing::trace!("Skipping off-site URL {}", url);
            return None;
        }

        let result = self.fetcher.fetch(url).await;
        let Some(document) = PageDocument::from_fetch(&result) else {
            tracing::debug!("Could not load candidate {}", url);
            return None;
        };

        if document.has_class(&self.rules.product_marker_class) {
            tracing::debug!("Product page: {}", url);
            Some(document)
        } else {
            tracing::trace!("Not a product page: {}", url);
            None
        }
    }
}
