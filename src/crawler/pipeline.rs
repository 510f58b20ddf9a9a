//! Discount pipeline
//!
//! seed URL -> fetch -> links -> product pages -> prices -> discounts
//!
//! Every stage may come up empty. A missing seed page, an unreachable product
//! or an unreadable price only shrinks the report; nothing here returns an
//! error.

use crate::crawler::links::extract_links;
use crate::crawler::{PageDocument, PageFetcher};
use crate::product::{DiscountRecord, DiscountRule, Product, ProductClassifier, SiteRules};
use std::collections::HashMap;

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountReport {
    /// Seed URL the run started from
    pub seed_url: String,
    /// Title of the seed page, if it was served and had one
    pub seed_title: Option<String>,
    /// Distinct links found on the seed page
    pub links_found: usize,
    /// The links themselves, sorted
    pub links: Vec<String>,
    /// Links that passed the site pre-filter
    pub on_site_links: usize,
    /// URLs classified as product pages
    pub product_pages: Vec<String>,
    /// Discounted products keyed by URL
    pub discounts: HashMap<String, DiscountRecord>,
}

impl DiscountReport {
    fn empty(seed_url: &str) -> Self {
        Self {
            seed_url: seed_url.to_string(),
            ..Self::default()
        }
    }

    /// Discount records sorted by URL
    pub fn records(&self) -> Vec<DiscountRecord> {
        let mut records: Vec<DiscountRecord> = self.discounts.values().cloned().collect();
        records.sort_by(|a, b| a.url.cmp(&b.url));
        records
    }
}

/// Finds discounted products reachable in one hop from a seed page
pub struct DiscountPipeline<F> {
    fetcher: F,
    rules: SiteRules,
    discount_rule: DiscountRule,
}

impl<F: PageFetcher> DiscountPipeline<F> {
    pub fn new(fetcher: F, rules: SiteRules, discount_rule: DiscountRule) -> Self {
        Self {
            fetcher,
            rules,
            discount_rule,
        }
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Runs every stage for `seed_url`
    ///
    /// Candidate pages are fetched one at a time. A URL linked several times
    /// on the seed page is only visited once.
    pub async fn find_discounts(&self, seed_url: &str) -> DiscountReport {
        let mut report = DiscountReport::empty(seed_url);

        tracing::info!("Fetching seed page {}", seed_url);
        let seed = self.fetcher.fetch(seed_url).await;

        let links = {
            let Some(document) = PageDocument::from_fetch(&seed) else {
                tracing::warn!("Seed page {} could not be loaded", seed_url);
                return report;
            };
            report.seed_title = document.title();
            extract_links(&document, document.base_url())
        };
        report.links_found = links.len();
        report.links = links.into_iter().collect();
        report.links.sort();

        let candidates: Vec<String> = report
            .links
            .iter()
            .filter(|url| self.rules.belongs_to_site(url))
            .cloned()
            .collect();
        report.on_site_links = candidates.len();

        tracing::info!(
            "Seed page has {} links, {} on site",
            report.links_found,
            report.on_site_links
        );

        let classifier = ProductClassifier::new(&self.fetcher, &self.rules);

        for url in candidates {
            let Some(document) = classifier.classify(&url).await else {
                continue;
            };
            report.product_pages.push(url.clone());

            let product = self.price_product(&url, &document);
            match product.discount_record(self.discount_rule) {
                Some(record) => {
                    tracing::info!(
                        "Discount: {} ({} -> {})",
                        record.url,
                        record.original_price,
                        record.current_price
                    );
                    report.discounts.insert(url, record);
                }
                None => {
                    tracing::debug!(
                        "No discount for {} (original {:?}, current {:?})",
                        url,
                        product.original_price(),
                        product.current_price()
                    );
                }
            }
        }

        tracing::info!(
            "Found {} product pages, {} discounted",
            report.product_pages.len(),
            report.discounts.len()
        );

        report
    }

    fn price_product(&self, url: &str, document: &PageDocument) -> Product {
        let mut product = Product::new(url);
        product.set_current_price(document, &self.rules.current_price_class);
        product.set_original_price(document, &self.rules.original_price_class);
        product
    }
}
