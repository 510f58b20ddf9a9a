//! Per-site markup rules

use crate::url::belongs_to_site;
use serde::Deserialize;

/// Markup conventions of one shop site
///
/// Every class name is matched against the `class` attribute of an element,
/// so a rule works whatever tag the site uses for the container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteRules {
    /// Substring every on-site URL contains (e.g. "uoftbookstore")
    #[serde(rename = "domain-token")]
    pub domain_token: String,

    /// Class of the container that only product detail pages have
    #[serde(rename = "product-marker-class")]
    pub product_marker_class: String,

    /// Class of the element holding the price currently charged
    #[serde(rename = "current-price-class")]
    pub current_price_class: String,

    /// Class of the element holding the pre-discount price
    #[serde(rename = "original-price-class")]
    pub original_price_class: String,
}

impl SiteRules {
    /// Rules for the University of Toronto Bookstore
    pub fn uoft_bookstore() -> Self {
        Self {
            domain_token: "uoftbookstore".to_string(),
            product_marker_class: "product-details-full".to_string(),
            current_price_class: "price-current".to_string(),
            original_price_class: "price-original".to_string(),
        }
    }

    /// Returns true if the URL is on this site
    pub fn belongs_to_site(&self, url: &str) -> bool {
        belongs_to_site(url, &self.domain_token)
    }
}
