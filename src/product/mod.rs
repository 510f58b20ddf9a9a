//! Product model, classification and price extraction
//!
//! A [`Product`] only holds its URL and prices. Fetching and querying stay in
//! the crawler module; the product reads prices from a [`PageDocument`] it is
//! handed.

mod classifier;
mod price;
mod rules;

pub use classifier::ProductClassifier;
pub use price::extract_price;
pub use rules::SiteRules;

use crate::crawler::PageDocument;
use serde::{Deserialize, Serialize};

/// Criterion for calling a priced product discounted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountRule {
    /// An original price element exists, whatever its value
    #[default]
    OriginalPresent,
    /// The original price is strictly greater than the current price
    OriginalGreater,
}

/// A product page and the prices read from it
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub url: String,
    current_price: Option<f64>,
    original_price: Option<f64>,
}

/// One persisted discount: a CSV row `product_url, original_price, current_price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountRecord {
    pub url: String,
    pub original_price: f64,
    pub current_price: f64,
}

impl Product {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            current_price: None,
            original_price: None,
        }
    }

    pub fn current_price(&self) -> Option<f64> {
        self.current_price
    }

    pub fn original_price(&self) -> Option<f64> {
        self.original_price
    }

    /// Reads the current price from the element with `class_name`
    ///
    /// The price is set at most once; later calls leave it untouched.
    pub fn set_current_price(&mut self, document: &PageDocument, class_name: &str) -> Option<f64> {
        if self.current_price.is_none() {
            self.current_price = price_by_class(document, class_name);
        }
        self.current_price
    }

    /// Reads the original price from the element with `class_name`
    ///
    /// The price is set at most once; later calls leave it untouched.
    pub fn set_original_price(
        &mut self,
        document: &PageDocument,
        class_name: &str,
    ) -> Option<f64> {
        if self.original_price.is_none() {
            self.original_price = price_by_class(document, class_name);
        }
        self.original_price
    }

    /// Returns true if the product counts as discounted under `rule`
    pub fn is_discounted(&self, rule: DiscountRule) -> bool {
        match rule {
            DiscountRule::OriginalPresent => self.original_price.is_some(),
            DiscountRule::OriginalGreater => matches!(
                (self.original_price, self.current_price),
                (Some(original), Some(current)) if original > current
            ),
        }
    }

    /// Builds the record to persist, if the product is discounted and both
    /// prices are known
    pub fn discount_record(&self, rule: DiscountRule) -> Option<DiscountRecord> {
        if !self.is_discounted(rule) {
            return None;
        }

        Some(DiscountRecord {
            url: self.url.clone(),
            original_price: self.original_price?,
            current_price: self.current_price?,
        })
    }
}

fn price_by_class(document: &PageDocument, class_name: &str) -> Option<f64> {
    let element = document.find_first_by_class(class_name)?;
    let text = element.text();
    let price = extract_price(&text);
    if price.is_none() {
        tracing::debug!("No number in price text {:?}", text);
    }
    price
}
