use crate::product::{DiscountRule, SiteRules};
use serde::Deserialize;

/// Main configuration structure for Discount Scout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub site: SiteRules,
    #[serde(default)]
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Crawl entry point configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Listing page whose direct links are scanned for products
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Criterion used to decide whether a priced product is discounted
    #[serde(rename = "discount-rule", default)]
    pub discount_rule: DiscountRule,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_user_agent() -> String {
    format!("discount-scout/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV file discount rows are appended to
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}
