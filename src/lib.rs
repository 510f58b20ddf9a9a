//! Discount Scout: finds discounted products on a single shop site
//!
//! This crate crawls the direct links of a seed listing page, keeps the ones
//! that are product pages for the configured site, extracts current and
//! original prices, and appends the discounted products to a CSV store.

pub mod config;
pub mod crawler;
pub mod output;
pub mod product;
pub mod url;

use thiserror::Error;

/// Main error type for Discount Scout operations
///
/// Only setup and persistence failures surface here. Fetch, parse and price
/// misses degrade to "absent" inside the pipeline and never reach this type.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Discount Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run, DiscountPipeline, DiscountReport, FetchResult, HttpFetcher, PageFetcher};
pub use output::{CsvExporter, RecordExporter};
pub use product::{extract_price, DiscountRecord, DiscountRule, Product, SiteRules};
