//! Configuration module for Discount Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use discount_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("discount-scout.toml")).unwrap();
//! println!("Seed page: {}", config.crawl.seed_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, HttpConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};

pub use validation::validate_seed_url;
