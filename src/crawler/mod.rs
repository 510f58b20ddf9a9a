//! Crawler module for page fetching and discount discovery
//!
//! This module contains the pipeline stages, including:
//! - HTTP fetching behind the [`PageFetcher`] seam
//! - The parsed page view and one-hop link extraction
//! - The discount pipeline tying the stages together

mod document;
mod fetcher;
mod links;
mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use document::{Anchor, Element, PageDocument};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use links::extract_links;
pub use pipeline::{DiscountPipeline, DiscountReport};

use crate::config::Config;
use crate::output::{CsvExporter, RecordExporter};
use crate::ScoutError;

/// Runs a complete discount scan
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client
/// 2. Run the pipeline from the configured seed URL
/// 3. Append the discounts found to the CSV store
///
/// # Returns
///
/// * `Ok(DiscountReport)` - Scan finished and every discount was written
/// * `Err(ScoutError)` - The client could not be built or the CSV store could
///   not be written
pub async fn run(config: &Config) -> Result<DiscountReport, ScoutError> {
    let fetcher = HttpFetcher::from_config(&config.http)?;
    let pipeline = DiscountPipeline::new(
        fetcher,
        config.site.clone(),
        config.crawl.discount_rule,
    );

    let report = pipeline.find_discounts(&config.crawl.seed_url).await;

    let exporter = CsvExporter::new(&config.output.csv_path);
    let written = exporter.export(&report.records())?;
    tracing::info!(
        "Appended {} rows to {}",
        written,
        exporter.path().display()
    );

    Ok(report)
}
