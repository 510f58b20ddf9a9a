//! Output module for persisting and reporting discounts
//!
//! This module handles:
//! - Appending discount records to the CSV store
//! - Reading the store back
//! - Formatting the end-of-run summary

mod csv_export;
pub mod summary;
mod traits;

pub use csv_export::{read_records, CsvExporter};
pub use summary::{format_records, format_summary, print_summary};
pub use traits::{ExportError, ExportResult, RecordExporter};
