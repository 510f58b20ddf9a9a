//! Exporter traits and error types
//!
//! This module defines the trait interface for discount stores and the
//! errors they report.

use crate::product::DiscountRecord;
use thiserror::Error;

/// Errors that can occur while persisting discount records
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Trait for append-only discount stores
pub trait RecordExporter {
    /// Appends one row per record and makes them durable before returning
    ///
    /// Earlier rows are never rewritten or deduplicated, so exporting the same
    /// record twice stores it twice.
    ///
    /// # Returns
    ///
    /// The number of rows written
    fn export(&self, records: &[DiscountRecord]) -> ExportResult<usize>;
}
