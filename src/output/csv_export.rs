//! CSV discount store
//!
//! Rows are `product_url,original_price,current_price` with no header line.

use crate::output::traits::{ExportResult, RecordExporter};
use crate::product::DiscountRecord;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Appends discount records to a CSV file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordExporter for CsvExporter {
    fn export(&self, records: &[DiscountRecord]) -> ExportResult<usize> {
        // Opened per call and dropped on return; no handle outlives the export
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} rows to {}", records.len(), self.path.display());
        Ok(records.len())
    }
}

/// Reads every row of a CSV discount store, in file order
///
/// A missing file reads as an empty store.
pub fn read_records(path: &Path) -> ExportResult<Vec<DiscountRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
