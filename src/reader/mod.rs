//! Module for reading uploaded risk tables.
//!
//! The format is chosen from the filename extension alone: `csv` payloads
//! are decoded as UTF-8 comma-separated text, `xls`/`xlsx` payloads as
//! spreadsheet workbooks. After decoding, the header row must contain the
//! configured required columns.

pub mod csv_reader;
pub mod format;
pub mod raw;
pub mod spreadsheet;

use std::time::Instant;

pub use format::SourceFormat;
pub use raw::{RawCell, RawTable};

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::models::ValidatedTable;
use crate::schema::{ColumnLayout, resolve_layout};
use crate::utils::logging::{log_ingest_complete, log_ingest_rejected, log_ingest_start};
use crate::validate::{ValidationReport, validate};

/// A successfully decoded table together with its column layout
#[derive(Debug, Clone)]
pub struct ParsedTable {
    /// Detected payload format
    pub format: SourceFormat,
    /// Decoded cells
    pub raw: RawTable,
    /// Positions of the required columns
    pub layout: ColumnLayout,
}

/// Decode a payload and check its required columns
///
/// # Arguments
/// * `bytes` - The uploaded payload
/// * `filename` - Filename hint; its extension selects the decoder
/// * `config` - Column names, null markers and sheet selection
///
/// # Errors
/// Returns a format error for unsupported extensions or undecodable
/// payloads, and a schema error when a required column is missing.
pub fn parse(bytes: &[u8], filename: &str, config: &ReaderConfig) -> Result<ParsedTable> {
    let format = SourceFormat::from_filename(filename)?;
    let raw = if format.is_spreadsheet() {
        spreadsheet::read_spreadsheet(bytes, filename, format, config)?
    } else {
        csv_reader::read_csv(bytes, filename, config)?
    };
    let layout = resolve_layout(&raw, &config.columns)?;

    Ok(ParsedTable {
        format,
        raw,
        layout,
    })
}

/// Output of a successful ingestion
#[derive(Debug, Clone)]
pub struct Ingested {
    /// Filename hint the payload arrived with
    pub filename: String,
    /// Detected payload format
    pub format: SourceFormat,
    /// The validated table
    pub table: ValidatedTable,
    /// Counts of kept and dropped rows
    pub report: ValidationReport,
}

/// Parse and validate a payload in one step
///
/// Failures are logged with their kind (format or schema) before being
/// returned; nothing is retained on failure.
pub fn ingest(bytes: &[u8], filename: &str, config: &ReaderConfig) -> Result<Ingested> {
    let start = Instant::now();
    log_ingest_start(filename, bytes.len());

    let parsed = parse(bytes, filename, config).inspect_err(|e| log_ingest_rejected(filename, e))?;
    let (table, report) = validate(&parsed.raw, &parsed.layout, config);

    log_ingest_complete(filename, &report, Some(start.elapsed()));
    Ok(Ingested {
        filename: filename.to_string(),
        format: parsed.format,
        table,
        report,
    })
}
