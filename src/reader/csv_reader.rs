//! Comma-separated text decoding.

use ::csv::ReaderBuilder;

use crate::config::ReaderConfig;
use crate::error::{Result, RiskReaderError};
use crate::reader::raw::{RawCell, RawTable};

/// Decode a CSV payload into a raw table
///
/// The payload must be valid UTF-8 and start with a header row. Short rows
/// are padded with empty cells and long rows are cut to the header width.
///
/// # Arguments
/// * `bytes` - The uploaded payload
/// * `filename` - Filename hint, used for error context
/// * `config` - Supplies the null markers
pub fn read_csv(bytes: &[u8], filename: &str, config: &ReaderConfig) -> Result<RawTable> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| RiskReaderError::format(filename, format!("payload is not valid UTF-8: {e}")))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| RiskReaderError::format(filename, format!("unreadable header row: {e}")))?
        .iter()
        .map(ToString::to_string)
        .collect();

    if headers.is_empty() {
        return Err(RiskReaderError::format(filename, "payload has no header row"));
    }

    let width = headers.len();
    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            RiskReaderError::format(filename, format!("malformed record {}: {e}", line + 1))
        })?;

        let mut row: Vec<RawCell> = record
            .iter()
            .take(width)
            .map(|field| {
                if config.is_null_marker(field) {
                    RawCell::Empty
                } else {
                    RawCell::Text(field.to_string())
                }
            })
            .collect();
        row.resize(width, RawCell::Empty);
        rows.push(row);
    }

    log::debug!("Decoded {} CSV rows with {} columns from {filename}", rows.len(), width);
    Ok(RawTable { headers, rows })
}
