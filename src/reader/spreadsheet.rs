//! Binary spreadsheet (XLS/XLSX) decoding using calamine.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx, open_workbook_from_rs};

use crate::config::{ReaderConfig, SheetSelection};
use crate::error::{Result, RiskReaderError};
use crate::reader::format::SourceFormat;
use crate::reader::raw::{RawCell, RawTable};

/// Decode a spreadsheet payload into a raw table
///
/// Reads the worksheet chosen by `config.sheet` (the first sheet by default).
/// The first row of the used range is the header row.
///
/// # Arguments
/// * `bytes` - The uploaded payload
/// * `filename` - Filename hint, used for error context
/// * `format` - [`SourceFormat::Xls`] or [`SourceFormat::Xlsx`]
/// * `config` - Supplies the sheet selection
pub fn read_spreadsheet(
    bytes: &[u8],
    filename: &str,
    format: SourceFormat,
    config: &ReaderConfig,
) -> Result<RawTable> {
    let cursor = Cursor::new(bytes);
    let range = match format {
        SourceFormat::Xlsx => {
            let mut workbook: Xlsx<_> = open_workbook_from_rs(cursor)
                .map_err(|e| RiskReaderError::format(filename, format!("unreadable xlsx: {e}")))?;
            select_range(&mut workbook, &config.sheet, filename)?
        }
        SourceFormat::Xls => {
            let mut workbook: Xls<_> = open_workbook_from_rs(cursor)
                .map_err(|e| RiskReaderError::format(filename, format!("unreadable xls: {e}")))?;
            select_range(&mut workbook, &config.sheet, filename)?
        }
        SourceFormat::Csv => {
            return Err(RiskReaderError::format(
                filename,
                "csv payload passed to the spreadsheet reader",
            ));
        }
    };

    range_to_table(&range, filename)
}

fn select_range<R, RS>(workbook: &mut R, sheet: &SheetSelection, filename: &str) -> Result<Range<Data>>
where
    RS: std::io::Read + std::io::Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    match sheet {
        SheetSelection::Index(idx) => workbook
            .worksheet_range_at(*idx)
            .ok_or_else(|| RiskReaderError::format(filename, format!("no worksheet at index {idx}")))?
            .map_err(|e| RiskReaderError::format(filename, format!("unreadable worksheet: {e}"))),
        SheetSelection::Name(name) => workbook
            .worksheet_range(name)
            .map_err(|e| RiskReaderError::format(filename, format!("unreadable worksheet '{name}': {e}"))),
    }
}

fn range_to_table(range: &Range<Data>, filename: &str) -> Result<RawTable> {
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| RiskReaderError::format(filename, "worksheet is empty"))?
        .iter()
        .map(|cell| convert_cell(cell).as_text().unwrap_or_default())
        .collect();

    let width = headers.len();
    let rows: Vec<Vec<RawCell>> = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| {
            let mut cells: Vec<RawCell> = row.iter().take(width).map(convert_cell).collect();
            cells.resize(width, RawCell::Empty);
            cells
        })
        .collect();

    log::debug!(
        "Decoded {} spreadsheet rows with {} columns from {filename}",
        rows.len(),
        width
    );
    Ok(RawTable { headers, rows })
}

/// Convert a calamine cell, keeping numeric and boolean types
///
/// Error cells (`#N/A`, `#DIV/0!`) count as missing. Dates and durations are
/// carried as their text rendering.
#[must_use]
pub fn convert_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::Int(n) => RawCell::Int(*n),
        Data::Float(x) => RawCell::Float(*x),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::String(s) if s.is_empty() => RawCell::Empty,
        Data::String(s) => RawCell::Text(s.clone()),
        other => RawCell::Text(other.to_string()),
    }
}
