use std::fmt::Write;

use rust_xlsxwriter::{Workbook, XlsxError};

use risk_reader::{Ingested, ReaderConfig, Result, ValidatedTable, ingest};

/// The three-row sample used throughout the tests
pub const SAMPLE_ROWS: [(i32, &str, &str); 3] =
    [(2020, "Alto", "Ana"), (2020, "Bajo", "Luis"), (2021, "Alto", "Ana")];

/// Render rows as a CSV payload with the given headers
#[must_use]
pub fn csv_payload(headers: [&str; 3], rows: &[(i32, &str, &str)]) -> Vec<u8> {
    let mut out = headers.join(",");
    out.push('\n');
    for (year, risk, name) in rows {
        let _ = writeln!(out, "{year},{risk},{name}");
    }
    out.into_bytes()
}

/// CSV payload of [`SAMPLE_ROWS`] with the default headers
#[must_use]
pub fn sample_csv() -> Vec<u8> {
    csv_payload(["year", "risk", "name"], &SAMPLE_ROWS)
}

/// Ingest a CSV payload with the default configuration
pub fn ingest_csv(payload: &[u8]) -> Result<Ingested> {
    ingest(payload, "riesgos.csv", &ReaderConfig::default())
}

/// A table built directly from tuples
#[must_use]
pub fn table_of(rows: &[(i32, &str, &str)]) -> ValidatedTable {
    ValidatedTable::from_tuples(rows.iter().copied())
}

/// Build an xlsx workbook with numeric year cells for each row and one
/// trailing row whose year is unreadable text
pub fn xlsx_payload(
    headers: [&str; 3],
    rows: &[(i32, &str, &str)],
    bad_year: &str,
) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in (0u16..).zip(headers) {
        worksheet.write_string(0, col, header)?;
    }
    let mut row = 1u32;
    for (year, risk, name) in rows {
        worksheet.write_number(row, 0, f64::from(*year))?;
        worksheet.write_string(row, 1, *risk)?;
        worksheet.write_string(row, 2, *name)?;
        row += 1;
    }
    worksheet.write_string(row, 0, bad_year)?;
    worksheet.write_string(row, 1, "Alto")?;
    worksheet.write_string(row, 2, "Eva")?;

    workbook.save_to_buffer()
}
