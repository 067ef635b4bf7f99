//! Row-level validation of decoded tables
//!
//! Validation never fails. Rows that cannot become a [`RiskRecord`] are
//! dropped, and the [`ValidationReport`] says how many and why so callers can
//! surface data-quality problems.

use std::fmt;

use crate::config::ReaderConfig;
use crate::models::{RiskRecord, ValidatedTable};
use crate::reader::raw::{RawCell, RawTable};
use crate::schema::{ColumnLayout, coerce_label, coerce_year};

/// Why a row was dropped during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Year, risk or name was empty
    MissingField,
    /// Year could not be read as an integer
    InvalidYear,
    /// A passthrough value was empty and strict completeness is on
    IncompleteRow,
}

/// Row counts produced by validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Data rows in the decoded table
    pub rows_read: usize,
    /// Rows that became records
    pub rows_kept: usize,
    /// Rows dropped for an empty required field
    pub missing_field: usize,
    /// Rows dropped for a non-integer year
    pub invalid_year: usize,
    /// Rows dropped for an empty passthrough value
    pub incomplete_row: usize,
}

impl ValidationReport {
    /// Total number of dropped rows
    #[must_use]
    pub fn rows_dropped(&self) -> usize {
        self.missing_field + self.invalid_year + self.incomplete_row
    }

    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::MissingField => self.missing_field += 1,
            DropReason::InvalidYear => self.invalid_year += 1,
            DropReason::IncompleteRow => self.incomplete_row += 1,
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} rows kept ({} missing a required field, {} with an invalid year, {} incomplete)",
            self.rows_kept, self.rows_read, self.missing_field, self.invalid_year, self.incomplete_row
        )
    }
}

/// Validate a raw table against a resolved column layout
///
/// # Arguments
/// * `raw` - The decoded table
/// * `layout` - Positions of the required columns, see [`crate::schema::resolve_layout`]
/// * `config` - Trimming and completeness options
///
/// # Returns
/// The validated table (possibly empty) and the drop counts
#[must_use]
pub fn validate(
    raw: &RawTable,
    layout: &ColumnLayout,
    config: &ReaderConfig,
) -> (ValidatedTable, ValidationReport) {
    let mut report = ValidationReport {
        rows_read: raw.num_rows(),
        ..ValidationReport::default()
    };

    let mut records = Vec::with_capacity(raw.num_rows());
    for row in &raw.rows {
        match validate_row(row, layout, config) {
            Ok(record) => records.push(record),
            Err(reason) => report.record_drop(reason),
        }
    }
    report.rows_kept = records.len();

    log::debug!("Validation finished: {report}");

    let table = ValidatedTable::new(config.columns.clone(), layout.extra_names(raw), records);
    (table, report)
}

fn validate_row(
    row: &[RawCell],
    layout: &ColumnLayout,
    config: &ReaderConfig,
) -> Result<RiskRecord, DropReason> {
    let cell = |idx: usize| row.get(idx).unwrap_or(&RawCell::Empty);

    let year_cell = cell(layout.year);
    let risk = coerce_label(cell(layout.risk), config.trim_values);
    let name = coerce_label(cell(layout.name), config.trim_values);

    let (Some(risk), Some(name)) = (risk, name) else {
        return Err(DropReason::MissingField);
    };
    if year_cell.as_text().is_none_or(|s| s.trim().is_empty()) {
        return Err(DropReason::MissingField);
    }
    let year = coerce_year(year_cell).ok_or(DropReason::InvalidYear)?;

    let extra: Vec<Option<String>> = layout
        .extra
        .iter()
        .map(|&idx| coerce_label(cell(idx), config.trim_values))
        .collect();
    if config.drop_incomplete_rows && extra.iter().any(Option::is_none) {
        return Err(DropReason::IncompleteRow);
    }

    Ok(RiskRecord {
        year,
        risk,
        name,
        extra,
    })
}
