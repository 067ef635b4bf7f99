//! Module for checking that a decoded table carries the required columns.

pub mod coerce;

pub use coerce::{coerce_label, coerce_year};

use crate::config::ColumnNames;
use crate::error::{Result, RiskReaderError};
use crate::reader::raw::RawTable;

/// Where the required and passthrough columns sit in a raw table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Index of the year column
    pub year: usize,
    /// Index of the risk column
    pub risk: usize,
    /// Index of the name column
    pub name: usize,
    /// Indices of every other column, in source order
    pub extra: Vec<usize>,
}

impl ColumnLayout {
    /// Header names of the passthrough columns
    #[must_use]
    pub fn extra_names(&self, table: &RawTable) -> Vec<String> {
        self.extra
            .iter()
            .map(|&idx| table.headers[idx].clone())
            .collect()
    }
}

/// Required column names that do not appear in the header row
///
/// Matching is exact: case, accents and surrounding whitespace all count.
#[must_use]
pub fn find_missing_columns(headers: &[String], columns: &ColumnNames) -> Vec<String> {
    columns
        .as_array()
        .into_iter()
        .filter(|required| !headers.iter().any(|h| h == required))
        .map(ToString::to_string)
        .collect()
}

/// Locate the required columns, failing with a schema error if any is absent
///
/// When a required header appears more than once the first occurrence wins
/// and the later ones are kept as passthrough columns.
pub fn resolve_layout(table: &RawTable, columns: &ColumnNames) -> Result<ColumnLayout> {
    let missing = find_missing_columns(&table.headers, columns);
    if !missing.is_empty() {
        return Err(RiskReaderError::Schema { missing });
    }

    let locate = |name: &str| {
        table
            .column_index(name)
            .ok_or_else(|| RiskReaderError::Schema {
                missing: vec![name.to_string()],
            })
    };
    let year = locate(&columns.year)?;
    let risk = locate(&columns.risk)?;
    let name = locate(&columns.name)?;

    let extra = (0..table.headers.len())
        .filter(|idx| ![year, risk, name].contains(idx))
        .collect();

    Ok(ColumnLayout {
        year,
        risk,
        name,
        extra,
    })
}
