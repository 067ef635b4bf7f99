//! Year-over-year totals and percentage variation.

use std::collections::BTreeMap;

use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::config::QueryOptions;
use crate::error::Result;
use crate::filter::FilterSelection;
use crate::models::ValidatedTable;

/// Total records of one year and the change from the previous year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    /// The year
    pub year: i32,
    /// Records in the year
    pub total: u64,
    /// Percentage change from the previous reported year; `None` for the
    /// first year and after a zero total
    pub variation_percent: Option<f64>,
}

/// Result of the variation query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variation {
    /// No record matched the selection
    Empty,
    /// Year-ascending totals
    Series(Vec<YearTotal>),
}

impl Variation {
    /// Whether no record matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The series rows; empty for [`Self::Empty`]
    #[must_use]
    pub fn rows(&self) -> &[YearTotal] {
        match self {
            Self::Empty => &[],
            Self::Series(rows) => rows,
        }
    }

    /// Totals as (year, total) pairs
    #[must_use]
    pub fn totals(&self) -> Vec<(i32, u64)> {
        self.rows().iter().map(|r| (r.year, r.total)).collect()
    }

    /// Arrow schema of [`Self::to_record_batch`]
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new("year", DataType::Int32, false),
            Field::new("total", DataType::UInt64, false),
            Field::new("variation_percent", DataType::Float64, true),
        ])
    }

    /// Convert the series to a `RecordBatch`; undefined variation becomes null
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let fields: Vec<FieldRef> = Self::schema().fields().iter().cloned().collect();
        Ok(serde_arrow::to_record_batch(&fields, &self.rows())?)
    }
}

/// Percentage change from `previous` to `current`
///
/// `None` when `previous` is zero, so the series never carries infinity or
/// NaN.
#[must_use]
pub fn percent_change(previous: u64, current: u64) -> Option<f64> {
    if previous == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let (previous, current) = (previous as f64, current as f64);
    Some((current - previous) / previous * 100.0)
}

/// Attach percentage variation to year-ascending totals
#[must_use]
pub fn variation_series(totals: &[(i32, u64)]) -> Vec<YearTotal> {
    let mut previous: Option<u64> = None;
    totals
        .iter()
        .map(|&(year, total)| {
            let variation_percent = previous.and_then(|prev| percent_change(prev, total));
            previous = Some(total);
            YearTotal {
                year,
                total,
                variation_percent,
            }
        })
        .collect()
}

/// Yearly totals and their variation within a selection, default options
///
/// Only the year range and risk filter apply; the name filter is ignored.
#[must_use]
pub fn variation(table: &ValidatedTable, selection: &FilterSelection) -> Variation {
    variation_with_options(table, selection, &QueryOptions::default())
}

/// Yearly totals and their variation within a selection
///
/// With `fill_missing_years`, years between the first and last matching year
/// that have no records are reported with a zero total.
#[must_use]
pub fn variation_with_options(
    table: &ValidatedTable,
    selection: &FilterSelection,
    options: &QueryOptions,
) -> Variation {
    let mut per_year: BTreeMap<i32, u64> = BTreeMap::new();
    for record in table.iter().filter(|r| selection.matches_ignoring_name(r)) {
        *per_year.entry(record.year).or_insert(0) += 1;
    }

    let (Some(&first), Some(&last)) = (per_year.keys().next(), per_year.keys().next_back()) else {
        log::debug!("Variation query matched no records: {selection:?}");
        return Variation::Empty;
    };

    if options.fill_missing_years {
        for year in first..=last {
            per_year.entry(year).or_insert(0);
        }
    }

    let totals: Vec<(i32, u64)> = per_year.into_iter().collect();
    Variation::Series(variation_series(&totals))
}
