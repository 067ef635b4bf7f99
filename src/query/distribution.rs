//! Per-year, per-risk record counts.

use std::collections::BTreeMap;

use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::FilterSelection;
use crate::models::ValidatedTable;

/// Number of records for one (year, risk) group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskCount {
    /// Group year
    pub year: i32,
    /// Group risk category
    pub risk: String,
    /// Records in the group
    pub count: u64,
}

impl RiskCount {
    /// Create a count row
    #[must_use]
    pub fn new(year: i32, risk: impl Into<String>, count: u64) -> Self {
        Self {
            year,
            risk: risk.into(),
            count,
        }
    }
}

/// Result of the distribution query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    /// No record matched the selection
    Empty,
    /// Non-empty groups, year ascending then risk ascending
    Counts(Vec<RiskCount>),
}

impl Distribution {
    /// Whether no record matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The count rows; empty for [`Self::Empty`]
    #[must_use]
    pub fn rows(&self) -> &[RiskCount] {
        match self {
            Self::Empty => &[],
            Self::Counts(rows) => rows,
        }
    }

    /// Sum of all group counts, i.e. the number of matching records
    #[must_use]
    pub fn total(&self) -> u64 {
        self.rows().iter().map(|r| r.count).sum()
    }

    /// Arrow schema of [`Self::to_record_batch`]
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new("year", DataType::Int32, false),
            Field::new("risk", DataType::Utf8, false),
            Field::new("count", DataType::UInt64, false),
        ])
    }

    /// Convert the count rows to a `RecordBatch` for rendering collaborators
    ///
    /// An empty distribution becomes a zero-row batch with the same schema.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let fields: Vec<FieldRef> = Self::schema().fields().iter().cloned().collect();
        Ok(serde_arrow::to_record_batch(&fields, &self.rows())?)
    }
}

/// Count records per (year, risk) within a selection
///
/// Applies the year range, then the risk filter, then the name filter, and
/// groups the survivors. Every matching record lands in exactly one group.
/// An inverted year range or a filter value absent from the table gives
/// [`Distribution::Empty`].
#[must_use]
pub fn distribution(table: &ValidatedTable, selection: &FilterSelection) -> Distribution {
    let mut groups: BTreeMap<(i32, &str), u64> = BTreeMap::new();
    for record in table.iter().filter(|r| selection.matches(r)) {
        *groups.entry((record.year, record.risk.as_str())).or_insert(0) += 1;
    }

    if groups.is_empty() {
        log::debug!("Distribution query matched no records: {selection:?}");
        return Distribution::Empty;
    }

    Distribution::Counts(
        groups
            .into_iter()
            .map(|((year, risk), count)| RiskCount::new(year, risk, count))
            .collect(),
    )
}
