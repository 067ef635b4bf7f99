//! Facet catalog derived from a validated table
//!
//! The catalog lists what a user can select: the year bounds and the distinct
//! risk categories and subject names, each list led by the catch-all label.
//! It is rebuilt from scratch whenever a new table is loaded.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::filter::{FilterSelection, YearRange};
use crate::models::ValidatedTable;

/// Selectable facets of a validated table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCatalog {
    /// Smallest and largest year, absent for an empty table
    pub year_bounds: Option<YearRange>,
    /// Catch-all label followed by the distinct risks, ascending
    pub risks: Vec<String>,
    /// Catch-all label followed by the distinct names, ascending
    pub names: Vec<String>,
    /// The catch-all label heading both lists
    pub all_label: String,
}

/// Build the facet catalog of a table
///
/// Lists are sorted by byte order, so the result is deterministic for a given
/// table.
///
/// # Arguments
/// * `table` - The validated table
/// * `all_label` - Label of the synthetic "no filter" entry
#[must_use]
pub fn build_catalog(table: &ValidatedTable, all_label: &str) -> FacetCatalog {
    let year_bounds = table
        .iter()
        .map(|r| r.year)
        .minmax()
        .into_option()
        .map(|(min, max)| YearRange::new(min, max));

    let with_all = |values: Vec<String>| {
        std::iter::once(all_label.to_string())
            .chain(values)
            .collect::<Vec<_>>()
    };
    let risks = with_all(table.iter().map(|r| r.risk.clone()).sorted().dedup().collect());
    let names = with_all(table.iter().map(|r| r.name.clone()).sorted().dedup().collect());

    log::debug!(
        "Built catalog: years {:?}, {} risks, {} names",
        year_bounds,
        risks.len() - 1,
        names.len() - 1
    );

    FacetCatalog {
        year_bounds,
        risks,
        names,
        all_label: all_label.to_string(),
    }
}

impl FacetCatalog {
    /// Every year from the first to the last, for labelling a range control
    #[must_use]
    pub fn year_marks(&self) -> Vec<i32> {
        self.year_bounds
            .map(|bounds| bounds.years().collect())
            .unwrap_or_default()
    }

    /// The selection spanning the whole table with no category filter
    ///
    /// `None` when the table is empty, since there is no range to select.
    #[must_use]
    pub fn full_selection(&self) -> Option<FilterSelection> {
        self.year_bounds
            .map(|bounds| FilterSelection::new(bounds.min, bounds.max))
    }

    /// Concrete risk values, without the catch-all label
    #[must_use]
    pub fn risk_values(&self) -> &[String] {
        self.risks.get(1..).unwrap_or_default()
    }

    /// Concrete name values, without the catch-all label
    #[must_use]
    pub fn name_values(&self) -> &[String] {
        self.names.get(1..).unwrap_or_default()
    }

    /// Whether `risk` is a selectable value (the catch-all label included)
    #[must_use]
    pub fn contains_risk(&self, risk: &str) -> bool {
        self.risks.iter().any(|r| r == risk)
    }

    /// Whether `name` is a selectable value (the catch-all label included)
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
