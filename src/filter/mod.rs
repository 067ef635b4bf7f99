//! Filter selections for querying validated risk tables
//!
//! A selection is an inclusive year range plus two optional facet filters
//! (risk and name). Each facet filter either matches everything, when the
//! catch-all label was chosen or nothing was chosen, or one exact value.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::models::RiskRecord;

/// Inclusive year bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    /// First year, inclusive
    pub min: i32,
    /// Last year, inclusive
    pub max: i32,
}

impl YearRange {
    /// Create a year range
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Whether `year` lies within the bounds
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// Whether the range selects no year at all (`min > max`)
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Every year in the range
    #[must_use]
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

/// Filter on a single categorical facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetFilter {
    /// No restriction
    #[default]
    Any,
    /// Keep only records whose facet equals this value exactly
    Value(String),
}

impl FacetFilter {
    /// Interpret a UI selection: absent or the catch-all label means [`Self::Any`]
    ///
    /// # Arguments
    /// * `selected` - The chosen value, if any
    /// * `all_label` - The configured catch-all label (`"All"` by default)
    #[must_use]
    pub fn from_selection(selected: Option<&str>, all_label: &str) -> Self {
        match selected {
            None => Self::Any,
            Some(value) if value == all_label => Self::Any,
            Some(value) => Self::Value(value.to_string()),
        }
    }

    /// Whether the filter keeps a record with this facet value
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Value(expected) => expected == value,
        }
    }
}

/// A complete query selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Inclusive year bounds
    pub years: YearRange,
    /// Risk category filter
    pub risk: FacetFilter,
    /// Subject name filter (ignored by the variation query)
    pub name: FacetFilter,
}

impl FilterSelection {
    /// Select a year range with no category restriction
    #[must_use]
    pub fn new(year_min: i32, year_max: i32) -> Self {
        Self {
            years: YearRange::new(year_min, year_max),
            risk: FacetFilter::Any,
            name: FacetFilter::Any,
        }
    }

    /// Build a selection from raw UI values
    ///
    /// # Arguments
    /// * `year_min`, `year_max` - Inclusive year bounds
    /// * `risk`, `name` - Chosen facet values; `None` or `all_label` mean no filter
    /// * `all_label` - The configured catch-all label
    #[must_use]
    pub fn from_labels(
        year_min: i32,
        year_max: i32,
        risk: Option<&str>,
        name: Option<&str>,
        all_label: &str,
    ) -> Self {
        Self {
            years: YearRange::new(year_min, year_max),
            risk: FacetFilter::from_selection(risk, all_label),
            name: FacetFilter::from_selection(name, all_label),
        }
    }

    /// Restrict to one risk category
    #[must_use]
    pub fn with_risk(mut self, risk: impl Into<String>) -> Self {
        self.risk = FacetFilter::Value(risk.into());
        self
    }

    /// Restrict to one subject name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = FacetFilter::Value(name.into());
        self
    }

    /// Whether a record passes the year range and both facet filters
    #[must_use]
    pub fn matches(&self, record: &RiskRecord) -> bool {
        self.matches_ignoring_name(record) && self.name.accepts(&record.name)
    }

    /// Whether a record passes the year range and the risk filter only
    #[must_use]
    pub fn matches_ignoring_name(&self, record: &RiskRecord) -> bool {
        self.years.contains(record.year) && self.risk.accepts(&record.risk)
    }
}
