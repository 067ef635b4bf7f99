//! Risk record entity model
//!
//! A record is one row of an uploaded risk table: the three fields the
//! pipeline interprets plus the passthrough values of every other column.

use serde::{Deserialize, Serialize};

/// One validated row of a risk table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRecord {
    /// Year the record belongs to
    pub year: i32,
    /// Risk category label
    pub risk: String,
    /// Subject identifier
    pub name: String,
    /// Passthrough values, aligned with the owning table's extra columns
    pub extra: Vec<Option<String>>,
}

impl RiskRecord {
    /// Create a record without passthrough values
    #[must_use]
    pub fn new(year: i32, risk: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            year,
            risk: risk.into(),
            name: name.into(),
            extra: Vec::new(),
        }
    }

    /// Attach passthrough values
    #[must_use]
    pub fn with_extra(mut self, extra: Vec<Option<String>>) -> Self {
        self.extra = extra;
        self
    }

    /// Whether the record satisfies the validated-table invariant
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.risk.is_empty() && !self.name.is_empty()
    }
}
