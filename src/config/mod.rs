//! Configuration for risk table ingestion and queries.
//!
//! Header names are configuration, not constants: the source data for this
//! pipeline uses accented Spanish headers (`AÑO`, `RIESGOS`, `NOMBRE`), so
//! the required columns are matched against whatever names are configured
//! here, byte for byte.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskReaderError};

/// Names of the three required columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Header of the year column
    pub year: String,
    /// Header of the risk category column
    pub risk: String,
    /// Header of the subject name column
    pub name: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            year: "year".to_string(),
            risk: "risk".to_string(),
            name: "name".to_string(),
        }
    }
}

impl ColumnNames {
    /// Headers used by the original Spanish-language risk exports
    #[must_use]
    pub fn spanish() -> Self {
        Self {
            year: "AÑO".to_string(),
            risk: "RIESGOS".to_string(),
            name: "NOMBRE".to_string(),
        }
    }

    /// The required names in year, risk, name order
    #[must_use]
    pub fn as_array(&self) -> [&str; 3] {
        [&self.year, &self.risk, &self.name]
    }
}

/// Which worksheet to read from a spreadsheet payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetSelection {
    /// Zero-based sheet position
    Index(usize),
    /// Sheet name
    Name(String),
}

impl Default for SheetSelection {
    fn default() -> Self {
        Self::Index(0)
    }
}

/// Options that change how queries aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Report years without rows (inside the observed span) as zero totals in
    /// the variation series
    pub fill_missing_years: bool,
}

/// Configuration for the reader, validator and query engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Required column headers
    pub columns: ColumnNames,
    /// Sentinel facet value meaning "no filter"
    pub all_label: String,
    /// CSV cell contents read as missing values
    pub null_markers: Vec<String>,
    /// Worksheet to read from XLS/XLSX payloads
    pub sheet: SheetSelection,
    /// Trim surrounding whitespace from risk, name and passthrough values
    pub trim_values: bool,
    /// Drop rows with any empty passthrough value as well
    pub drop_incomplete_rows: bool,
    /// Aggregation options
    pub query: QueryOptions,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            all_label: "All".to_string(),
            null_markers: ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            sheet: SheetSelection::default(),
            trim_values: false,
            drop_incomplete_rows: false,
            query: QueryOptions::default(),
        }
    }
}

impl ReaderConfig {
    /// Configuration matching the Spanish-language exports: accented headers
    /// and `"Todos"` as the catch-all facet label
    #[must_use]
    pub fn spanish() -> Self {
        Self {
            columns: ColumnNames::spanish(),
            all_label: "Todos".to_string(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON; absent fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RiskReaderError::config(format!("Invalid reader config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
            .map_err(|e| RiskReaderError::config(format!("{}: {e}", path.display())))
    }

    /// Whether a cell's text should be read as a missing value
    #[must_use]
    pub fn is_null_marker(&self, value: &str) -> bool {
        self.null_markers.iter().any(|marker| marker == value)
    }

    fn validate(&self) -> Result<()> {
        let [year, risk, name] = self.columns.as_array();
        if year.is_empty() || risk.is_empty() || name.is_empty() {
            return Err(RiskReaderError::config("Required column names must not be empty"));
        }
        if year == risk || year == name || risk == name {
            return Err(RiskReaderError::config("Required column names must be distinct"));
        }
        if self.all_label.is_empty() {
            return Err(RiskReaderError::config("The catch-all label must not be empty"));
        }
        Ok(())
    }
}
