//! Raw tables as decoded from a payload, before validation.

use std::fmt;

/// A single decoded cell
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Missing value
    Empty,
    /// Text cell
    Text(String),
    /// Integer cell (spreadsheets only)
    Int(i64),
    /// Floating point cell (spreadsheets only)
    Float(f64),
    /// Boolean cell (spreadsheets only)
    Bool(bool),
}

impl RawCell {
    /// Whether the cell carries no value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text rendering of the cell, `None` for empty cells
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            // Integral floats print without the fractional part, as spreadsheet
            // tools display them
            Self::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.0}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Header row plus data rows, each row padded to the header width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column names in file order
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    /// Position of the first column with exactly this header
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}
