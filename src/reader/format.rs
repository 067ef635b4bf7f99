//! Payload format detection from the filename hint.

use std::fmt;

use crate::error::{Result, RiskReaderError};

/// Supported payload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Comma-separated UTF-8 text
    Csv,
    /// Legacy binary Excel workbook
    Xls,
    /// Office Open XML workbook
    Xlsx,
}

impl SourceFormat {
    /// Detect the format from the filename extension, case-insensitively
    ///
    /// Only the text after the last `.` counts; the payload itself is never
    /// sniffed.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| RiskReaderError::format(filename, "file has no extension"))?;

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xls" => Ok(Self::Xls),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(RiskReaderError::format(
                filename,
                format!("unsupported extension '{other}'"),
            )),
        }
    }

    /// Whether the format is a binary spreadsheet container
    #[must_use]
    pub fn is_spreadsheet(self) -> bool {
        matches!(self, Self::Xls | Self::Xlsx)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Csv => "csv",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
        };
        f.write_str(label)
    }
}
