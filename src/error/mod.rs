//! Error handling for the risk table pipeline.
//!
//! Only ingestion can fail. Dropped rows, empty query results and undefined
//! variation are represented as values in the result types instead.

use std::{fmt, io};

use arrow::error::ArrowError;

/// Specialized error type for risk table ingestion
#[derive(Debug, thiserror::Error)]
pub enum RiskReaderError {
    /// The payload has an unsupported extension or cannot be decoded in its
    /// declared format
    #[error("Format error in {filename}: {reason}")]
    Format {
        /// Filename hint supplied with the payload
        filename: String,
        /// What went wrong while decoding
        reason: String,
    },

    /// The table decoded but lacks one or more required columns
    #[error("Schema error: missing required columns {}", .missing.join(", "))]
    Schema {
        /// Required column names not found in the header
        missing: Vec<String>,
    },

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid reader configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error assembling an Arrow record batch
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error serializing result rows into Arrow arrays
    #[error("Arrow export error: {0}")]
    Export(#[from] serde_arrow::Error),
}

/// Coarse classification of [`RiskReaderError`] for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unreadable payload or unsupported extension
    Format,
    /// Missing required columns
    Schema,
    /// Filesystem failure
    Io,
    /// Bad configuration
    Config,
    /// Arrow conversion failure
    Export,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Format => "format",
            Self::Schema => "schema",
            Self::Io => "io",
            Self::Config => "config",
            Self::Export => "export",
        };
        f.write_str(label)
    }
}

impl RiskReaderError {
    /// Create a format error for the given payload
    pub fn format(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format { .. } => ErrorKind::Format,
            Self::Schema { .. } => ErrorKind::Schema,
            Self::Io(_) => ErrorKind::Io,
            Self::Config(_) => ErrorKind::Config,
            Self::Arrow(_) | Self::Export(_) => ErrorKind::Export,
        }
    }

    /// Whether the error means the uploaded file was rejected
    ///
    /// Format and schema failures look the same to the person uploading the
    /// file; only the logs tell them apart.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self.kind(), ErrorKind::Format | ErrorKind::Schema)
    }

    /// A single user-facing line describing the failure
    ///
    /// # Arguments
    /// * `required` - The configured required column names, in display order
    #[must_use]
    pub fn user_message(&self, required: &[&str]) -> String {
        if self.is_rejection() {
            format!(
                "File rejected. Make sure it is a CSV or Excel file with the columns {}.",
                required
                    .iter()
                    .map(|c| format!("'{c}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        } else {
            format!("Could not load the file: {self}")
        }
    }
}

/// Result type for risk table operations
pub type Result<T> = std::result::Result<T, RiskReaderError>;
