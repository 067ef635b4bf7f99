//! Logging utilities
//!
//! This module provides standardized logging functions for ingestion.

use crate::error::RiskReaderError;
use crate::validate::ValidationReport;

/// Log the start of an ingestion with consistent format
///
/// # Arguments
/// * `filename` - Filename hint of the payload
/// * `bytes` - Payload size
pub fn log_ingest_start(filename: &str, bytes: usize) {
    log::info!("Ingesting {filename} ({bytes} bytes)");
}

/// Log a successful ingestion with consistent format
///
/// # Arguments
/// * `filename` - Filename hint of the payload
/// * `report` - Validation counts
/// * `elapsed` - Optional elapsed time
pub fn log_ingest_complete(
    filename: &str,
    report: &ValidationReport,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully loaded {} records from {} in {:?}",
            report.rows_kept,
            filename,
            duration
        );
    } else {
        log::info!("Successfully loaded {} records from {}", report.rows_kept, filename);
    }

    if report.rows_dropped() > 0 {
        log_warning(
            &format!("{} rows dropped ({report})", report.rows_dropped()),
            Some(filename),
        );
    }
}

/// Log a rejected payload, keeping the error kind visible for diagnostics
pub fn log_ingest_rejected(filename: &str, error: &RiskReaderError) {
    log::warn!("Rejected {filename} [{} error]: {error}", error.kind());
}

/// Log a warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `filename` - Optional file the warning relates to
pub fn log_warning(message: &str, filename: Option<&str>) {
    if let Some(filename) = filename {
        log::warn!("{message}: {filename}");
    } else {
        log::warn!("{message}");
    }
}
