//! Logging utilities for ingestion and console output
//!
//! This module provides utilities for logging pipeline stages and printing
//! query results to the console.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_ingest_complete, log_ingest_rejected, log_ingest_start, log_warning};
