//! Domain models for risk tables
//!
//! This module contains the record type and the immutable validated table
//! that every downstream component reads.

pub mod record;
pub mod table;

// Re-export commonly used types
pub use record::RiskRecord;
pub use table::ValidatedTable;
