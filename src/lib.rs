//! A Rust library for ingesting clinical risk tables from CSV and Excel
//! uploads, validating them, and answering year/risk/name queries with
//! per-year counts and year-over-year variation.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod reader;
pub mod schema;
pub mod utils;
pub mod validate;

// Re-export the most common types for easier use
// Core types
pub use config::{ColumnNames, QueryOptions, ReaderConfig, SheetSelection};
pub use error::{ErrorKind, Result, RiskReaderError};
pub use models::{RiskRecord, ValidatedTable};

// Pipeline stages
pub use catalog::{FacetCatalog, build_catalog};
pub use dashboard::Dashboard;
pub use reader::{Ingested, SourceFormat, ingest, parse};
pub use validate::{ValidationReport, validate};

// Queries
pub use filter::{FacetFilter, FilterSelection, YearRange};
pub use query::{Distribution, RiskCount, Variation, YearTotal, distribution, variation};

// Arrow types
pub use arrow::record_batch::RecordBatch;
