//! Explicit dashboard state
//!
//! `Dashboard` owns the currently loaded table and its facet catalog. It is a
//! plain value: callers hold one per session and pass selections in. A
//! failed upload clears the previous table so no stale catalog survives.

use std::sync::Arc;

use crate::catalog::{FacetCatalog, build_catalog};
use crate::config::ReaderConfig;
use crate::error::Result;
use crate::filter::FilterSelection;
use crate::models::ValidatedTable;
use crate::query::{Distribution, Variation, distribution, variation_with_options};
use crate::reader::{SourceFormat, ingest};
use crate::validate::ValidationReport;

/// A loaded table with everything derived from it
#[derive(Debug, Clone)]
pub struct LoadedTable {
    /// Filename hint of the upload
    pub filename: String,
    /// Detected format
    pub format: SourceFormat,
    /// The validated table, shareable across threads for read-only queries
    pub table: Arc<ValidatedTable>,
    /// Facets derived from `table`
    pub catalog: FacetCatalog,
    /// Validation counts
    pub report: ValidationReport,
}

/// Per-session pipeline state
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    config: ReaderConfig,
    loaded: Option<LoadedTable>,
    rejection: Option<String>,
}

impl Dashboard {
    /// Create an empty dashboard
    #[must_use]
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            loaded: None,
            rejection: None,
        }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Ingest an upload, replacing any previously loaded table
    ///
    /// On failure the previous table and catalog are discarded and the
    /// error is returned.
    pub fn ingest(&mut self, bytes: &[u8], filename: &str) -> Result<&FacetCatalog> {
        self.clear();
        match ingest(bytes, filename, &self.config) {
            Ok(ingested) => {
                let catalog = build_catalog(&ingested.table, &self.config.all_label);
                let loaded = self.loaded.insert(LoadedTable {
                    filename: ingested.filename,
                    format: ingested.format,
                    table: Arc::new(ingested.table),
                    catalog,
                    report: ingested.report,
                });
                Ok(&loaded.catalog)
            }
            Err(e) => {
                let required = self.config.columns.as_array();
                self.rejection = Some(e.user_message(&required));
                Err(e)
            }
        }
    }

    /// Forget the loaded table
    pub fn clear(&mut self) {
        self.loaded = None;
        self.rejection = None;
    }

    /// The loaded table and its derived data
    #[must_use]
    pub fn loaded(&self) -> Option<&LoadedTable> {
        self.loaded.as_ref()
    }

    /// The facet catalog, unset until an upload succeeds
    #[must_use]
    pub fn catalog(&self) -> Option<&FacetCatalog> {
        self.loaded().map(|l| &l.catalog)
    }

    /// A shared handle to the loaded table
    #[must_use]
    pub fn table(&self) -> Option<Arc<ValidatedTable>> {
        self.loaded().map(|l| Arc::clone(&l.table))
    }

    /// Validation counts of the loaded table
    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        self.loaded().map(|l| &l.report)
    }

    /// Distribution of the loaded table; `None` when nothing is loaded
    #[must_use]
    pub fn distribution(&self, selection: &FilterSelection) -> Option<Distribution> {
        self.loaded().map(|l| distribution(&l.table, selection))
    }

    /// Variation of the loaded table; `None` when nothing is loaded
    #[must_use]
    pub fn variation(&self, selection: &FilterSelection) -> Option<Variation> {
        self.loaded()
            .map(|l| variation_with_options(&l.table, selection, &self.config.query))
    }

    /// Build a selection from raw UI values using the configured catch-all label
    #[must_use]
    pub fn selection(
        &self,
        year_min: i32,
        year_max: i32,
        risk: Option<&str>,
        name: Option<&str>,
    ) -> FilterSelection {
        FilterSelection::from_labels(year_min, year_max, risk, name, &self.config.all_label)
    }

    /// One status line for the user
    #[must_use]
    pub fn status_message(&self) -> String {
        if let Some(message) = &self.rejection {
            return message.clone();
        }
        match &self.loaded {
            None => "Upload a file to begin.".to_string(),
            Some(loaded) => {
                let dropped = loaded.report.rows_dropped();
                if dropped == 0 {
                    format!("File {} loaded successfully.", loaded.filename)
                } else {
                    format!(
                        "File {} loaded successfully ({} rows skipped).",
                        loaded.filename, dropped
                    )
                }
            }
        }
    }
}
