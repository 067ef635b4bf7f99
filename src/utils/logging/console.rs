//! Console output utilities
//!
//! This module provides utilities for formatted console output of catalogs
//! and query results.

use crate::catalog::FacetCatalog;
use crate::query::{Distribution, Variation};

/// Print the selectable facets of a loaded table
pub fn print_catalog(catalog: &FacetCatalog) {
    match catalog.year_bounds {
        Some(bounds) => println!("Years: {} - {}", bounds.min, bounds.max),
        None => println!("Years: (no data)"),
    }
    println!("Risks: {}", catalog.risks.join(", "));
    println!("Names: {} entries", catalog.name_values().len());
}

/// Print the distribution as a year / risk / count table
pub fn print_distribution(result: &Distribution) {
    if result.is_empty() {
        println!("No data for the selected filters");
        return;
    }
    println!("{:<6} {:<20} {:>8}", "Year", "Risk", "Count");
    for row in result.rows() {
        println!("{:<6} {:<20} {:>8}", row.year, row.risk, row.count);
    }
    println!("Total: {}", result.total());
}

/// Print the variation series; undefined variation is shown as `-`
pub fn print_variation(result: &Variation) {
    if result.is_empty() {
        println!("No data for the selected filters");
        return;
    }
    println!("{:<6} {:>8} {:>12}", "Year", "Total", "Variation");
    for row in result.rows() {
        let variation = row
            .variation_percent
            .map_or_else(|| "-".to_string(), |v| format!("{v:.1}%"));
        println!("{:<6} {:>8} {:>12}", row.year, row.total, variation);
    }
}
