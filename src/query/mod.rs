//! Query engine over validated risk tables
//!
//! Both queries are pure reads: they borrow the table, never fail, and
//! return [`Distribution::Empty`] / [`Variation::Empty`] when the selection
//! matches nothing.

pub mod distribution;
pub mod variation;

pub use distribution::{Distribution, RiskCount, distribution};
pub use variation::{
    Variation, YearTotal, percent_change, variation, variation_series, variation_with_options,
};
