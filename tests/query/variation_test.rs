//! Tests for yearly totals and their variation

use risk_reader::query::variation_series;
use risk_reader::{FilterSelection, Variation, YearTotal, variation};

use crate::utils::{SAMPLE_ROWS, table_of};

#[test]
fn test_variation_over_sample() {
    let table = table_of(&SAMPLE_ROWS);
    let result = variation(&table, &FilterSelection::new(2020, 2021));

    assert_eq!(
        result,
        Variation::Series(vec![
            YearTotal {
                year: 2020,
                total: 2,
                variation_percent: None,
            },
            YearTotal {
                year: 2021,
                total: 1,
                variation_percent: Some(-50.0),
            },
        ])
    );
}

#[test]
fn test_name_filter_is_ignored() {
    let table = table_of(&SAMPLE_ROWS);
    let selection = FilterSelection::new(2020, 2021).with_name("Luis");
    assert_eq!(variation(&table, &selection).totals(), vec![(2020, 2), (2021, 1)]);
}

#[test]
fn test_risk_filter_applies() {
    let table = table_of(&SAMPLE_ROWS);
    let selection = FilterSelection::new(2020, 2021).with_risk("Bajo");
    assert_eq!(variation(&table, &selection).totals(), vec![(2020, 1)]);
}

#[test]
fn test_empty_range() {
    let table = table_of(&SAMPLE_ROWS);
    assert_eq!(variation(&table, &FilterSelection::new(2030, 2040)), Variation::Empty);
}

#[test]
fn test_zero_previous_total_gives_undefined_variation() {
    let series = variation_series(&[(2019, 0), (2020, 3)]);
    assert_eq!(series[1].variation_percent, None);
    assert!(series.iter().all(|r| r.variation_percent.is_none_or(f64::is_finite)));
}
