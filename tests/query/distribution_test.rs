//! Tests for the per-year risk distribution

use risk_reader::{Distribution, FilterSelection, RiskCount, distribution};

use crate::utils::{SAMPLE_ROWS, table_of};

#[test]
fn test_distribution_over_sample() {
    let table = table_of(&SAMPLE_ROWS);
    let result = distribution(&table, &FilterSelection::new(2020, 2021));

    assert_eq!(
        result,
        Distribution::Counts(vec![
            RiskCount::new(2020, "Alto", 1),
            RiskCount::new(2020, "Bajo", 1),
            RiskCount::new(2021, "Alto", 1),
        ])
    );
}

#[test]
fn test_name_filter_applies() {
    let table = table_of(&SAMPLE_ROWS);
    let selection = FilterSelection::new(2020, 2021).with_name("Ana");
    let result = distribution(&table, &selection);

    assert_eq!(
        result.rows(),
        &[RiskCount::new(2020, "Alto", 1), RiskCount::new(2021, "Alto", 1)]
    );
}

#[test]
fn test_counts_sum_to_matching_rows() {
    let rows = [
        (2018, "Alto", "Ana"),
        (2018, "Alto", "Luis"),
        (2019, "Bajo", "Ana"),
        (2019, "Medio", "Eva"),
        (2020, "Alto", "Eva"),
        (2022, "Bajo", "Luis"),
    ];
    let table = table_of(&rows);

    for (min, max) in [(2018, 2022), (2019, 2020), (2018, 2018), (2021, 2021)] {
        let selection = FilterSelection::new(min, max);
        let expected = rows.iter().filter(|(y, _, _)| (min..=max).contains(y)).count() as u64;
        assert_eq!(distribution(&table, &selection).total(), expected);
    }
}

#[test]
fn test_no_match_is_empty() {
    let table = table_of(&SAMPLE_ROWS);

    assert!(distribution(&table, &FilterSelection::new(1990, 1999)).is_empty());
    assert!(distribution(&table, &FilterSelection::new(2021, 2020)).is_empty());
    assert!(distribution(&table, &FilterSelection::new(2020, 2021).with_risk("Medio")).is_empty());
}

#[test]
fn test_single_year_range() {
    let table = table_of(&SAMPLE_ROWS);
    let result = distribution(&table, &FilterSelection::new(2021, 2021));
    assert_eq!(result.rows(), &[RiskCount::new(2021, "Alto", 1)]);
}

#[test]
fn test_export_to_record_batch() {
    let table = table_of(&SAMPLE_ROWS);
    let batch = distribution(&table, &FilterSelection::new(2020, 2021))
        .to_record_batch()
        .unwrap();

    assert_eq!(batch.num_rows(), 3);
    assert_eq!(batch.schema().field(2).name(), "count");
}
