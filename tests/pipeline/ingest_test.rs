//! Tests for parsing and validating uploaded payloads

use risk_reader::{
    ErrorKind, FilterSelection, ReaderConfig, RiskCount, RiskReaderError, SourceFormat,
    build_catalog, distribution, ingest, parse, variation,
};

use crate::utils::{SAMPLE_ROWS, csv_payload, ingest_csv, sample_csv, xlsx_payload};

#[test]
fn test_unsupported_extension_is_format_error() {
    let err = ingest(&sample_csv(), "data.txt", &ReaderConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.is_rejection());
}

#[test]
fn test_missing_required_columns_is_schema_error() {
    let payload = csv_payload(["año", "riesgo", "nombre_paciente"], &SAMPLE_ROWS);
    let err = parse(&payload, "riesgos.csv", &ReaderConfig::default()).unwrap_err();

    match &err {
        RiskReaderError::Schema { missing } => {
            assert_eq!(missing, &vec!["year", "risk", "name"]);
        }
        other => panic!("expected schema error, got {other:?}"),
    }
    assert!(err.is_rejection());
}

#[test]
fn test_spanish_headers_match_exactly() {
    let payload = csv_payload(["AÑO", "RIESGOS", "NOMBRE"], &SAMPLE_ROWS);
    let ingested = ingest(&payload, "riesgos.csv", &ReaderConfig::spanish()).unwrap();
    assert_eq!(ingested.table.len(), 3);

    // Unaccented headers are a different column
    let payload = csv_payload(["ANO", "RIESGOS", "NOMBRE"], &SAMPLE_ROWS);
    let err = ingest(&payload, "riesgos.csv", &ReaderConfig::spanish()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn test_well_formed_rows_are_all_kept() {
    let ingested = ingest_csv(&sample_csv()).unwrap();

    assert_eq!(ingested.format, SourceFormat::Csv);
    assert_eq!(ingested.report.rows_read, 3);
    assert_eq!(ingested.report.rows_dropped(), 0);
    assert_eq!(ingested.table.len(), SAMPLE_ROWS.len());

    let rows: Vec<(i32, &str, &str)> = ingested
        .table
        .iter()
        .map(|r| (r.year, r.risk.as_str(), r.name.as_str()))
        .collect();
    assert_eq!(rows, SAMPLE_ROWS.to_vec());
}

#[test]
fn test_invalid_rows_are_dropped_and_counted() {
    let payload = b"year,risk,name\n\
        2020,Alto,Ana\n\
        ,Bajo,Luis\n\
        2020.0,Medio,Eva\n\
        dos mil,Alto,Ana\n\
        2021,NA,Ana\n\
        2021.5,Alto,Ana\n";
    let ingested = ingest_csv(payload).unwrap();

    assert_eq!(ingested.report.rows_read, 6);
    assert_eq!(ingested.report.rows_kept, 2);
    assert_eq!(ingested.report.missing_field, 2);
    assert_eq!(ingested.report.invalid_year, 2);
    assert!(ingested.table.iter().all(|r| !r.risk.is_empty() && !r.name.is_empty()));
}

#[test]
fn test_extra_columns_pass_through() {
    let payload = b"id,year,risk,name,centro\n1,2020,Alto,Ana,Norte\n2,2021,Bajo,Luis,\n";
    let ingested = ingest_csv(payload).unwrap();

    assert_eq!(ingested.table.extra_columns(), &["id", "centro"]);
    assert_eq!(ingested.table.extra_value(0, "centro"), Some("Norte"));
    assert_eq!(ingested.table.extra_value(1, "centro"), None);
    assert_eq!(ingested.table.len(), 2);
}

#[test]
fn test_drop_incomplete_rows() {
    let config = ReaderConfig {
        drop_incomplete_rows: true,
        ..ReaderConfig::default()
    };
    let payload = b"year,risk,name,centro\n2020,Alto,Ana,Norte\n2021,Bajo,Luis,\n";
    let ingested = ingest(payload, "riesgos.csv", &config).unwrap();

    assert_eq!(ingested.table.len(), 1);
    assert_eq!(ingested.report.incomplete_row, 1);
}

#[test]
fn test_header_only_file_gives_empty_table() {
    let ingested = ingest_csv(b"year,risk,name\n").unwrap();
    assert!(ingested.table.is_empty());

    let catalog = build_catalog(&ingested.table, "All");
    assert_eq!(catalog.year_bounds, None);
    assert_eq!(catalog.risks, vec!["All"]);
    assert_eq!(catalog.names, vec!["All"]);
}

#[test]
fn test_catalog_is_sorted_and_idempotent() {
    let payload = b"year,risk,name\n2021,Bajo,Luis\n2019,Alto,Ana\n2020,Alto,Eva\n";
    let ingested = ingest_csv(payload).unwrap();

    let first = build_catalog(&ingested.table, "All");
    let second = build_catalog(&ingested.table, "All");
    assert_eq!(first, second);

    let bounds = first.year_bounds.unwrap();
    assert_eq!((bounds.min, bounds.max), (2019, 2021));
    assert_eq!(first.risks, vec!["All", "Alto", "Bajo"]);
    assert_eq!(first.names, vec!["All", "Ana", "Eva", "Luis"]);
}

#[test]
fn test_record_batch_export() {
    let ingested = ingest_csv(&sample_csv()).unwrap();
    let batch = ingested.table.to_record_batch().unwrap();

    assert_eq!(batch.num_rows(), 3);
    assert_eq!(batch.schema().field(0).name(), "year");
}

#[test]
fn test_xlsx_workbook_ingests_typed_cells() {
    let payload = xlsx_payload(["AÑO", "RIESGOS", "NOMBRE"], &SAMPLE_ROWS, "dos mil").unwrap();
    let ingested = ingest(&payload, "R.XLSX", &ReaderConfig::spanish()).unwrap();

    assert_eq!(ingested.format, SourceFormat::Xlsx);
    assert_eq!(ingested.report.rows_read, 4);
    assert_eq!(ingested.report.rows_kept, 3);
    assert_eq!(ingested.report.invalid_year, 1);

    let catalog = build_catalog(&ingested.table, "Todos");
    assert_eq!(catalog.risks, vec!["Todos", "Alto", "Bajo"]);
    assert_eq!(catalog.names, vec!["Todos", "Ana", "Luis"]);

    let selection = FilterSelection::new(2020, 2021);
    assert_eq!(
        distribution(&ingested.table, &selection).rows(),
        &[
            RiskCount::new(2020, "Alto", 1),
            RiskCount::new(2020, "Bajo", 1),
            RiskCount::new(2021, "Alto", 1),
        ]
    );
    let result = variation(&ingested.table, &selection);
    assert_eq!(result.totals(), vec![(2020, 2), (2021, 1)]);
    assert_eq!(result.rows()[0].variation_percent, None);
    assert_eq!(result.rows()[1].variation_percent, Some(-50.0));
}

#[test]
fn test_xlsx_workbook_with_other_headers_is_schema_error() {
    let payload = xlsx_payload(["AÑO", "RIESGOS", "NOMBRE"], &SAMPLE_ROWS, "dos mil").unwrap();
    let err = ingest(&payload, "r.xlsx", &ReaderConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}
