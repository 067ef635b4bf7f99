//! Tests for the dashboard state across uploads

use risk_reader::{Dashboard, ReaderConfig};

use crate::utils::{SAMPLE_ROWS, csv_payload, sample_csv};

#[test]
fn test_rejected_upload_leaves_catalog_unset() {
    let mut dashboard = Dashboard::default();
    assert!(dashboard.ingest(&sample_csv(), "data.txt").is_err());

    assert!(dashboard.catalog().is_none());
    assert_eq!(
        dashboard.status_message(),
        "File rejected. Make sure it is a CSV or Excel file with the columns 'year', 'risk', 'name'."
    );
}

#[test]
fn test_schema_and_format_errors_share_one_message() {
    let mut dashboard = Dashboard::default();
    dashboard.ingest(&sample_csv(), "data.txt").unwrap_err();
    let format_message = dashboard.status_message();

    let payload = csv_payload(["año", "riesgo", "nombre_paciente"], &SAMPLE_ROWS);
    dashboard.ingest(&payload, "riesgos.csv").unwrap_err();
    assert_eq!(dashboard.status_message(), format_message);
}

#[test]
fn test_new_upload_replaces_catalog() {
    let mut dashboard = Dashboard::default();
    dashboard.ingest(&sample_csv(), "a.csv").unwrap();
    assert_eq!(dashboard.catalog().unwrap().risks, vec!["All", "Alto", "Bajo"]);

    dashboard
        .ingest(b"year,risk,name\n2022,Medio,Eva\n", "b.csv")
        .unwrap();
    let catalog = dashboard.catalog().unwrap();
    assert_eq!(catalog.risks, vec!["All", "Medio"]);
    assert_eq!(catalog.names, vec!["All", "Eva"]);
}

#[test]
fn test_spanish_catch_all_label() {
    let mut dashboard = Dashboard::new(ReaderConfig::spanish());
    let payload = csv_payload(["AÑO", "RIESGOS", "NOMBRE"], &SAMPLE_ROWS);
    dashboard.ingest(&payload, "riesgos.csv").unwrap();

    let selection = dashboard.selection(2020, 2021, Some("Todos"), Some("Todos"));
    assert_eq!(dashboard.distribution(&selection).unwrap().total(), 3);

    let selection = dashboard.selection(2020, 2021, Some("Alto"), Some("Todos"));
    assert_eq!(dashboard.variation(&selection).unwrap().totals(), vec![(2020, 1), (2021, 1)]);
}

#[test]
fn test_fill_missing_years_from_config() {
    let config = ReaderConfig::from_json_str(r#"{"query": {"fill_missing_years": true}}"#).unwrap();
    let mut dashboard = Dashboard::new(config);
    dashboard
        .ingest(b"year,risk,name\n2018,Alto,Ana\n2020,Alto,Luis\n", "r.csv")
        .unwrap();

    let selection = dashboard.selection(2018, 2020, None, None);
    let result = dashboard.variation(&selection).unwrap();
    assert_eq!(result.totals(), vec![(2018, 1), (2019, 0), (2020, 1)]);
    assert_eq!(result.rows()[2].variation_percent, None);
}
