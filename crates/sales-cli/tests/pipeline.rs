//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use insta::assert_json_snapshot;
use tempfile::TempDir;

use sales_cli::generate::{GenerateOptions, generate_orders, write_raw_csv};
use sales_cli::pipeline::{PipelineOptions, run_pipeline};
use sales_ingest::{DataSourceError, IngestOptions, load_raw_records};
use sales_report::{Answer, ExportError, ReportOptions};

const SALES_CSV: &str = "\
order_id,customer_id,order_date,product_category,product_name,quantity,unit_price,order_amount,status
ORD1,CUST1,2023-01-05,Books,Fiction,1,10,10,completed
ORD2,CUST2,2023-01-06,Sports,Bike,2,100,200,
ORD1,CUST1,2023-01-05,Books,Fiction,1,10,10,completed
ORD3,CUST3,bad-date,Books,Art,1,5,-5,completed
ORD4,CUST1,2023-02-10,Clothing,Jeans,1,40,40,cancelled
ORD5,CUST2,2023-02-11,Sports,Bike,1,abc,300,completed
";

fn write_input(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("sales_data.csv");
    fs::write(&path, SALES_CSV).unwrap();
    path
}

fn options(input: &Path, output: Option<PathBuf>) -> PipelineOptions {
    PipelineOptions {
        input: input.to_path_buf(),
        ingest: IngestOptions::default(),
        output,
        report: ReportOptions::default(),
    }
}

#[test]
fn test_pipeline_cleans_and_reports() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);

    let result = run_pipeline(&options(&input, None)).unwrap();

    assert_eq!(result.raw_rows, 6);
    assert_eq!(result.raw_columns, 9);
    assert!(result.export.is_none());
    assert_json_snapshot!(result.cleaning, @r#"
    {
      "input_rows": 6,
      "status_filled": 1,
      "invalid_removed": 1,
      "duplicates_removed": 1,
      "warnings": {
        "order_date": 1,
        "quantity": 0,
        "unit_price": 1,
        "order_amount": 0,
        "status": 0
      }
    }
    "#);

    let ids: Vec<&str> = result.records.iter().map(|r| r.order_id.as_str()).collect();
    assert_eq!(ids, vec!["ORD1", "ORD2", "ORD4", "ORD5"]);
    assert_eq!(result.report.metrics.total_revenue, 310.0);
    assert_eq!(result.report.metrics.customer_count, 2);
    assert_eq!(
        result.report.answer(6),
        Some(&Answer::Scalar("100.0%".to_string()))
    );
    assert_eq!(
        result.report.answer(8),
        Some(&Answer::Scalar("25.0%".to_string()))
    );
}

#[test]
fn test_pipeline_export_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("out").join("sales_clean.csv");

    let first = run_pipeline(&options(&input, Some(output.clone()))).unwrap();
    assert_eq!(first.export.as_ref().unwrap().as_ref().unwrap(), &output);

    let exported = load_raw_records(&output).unwrap();
    assert_eq!(exported.row_count(), 4);

    let second = run_pipeline(&options(&output, None)).unwrap();
    assert_eq!(second.records, first.records);
    assert_eq!(second.cleaning.removed(), 0);
}

#[test]
fn test_export_failure_keeps_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    // The temp dir itself is not a writable file path.
    let result = run_pipeline(&options(&input, Some(dir.path().to_path_buf()))).unwrap();

    assert!(result.export_failed());
    assert!(matches!(result.export, Some(Err(ExportError::Io { .. }))));
    assert_eq!(result.report.answers.len(), 8);
}

#[test]
fn test_missing_input_is_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");

    let error = run_pipeline(&options(&missing, None)).unwrap_err();

    assert!(matches!(error, DataSourceError::NotFound { .. }));
}

#[test]
fn test_generated_data_runs_through_pipeline() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data").join("sales_data.csv");
    let records = generate_orders(&GenerateOptions::default()).unwrap();
    write_raw_csv(&input, &records).unwrap();

    let result = run_pipeline(&options(&input, None)).unwrap();

    assert_eq!(result.raw_rows, 200);
    assert_eq!(result.cleaning.duplicates_removed, 0);
    assert_eq!(result.cleaning.invalid_removed, 0);
    assert_eq!(result.records.len(), 200);
    assert!(result.cleaning.status_filled > 0);
    assert!(result.report.metrics.total_revenue > 0.0);
    assert_eq!(result.report.monthly_trend.len(), 12);
}

#[test]
fn test_pipeline_reads_semicolon_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sales_data.csv");
    fs::write(&input, SALES_CSV.replace(',', ";")).unwrap();

    let result = run_pipeline(&PipelineOptions {
        ingest: IngestOptions::default().with_delimiter(b';'),
        ..options(&input, None)
    })
    .unwrap();

    assert_eq!(result.raw_columns, 9);
    assert_eq!(result.records.len(), 4);
}

#[test]
fn test_shifted_row_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sales_data.csv");
    let contents = format!("{SALES_CSV}ORD9,CUST9,2023-03-01,Home, Garden,Lamp,2,10,20,completed\n");
    fs::write(&input, contents).unwrap();

    let error = run_pipeline(&options(&input, None)).unwrap_err();

    assert!(matches!(error, DataSourceError::RaggedRow { line: 8, .. }));
}
