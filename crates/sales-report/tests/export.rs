//! Integration tests for the file writers.

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use sales_metrics::MetricsEngine;
use sales_model::{CleanRecord, OrderStatus};
use sales_report::{BusinessReport, ExportError, ReportOptions, write_clean_csv, write_report_json};

fn records() -> Vec<CleanRecord> {
    vec![
        CleanRecord {
            order_id: "ORD1000".to_string(),
            customer_id: "CUST7".to_string(),
            order_date: NaiveDate::from_ymd_opt(2023, 5, 4),
            product_category: "Home & Garden".to_string(),
            product_name: "Lamp, Desk".to_string(),
            quantity: 2.0,
            unit_price: Some(19.5),
            order_amount: 39.0,
            status: OrderStatus::Completed,
        },
        CleanRecord {
            order_id: "ORD1001".to_string(),
            customer_id: "CUST8".to_string(),
            order_date: None,
            product_category: "Books".to_string(),
            product_name: "Fiction".to_string(),
            quantity: 1.0,
            unit_price: None,
            order_amount: 12.25,
            status: OrderStatus::Pending,
        },
    ]
}

#[test]
fn test_write_clean_csv_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out").join("sales_clean.csv");

    let written = write_clean_csv(&path, &records()).unwrap();

    assert_eq!(written, path);
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "order_id,customer_id,order_date,product_category,product_name,quantity,unit_price,order_amount,status",
            "ORD1000,CUST7,2023-05-04,Home & Garden,\"Lamp, Desk\",2,19.5,39,completed",
            "ORD1001,CUST8,,Books,Fiction,1,,12.25,pending",
        ]
    );
}

#[test]
fn test_write_clean_csv_with_no_records_writes_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");

    write_clean_csv(&path, &[]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be opened as a file.
    let err = write_clean_csv(dir.path(), &records()).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}

#[test]
fn test_write_report_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    let data = records();
    let report = BusinessReport::build(&MetricsEngine::new(&data), &ReportOptions::default());

    write_report_json(&path, &report).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["answers"].as_array().map(Vec::len), Some(8));
    assert_eq!(value["metrics"]["total_orders"], 1);
}
