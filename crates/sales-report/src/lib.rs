//! Report formatting and file outputs.
//!
//! - **format**: currency and percentage strings
//! - **report**: the eight business questions and their answers
//! - **export**: clean CSV and JSON report writers

pub mod error;
pub mod export;
pub mod format;
pub mod report;

pub use error::ExportError;
pub use export::{write_clean_csv, write_report_json};
pub use format::{format_currency, format_percent};
pub use report::{Answer, BusinessAnswer, BusinessReport, ReportOptions};
