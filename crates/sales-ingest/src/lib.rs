//! Sales data ingestion.
//!
//! - **csv_table**: delimited file reading into an untyped [`CsvTable`]
//! - **records**: mapping a table onto [`sales_model::RawRecord`]s
//! - **inspect**: polars-backed shape, type and missing-value profile

pub mod csv_table;
pub mod error;
pub mod inspect;
pub mod records;

pub use csv_table::{CsvTable, IngestOptions, read_csv_table, read_csv_table_with_options};
pub use error::DataSourceError;
pub use inspect::{ColumnProfile, InferredType, TableProfile, profile_table, table_to_frame};
pub use records::{RawTable, load_raw_records, load_raw_records_with_options, records_from_table};
