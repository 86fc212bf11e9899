use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use sales_model::RawRecord;
use sales_model::columns::ORDER_COLUMNS;

use crate::csv_table::{CsvTable, IngestOptions, read_csv_table_with_options};
use crate::error::DataSourceError;

/// Raw order records in file order, plus the shape of the source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl RawTable {
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

pub fn load_raw_records(path: &Path) -> Result<RawTable, DataSourceError> {
    load_raw_records_with_options(path, &IngestOptions::default())
}

/// Load the sales file at `path` into raw records.
///
/// Columns are matched by header name, so their order in the file does not
/// matter; extra columns are ignored.
pub fn load_raw_records_with_options(
    path: &Path,
    options: &IngestOptions,
) -> Result<RawTable, DataSourceError> {
    let start = Instant::now();
    let table = read_csv_table_with_options(path, options)?;
    let records = records_from_table(&table, path)?;
    let raw = RawTable {
        columns: table.headers,
        records,
    };
    info!(
        path = %path.display(),
        row_count = raw.row_count(),
        column_count = raw.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "loaded raw records"
    );
    Ok(raw)
}

/// Map table rows onto [`RawRecord`]s. Empty cells become `None`.
pub fn records_from_table(table: &CsvTable, path: &Path) -> Result<Vec<RawRecord>, DataSourceError> {
    let mut indices = [0usize; ORDER_COLUMNS.len()];
    for (slot, column) in indices.iter_mut().zip(ORDER_COLUMNS) {
        *slot = table
            .column_index(column)
            .ok_or_else(|| DataSourceError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })?;
    }
    let extra = table.column_count().saturating_sub(ORDER_COLUMNS.len());
    if extra > 0 {
        debug!(extra_columns = extra, "ignoring columns outside the order schema");
    }

    let cell = |row: &[String], idx: usize| -> Option<String> {
        row.get(idx).filter(|value| !value.is_empty()).cloned()
    };
    let [
        order_id,
        customer_id,
        order_date,
        product_category,
        product_name,
        quantity,
        unit_price,
        order_amount,
        status,
    ] = indices;

    Ok(table
        .rows
        .iter()
        .map(|row| RawRecord {
            order_id: cell(row, order_id),
            customer_id: cell(row, customer_id),
            order_date: cell(row, order_date),
            product_category: cell(row, product_category),
            product_name: cell(row, product_name),
            quantity: cell(row, quantity),
            unit_price: cell(row, unit_price),
            order_amount: cell(row, order_amount),
            status: cell(row, status),
        })
        .collect())
}
