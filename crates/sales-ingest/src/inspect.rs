//! Table inspection backed by a polars `DataFrame`.
//!
//! Column types are inferred from the text cells: a column whose non-empty
//! cells all parse as integers becomes `i64`, then `f64`, otherwise `str`.
//! Empty cells are nulls.

use polars::prelude::*;

use crate::csv_table::CsvTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferredType {
    Integer,
    Float,
    Text,
}

pub fn infer_type(values: &[&str]) -> InferredType {
    let present: Vec<&str> = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();
    if present.is_empty() {
        return InferredType::Text;
    }
    if present.iter().all(|value| value.parse::<i64>().is_ok()) {
        InferredType::Integer
    } else if present.iter().all(|value| value.parse::<f64>().is_ok()) {
        InferredType::Float
    } else {
        InferredType::Text
    }
}

fn build_column(name: &str, values: &[&str]) -> Column {
    let name: PlSmallStr = name.into();
    match infer_type(values) {
        InferredType::Integer => {
            let parsed: Vec<Option<i64>> = values
                .iter()
                .map(|value| value.trim().parse::<i64>().ok())
                .collect();
            Series::new(name, parsed).into_column()
        }
        InferredType::Float => {
            let parsed: Vec<Option<f64>> = values
                .iter()
                .map(|value| value.trim().parse::<f64>().ok())
                .collect();
            Series::new(name, parsed).into_column()
        }
        InferredType::Text => {
            let text: Vec<Option<&str>> = values
                .iter()
                .map(|value| if value.is_empty() { None } else { Some(*value) })
                .collect();
            Series::new(name, text).into_column()
        }
    }
}

/// Build a typed `DataFrame` from a text table.
pub fn table_to_frame(table: &CsvTable) -> PolarsResult<DataFrame> {
    let columns: Vec<Column> = table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<&str> = table.rows.iter().map(|row| row[idx].as_str()).collect();
            build_column(name, &values)
        })
        .collect();
    DataFrame::new(columns)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub missing: usize,
}

/// Shape, per-column types and missing counts, plus the first rows.
#[derive(Debug, Clone)]
pub struct TableProfile {
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
    pub sample: DataFrame,
}

impl TableProfile {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns.len())
    }
}

pub fn profile_table(table: &CsvTable, sample_rows: usize) -> PolarsResult<TableProfile> {
    let frame = table_to_frame(table)?;
    let columns = frame
        .get_columns()
        .iter()
        .map(|column| ColumnProfile {
            name: column.name().to_string(),
            dtype: column.dtype().to_string(),
            missing: column.null_count(),
        })
        .collect();
    Ok(TableProfile {
        rows: frame.height(),
        columns,
        sample: frame.head(Some(sample_rows)),
    })
}
