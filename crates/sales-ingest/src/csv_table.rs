use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::DataSourceError;

/// Untyped table: a header row plus text cells.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of a header, compared case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable, DataSourceError> {
    read_csv_table_with_options(path, &IngestOptions::default())
}

/// Read a delimited file whose first non-blank row is the header.
///
/// Blank lines are skipped and short rows are padded with empty cells.
/// Empty trailing cells past the last header are dropped; a non-empty one
/// fails with [`DataSourceError::RaggedRow`].
pub fn read_csv_table_with_options(
    path: &Path,
    options: &IngestOptions,
) -> Result<CsvTable, DataSourceError> {
    let file = File::open(path).map_err(|source| DataSourceError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(file);

    let mut records = reader.records();
    let mut headers: Option<Vec<String>> = None;
    for record in records.by_ref() {
        let record = record.map_err(|source| DataSourceError::csv(path, source))?;
        if is_blank(&record) {
            continue;
        }
        headers = Some(record.iter().map(normalize_header).collect());
        break;
    }
    let Some(headers) = headers else {
        return Err(DataSourceError::Empty {
            path: path.to_path_buf(),
        });
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| DataSourceError::csv(path, source))?;
        if is_blank(&record) {
            continue;
        }
        let overflow = record.iter().skip(headers.len());
        if overflow.clone().any(|value| !value.trim().is_empty()) {
            return Err(DataSourceError::RaggedRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: headers.len() + overflow.count(),
            });
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).map(normalize_cell).unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_header_whitespace_and_bom() {
        assert_eq!(normalize_header("\u{feff} order_id "), "order_id");
        assert_eq!(normalize_header("product   category"), "product category");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn column_index_ignores_case() {
        let table = CsvTable {
            headers: vec!["Order_ID".to_string(), "status".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.column_index("order_id"), Some(0));
        assert_eq!(table.column_index("STATUS"), Some(1));
        assert_eq!(table.column_index("quantity"), None);
    }
}
