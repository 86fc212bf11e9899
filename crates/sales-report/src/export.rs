use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use sales_model::{CleanRecord, ORDER_COLUMNS};

use crate::error::ExportError;
use crate::report::BusinessReport;

fn create_output(path: &Path) -> Result<BufWriter<File>, ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ExportError::io(parent, source))?;
    }
    let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
    Ok(BufWriter::new(file))
}

/// Write the clean table with the source column order.
///
/// Dates are `YYYY-MM-DD`, unknown values are empty cells and numbers drop
/// trailing zeros. Parent directories are created as needed.
pub fn write_clean_csv(path: &Path, records: &[CleanRecord]) -> Result<PathBuf, ExportError> {
    let start = Instant::now();
    let mut writer = csv::Writer::from_writer(create_output(path)?);
    writer
        .write_record(ORDER_COLUMNS)
        .map_err(|source| ExportError::csv(path, source))?;
    for record in records {
        let raw = record.to_raw();
        let cells = [
            raw.order_id,
            raw.customer_id,
            raw.order_date,
            raw.product_category,
            raw.product_name,
            raw.quantity,
            raw.unit_price,
            raw.order_amount,
            raw.status,
        ];
        writer
            .write_record(cells.iter().map(|cell| cell.as_deref().unwrap_or_default()))
            .map_err(|source| ExportError::csv(path, source))?;
    }
    writer
        .flush()
        .map_err(|source| ExportError::io(path, source))?;
    info!(
        path = %path.display(),
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "exported clean data"
    );
    Ok(path.to_path_buf())
}

/// Write the report, answers and raw figures, as pretty JSON.
pub fn write_report_json(path: &Path, report: &BusinessReport) -> Result<PathBuf, ExportError> {
    let mut writer = create_output(path)?;
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| ExportError::io(path, source))?;
    info!(path = %path.display(), "wrote report JSON");
    Ok(path.to_path_buf())
}
