//! Pipeline stages for a `run`.
//!
//! Load and clean are sequential. Export and metrics then run side by side
//! on the same immutable clean slice.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{error, info, info_span};

use sales_ingest::{DataSourceError, IngestOptions, RawTable, load_raw_records_with_options};
use sales_metrics::{MetricsEngine, StatusCount};
use sales_model::CleanRecord;
use sales_report::{BusinessReport, ExportError, ReportOptions, write_clean_csv};
use sales_transform::{CleaningReport, clean_records};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub ingest: IngestOptions,
    /// Clean CSV destination; `None` skips the export.
    pub output: Option<PathBuf>,
    pub report: ReportOptions,
}

#[derive(Debug)]
pub struct PipelineResult {
    pub input: PathBuf,
    pub raw_rows: usize,
    pub raw_columns: usize,
    pub cleaning: CleaningReport,
    pub records: Vec<CleanRecord>,
    pub report: BusinessReport,
    pub status_counts: Vec<StatusCount>,
    /// Outcome of the export, `None` when it was skipped.
    pub export: Option<Result<PathBuf, ExportError>>,
}

impl PipelineResult {
    pub fn export_failed(&self) -> bool {
        matches!(self.export, Some(Err(_)))
    }
}

pub fn load(path: &Path, options: &IngestOptions) -> Result<RawTable, DataSourceError> {
    let span = info_span!("load", path = %path.display());
    span.in_scope(|| load_raw_records_with_options(path, options))
}

pub fn export(path: &Path, records: &[CleanRecord]) -> Result<PathBuf, ExportError> {
    let span = info_span!("export", path = %path.display());
    span.in_scope(|| {
        write_clean_csv(path, records).inspect_err(|error| {
            error!(error = %error, "export failed");
        })
    })
}

pub fn analyze(records: &[CleanRecord], options: &ReportOptions) -> (BusinessReport, Vec<StatusCount>) {
    let span = info_span!("report", record_count = records.len());
    span.in_scope(|| {
        let start = Instant::now();
        let engine = MetricsEngine::new(records);
        let report = BusinessReport::build(&engine, options);
        let status_counts = engine.status_breakdown();
        info!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "report complete"
        );
        (report, status_counts)
    })
}

/// Run load, clean, then export and analysis.
///
/// Only a load failure is returned as an error. An export failure is kept
/// in [`PipelineResult::export`] so the report is never lost.
pub fn run_pipeline(options: &PipelineOptions) -> Result<PipelineResult, DataSourceError> {
    let start = Instant::now();
    let raw = load(&options.input, &options.ingest)?;
    let raw_rows = raw.row_count();
    let raw_columns = raw.column_count();
    let cleaned = clean_records(&raw.records);
    let records = cleaned.records;

    let (exported, (report, status_counts)) = rayon::join(
        || options.output.as_deref().map(|path| export(path, &records)),
        || analyze(&records, &options.report),
    );

    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(PipelineResult {
        input: options.input.clone(),
        raw_rows,
        raw_columns,
        cleaning: cleaned.report,
        records,
        report,
        status_counts,
        export: exported,
    })
}
