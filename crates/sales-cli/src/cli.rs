//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sales-analytics",
    version,
    about = "Sales analytics - clean order data and answer business questions",
    long_about = "Load a sales CSV, clean it, export the clean table and report\n\
                  revenue, customer and trend metrics. Also generates sample\n\
                  data and compares sort and search algorithm timings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load, clean, export and report, then run the algorithm benchmarks.
    Run(RunArgs),

    /// Print shape, column types, missing values and the first rows.
    Inspect(InspectArgs),

    /// Write a synthetic sales data set.
    Generate(GenerateArgs),

    /// Compare custom sort and search timings against the standard library.
    Benchmark(BenchmarkArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Sales CSV to analyze.
    #[arg(value_name = "INPUT", default_value = "data/sales_data.csv")]
    pub input: PathBuf,

    /// Field delimiter of the input file (a single character, or `tab`).
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,

    /// Destination of the clean CSV.
    #[arg(long = "output", value_name = "PATH", default_value = "data/sales_clean.csv")]
    pub output: PathBuf,

    /// Also write the report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Customers listed in the report.
    #[arg(long = "top-customers", value_name = "N", default_value_t = 10)]
    pub top_customers: usize,

    /// Categories listed in the summary table.
    #[arg(long = "top-categories", value_name = "N", default_value_t = 5)]
    pub top_categories: usize,

    /// Skip writing the clean CSV.
    #[arg(long = "no-export")]
    pub no_export: bool,

    /// Skip the algorithm benchmarks.
    #[arg(long = "skip-benchmarks")]
    pub skip_benchmarks: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Sales CSV to inspect.
    #[arg(value_name = "INPUT", default_value = "data/sales_data.csv")]
    pub input: PathBuf,

    /// Field delimiter of the input file (a single character, or `tab`).
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,

    /// Rows shown in the sample.
    #[arg(long = "sample", value_name = "N", default_value_t = 3)]
    pub sample: usize,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of orders.
    #[arg(long = "orders", value_name = "N", default_value_t = 200)]
    pub orders: usize,

    /// Random seed.
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Destination CSV.
    #[arg(long = "output", value_name = "PATH", default_value = "data/sales_data.csv")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct BenchmarkArgs {
    /// Elements taken from the descending sample for sorting.
    #[arg(long = "sort-size", value_name = "N", default_value_t = 1000)]
    pub sort_size: usize,

    /// Elements taken from the descending sample for searching.
    #[arg(long = "search-size", value_name = "N", default_value_t = 10000)]
    pub search_size: usize,

    /// Value searched for.
    #[arg(long = "target", default_value_t = 7500)]
    pub target: i64,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() && *byte != b'"' => Ok(*byte),
            _ => Err(format!("expected a single ASCII character, got {value:?}")),
        },
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
