use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use sales_algorithms::{compare_searching, compare_sorting, descending_sequence};
use sales_cli::generate::{GenerateOptions, generate_orders, write_raw_csv};
use sales_cli::pipeline::{PipelineOptions, run_pipeline};
use sales_ingest::{IngestOptions, profile_table, read_csv_table_with_options};
use sales_report::{ReportOptions, write_report_json};

use crate::cli::{BenchmarkArgs, GenerateArgs, InspectArgs, RunArgs};
use crate::summary::{print_benchmarks, print_profile, print_report, print_run_summary};

/// Smallest starting value of the descending benchmark sample.
const BENCHMARK_SAMPLE_START: i64 = 10_000;

/// Full pipeline. `Ok(false)` means the report was produced but the clean
/// CSV or the report JSON could not be written.
pub fn run_analysis(args: &RunArgs) -> Result<bool> {
    let options = PipelineOptions {
        input: args.input.clone(),
        ingest: IngestOptions::default().with_delimiter(args.delimiter),
        output: (!args.no_export).then(|| args.output.clone()),
        report: ReportOptions {
            top_customers: args.top_customers,
            top_categories: args.top_categories,
        },
    };
    let result = run_pipeline(&options)
        .with_context(|| format!("load {}", args.input.display()))?;

    print_run_summary(&result);
    print_report(&result.report);

    // Write failures are reported after the benchmarks and fail the exit code.
    let mut failures: Vec<String> = Vec::new();
    if let Some(Err(error)) = &result.export {
        failures.push(error.to_string());
    }
    if let Some(path) = &args.report_json {
        match write_report_json(path, &result.report) {
            Ok(written) => println!("Report JSON: {}", written.display()),
            Err(error) => {
                error!(error = %error, "report JSON export failed");
                failures.push(error.to_string());
            }
        }
    }

    if !args.skip_benchmarks {
        run_benchmark(&BenchmarkArgs {
            sort_size: 1000,
            search_size: 10_000,
            target: 7500,
        })?;
    }

    for failure in &failures {
        eprintln!("error: {failure}");
    }
    Ok(failures.is_empty())
}

pub fn run_inspect(args: &InspectArgs) -> Result<bool> {
    let span = info_span!("inspect", path = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let ingest = IngestOptions::default().with_delimiter(args.delimiter);
    let table = read_csv_table_with_options(&args.input, &ingest)
        .with_context(|| format!("load {}", args.input.display()))?;
    let profile = profile_table(&table, args.sample).context("build data frame")?;
    info!(
        record_count = profile.rows,
        duration_ms = start.elapsed().as_millis(),
        "inspection complete"
    );
    print_profile(&args.input, &profile);
    Ok(true)
}

pub fn run_generate(args: &GenerateArgs) -> Result<bool> {
    let options = GenerateOptions {
        orders: args.orders,
        seed: args.seed,
    };
    let records = generate_orders(&options)?;
    write_raw_csv(&args.output, &records)?;
    println!(
        "Generated {} orders in {}",
        records.len(),
        args.output.display()
    );
    Ok(true)
}

pub fn run_benchmark(args: &BenchmarkArgs) -> Result<()> {
    let span = info_span!("benchmark");
    let _guard = span.enter();
    let largest = i64::try_from(args.sort_size.max(args.search_size))
        .context("benchmark size does not fit in i64")?;
    let sample = descending_sequence(BENCHMARK_SAMPLE_START.max(largest));
    let sort_data = &sample[..args.sort_size];
    let search_data = &sample[..args.search_size];
    let sorting = compare_sorting(sort_data);
    let searching = compare_searching(search_data, args.target);
    print_benchmarks(&sorting, &searching);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn run_args(dir: &TempDir) -> RunArgs {
        let input = dir.path().join("sales_data.csv");
        fs::write(
            &input,
            "order_id,customer_id,order_date,product_category,product_name,quantity,unit_price,order_amount,status\n\
             ORD1,CUST1,2023-01-05,Books,Fiction,1,10,10,completed\n",
        )
        .unwrap();
        RunArgs {
            input,
            delimiter: b',',
            output: dir.path().join("sales_clean.csv"),
            report_json: None,
            top_customers: 10,
            top_categories: 5,
            no_export: false,
            skip_benchmarks: true,
        }
    }

    #[test]
    fn report_json_failure_sets_failed_status_and_still_exports() {
        let dir = TempDir::new().unwrap();
        let args = RunArgs {
            report_json: Some(dir.path().to_path_buf()),
            ..run_args(&dir)
        };

        assert!(!run_analysis(&args).unwrap());
        assert!(dir.path().join("sales_clean.csv").exists());
    }

    #[test]
    fn successful_run_reports_success() {
        let dir = TempDir::new().unwrap();
        let args = RunArgs {
            report_json: Some(dir.path().join("report.json")),
            ..run_args(&dir)
        };

        assert!(run_analysis(&args).unwrap());
        assert!(dir.path().join("report.json").exists());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_benchmark_is_an_error() {
        let args = BenchmarkArgs {
            sort_size: usize::MAX,
            search_size: 10,
            target: 1,
        };
        assert!(run_benchmark(&args).is_err());
    }
}
