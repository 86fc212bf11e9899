use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sales_algorithms::Timing;
use sales_ingest::TableProfile;
use sales_metrics::StatusCount;
use sales_model::OrderStatus;
use sales_report::{BusinessReport, format_currency};
use sales_transform::CoercionField;

use sales_cli::pipeline::PipelineResult;

const BANNER_WIDTH: usize = 50;

fn banner(title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{rule}\n{title}\n{rule}");
}

pub fn print_run_summary(result: &PipelineResult) {
    println!("Input: {}", result.input.display());
    println!(
        "Loaded {} records ({} columns)",
        result.raw_rows, result.raw_columns
    );
    match &result.export {
        Some(Ok(path)) => println!("Clean data: {}", path.display()),
        Some(Err(_)) => println!("Clean data: export failed"),
        None => println!("Clean data: not exported"),
    }

    let cleaning = &result.cleaning;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Cleaning step"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input rows"), Cell::new(cleaning.input_rows)]);
    table.add_row(vec![
        Cell::new("Missing status filled"),
        count_cell(cleaning.status_filled, Color::Yellow),
    ]);
    for field in CoercionField::ALL {
        table.add_row(vec![
            Cell::new(format!("Unparsable {field}")),
            count_cell(cleaning.warnings.count(field), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Invalid removed"),
        count_cell(cleaning.invalid_removed, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(cleaning.duplicates_removed, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Clean rows")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(cleaning.output_rows()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_status_table(&result.status_counts);
    print_category_table(&result.report);
}

fn print_status_table(counts: &[StatusCount]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Orders")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for count in counts {
        table.add_row(vec![status_cell(count.status), Cell::new(count.count)]);
    }
    println!("{table}");
}

fn print_category_table(report: &BusinessReport) {
    if report.top_categories.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Completed orders"),
        header_cell("Revenue"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rank, category) in report.top_categories.iter().enumerate() {
        let name = if category.key.is_empty() {
            dim_cell("(blank)")
        } else if rank == 0 {
            Cell::new(&category.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&category.key)
        };
        table.add_row(vec![
            name,
            Cell::new(category.orders),
            Cell::new(format_currency(category.total)),
        ]);
    }
    println!("{table}");
}

pub fn print_report(report: &BusinessReport) {
    banner("BUSINESS INSIGHTS");
    print!("{}", report.render_text());
}

pub fn print_benchmarks(sorting: &[Timing], searching: &[Timing]) {
    banner("ALGORITHM PERFORMANCE");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Comparison"),
        header_cell("Algorithm"),
        header_cell("Elements"),
        header_cell("Seconds"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let groups = [("Sorting", sorting), ("Searching", searching)];
    for (label, timings) in groups {
        for (idx, timing) in timings.iter().enumerate() {
            let group = if idx == 0 {
                Cell::new(label).add_attribute(Attribute::Bold)
            } else {
                dim_cell("")
            };
            table.add_row(vec![
                group,
                Cell::new(timing.name),
                Cell::new(timing.elements),
                Cell::new(format!("{:.6}", timing.seconds())),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_profile(path: &Path, profile: &TableProfile) {
    let (rows, columns) = profile.shape();
    println!("Input: {}", path.display());
    println!("Shape: ({rows}, {columns})");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in &profile.columns {
        table.add_row(vec![
            Cell::new(&column.name),
            dim_cell(&column.dtype),
            count_cell(column.missing, Color::Yellow),
        ]);
    }
    println!("{table}");
    println!("Sample data (first {} rows):", profile.sample.height());
    println!("{}", profile.sample);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: OrderStatus) -> Cell {
    let cell = Cell::new(status.as_str());
    match status {
        OrderStatus::Completed => cell.fg(Color::Green),
        OrderStatus::Pending => cell.fg(Color::Yellow),
        OrderStatus::Cancelled => cell.fg(Color::Red),
    }
}

/// Zero counts are dimmed, others take `color`.
fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
