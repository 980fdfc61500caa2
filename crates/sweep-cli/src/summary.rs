use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sweep_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows loaded"), Cell::new(result.rows_loaded)]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(result.duplicates_removed(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Rows written").add_attribute(Attribute::Bold),
        Cell::new(result.rows_cleaned).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(result.columns)]);
    table.add_row(vec![
        Cell::new("Numeric columns"),
        Cell::new(result.numeric_columns),
    ]);
    table.add_row(vec![
        Cell::new("Missing cells filled"),
        count_cell(result.cells_filled, Color::Yellow),
    ]);
    println!("{table}");

    let mut artifacts = Table::new();
    artifacts.set_header(vec![header_cell("Artifact"), header_cell("Path")]);
    apply_table_style(&mut artifacts);
    artifacts.add_row(vec![
        Cell::new("Cleaned data"),
        Cell::new(result.outputs.cleaned_data.display()),
    ]);
    artifacts.add_row(vec![
        Cell::new("Summary report"),
        Cell::new(result.outputs.summary_report.display()),
    ]);
    artifacts.add_row(vec![
        Cell::new("Histogram"),
        match &result.outputs.visual_summary {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("- (no numeric column)"),
        },
    ]);
    println!("{artifacts}");
    println!("Data cleaning process completed.");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
