//! Human-readable command summaries.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;
use tabmap_transform::frame::any_to_scalar;

use crate::commands::{ApplyResult, StepSummary};

/// Prints the step table and an output preview to stderr.
///
/// Stdout is reserved for CSV output when no output file is given.
pub fn print_apply_summary(result: &ApplyResult) {
    if let Some(path) = &result.output {
        eprintln!("Output: {}", path.display());
    }
    eprintln!("Rows: {}", result.rows);
    eprintln!("{}", steps_table(&result.steps));
    if result.preview.height() > 0 {
        eprintln!("{}", preview_table(&result.preview));
    }
}

/// Prints the validated steps of a configuration.
pub fn print_check_summary(steps: &[StepSummary]) {
    println!("{}", steps_table(steps));
}

/// Table listing each step and the columns it touches.
pub fn steps_table(steps: &[StepSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Transformer"),
        header_cell("Source columns"),
        header_cell("Adjust column"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, step) in steps.iter().enumerate() {
        let adjust = match &step.adjust_column {
            Some(column) => Cell::new(column),
            None => dim_cell("(in place)"),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(step.transformer),
            Cell::new(step.source_columns.join(", ")),
            adjust,
        ]);
    }
    table
}

/// Table showing the rows of `df`.
pub fn preview_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 0..df.height() {
        let row: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| match column.get(idx) {
                Ok(value) => {
                    let scalar = any_to_scalar(value);
                    if scalar.is_null() {
                        dim_cell("null")
                    } else {
                        Cell::new(scalar.render())
                    }
                }
                Err(_) => dim_cell("?"),
            })
            .collect();
        table.add_row(row);
    }
    table
}

fn apply_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
