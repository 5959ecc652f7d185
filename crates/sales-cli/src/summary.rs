use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use sales_ingest::any_to_opt_string;

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Cleaned data saved to: {}", result.output_path.display());
    println!(
        "Input: {} (parsed with {} strategy)",
        result.input_path.display(),
        result.strategy
    );
    println!("{}", stage_table(result));
    if !result.summary.collisions.is_empty() {
        eprintln!(
            "warning: columns collided after normalization: {}",
            result.summary.collisions.join(", ")
        );
    }
    println!();
    println!("Preview:");
    println!("{}", preview_table(&result.preview));
}

/// Row counts per stage.
pub fn stage_table(result: &CleanResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let completeness = result.summary.completeness;
    let validity = result.summary.validity;
    table.add_row(vec![
        Cell::new("Loaded"),
        Cell::new(result.loaded_rows),
        count_cell(result.discarded_rows),
    ]);
    table.add_row(vec![
        Cell::new("Complete"),
        Cell::new(completeness.after),
        count_cell(completeness.dropped()),
    ]);
    table.add_row(vec![
        Cell::new("Valid").add_attribute(Attribute::Bold),
        Cell::new(validity.after).add_attribute(Attribute::Bold),
        count_cell(validity.dropped()),
    ]);
    table
}

/// Render the first rows of a frame. Nulls show as a dimmed dash.
pub fn preview_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 0..df.height() {
        let row: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| match any_to_opt_string(column.get(idx).unwrap_or(AnyValue::Null)) {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            })
            .collect();
        table.add_row(row);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
