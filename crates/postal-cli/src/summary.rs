//! Console summary printed after a run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Stream"),
        header_cell("Rows"),
        header_cell("Output"),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("Accepted").fg(Color::Green),
        Cell::new(summary.accepted),
        Cell::new(summary.accepted_path.display()),
    ]);
    table.add_row(vec![
        Cell::new("Rejected").fg(Color::Yellow),
        Cell::new(summary.rejected),
        Cell::new(summary.rejected_path.display()),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.input_rows).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
