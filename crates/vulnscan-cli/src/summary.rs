use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vulnscan_cli::types::RunOutcome;
use vulnscan_remediate::RotationReport;

pub fn print_summary(outcome: &RunOutcome) {
    println!("Command: {}", outcome.command);
    println!("Input: {}", outcome.input.display());
    println!("Rows read: {}", outcome.rows_read);
    if outcome.rows_skipped > 0 || outcome.duplicates > 0 {
        println!("Rows skipped (no IP or QID): {}", outcome.rows_skipped);
        println!("Duplicates collapsed: {}", outcome.duplicates);
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Columns"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for output in &outcome.outputs {
        table.add_row(vec![
            Cell::new(output.path.display()),
            Cell::new(output.columns.name).fg(Color::Blue),
            count_cell(output.rows),
        ]);
    }
    println!("{table}");
}

pub fn print_rotation_summary(report: &RotationReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Function"), header_cell("Status")]);
    apply_table_style(&mut table);
    for name in &report.updated {
        table.add_row(vec![
            Cell::new(name),
            Cell::new("dry run").fg(Color::Yellow),
        ]);
    }
    println!("{table}");
    println!("Functions processed: {}", report.updated.len());
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
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
