use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tally_model::{Number, ReportFormat};

use crate::types::RenderOutcome;

pub fn print_summary(outcome: &RenderOutcome) {
    eprintln!("{}", summary_table(outcome));
}

pub fn summary_table(outcome: &RenderOutcome) -> Table {
    let report = &outcome.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Viewer"),
        header_cell("Role"),
        header_cell("Format"),
        header_cell("Visible"),
        header_cell("Hidden"),
        header_cell("Promoted"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for index in 3..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.viewer.display_name()),
        Cell::new(outcome.viewer.role),
        format_cell(&outcome.format),
        Cell::new(report.visible),
        count_cell(report.hidden, Color::Yellow),
        count_cell(report.promoted.len(), Color::Green),
        Cell::new(Number(report.total)).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn formats_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Format"), header_cell("Output")]);
    apply_table_style(&mut table);
    for token in ReportFormat::RECOGNIZED {
        let description = match ReportFormat::parse(token) {
            ReportFormat::Csv => "Header row, one record per item, blank line, total",
            ReportFormat::Html => "HTML document with one table row per item",
            ReportFormat::Unrecognized(_) => "",
        };
        table.add_row(vec![Cell::new(token), Cell::new(description)]);
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn format_cell(format: &ReportFormat) -> Cell {
    if format.is_recognized() {
        Cell::new(format)
    } else {
        Cell::new(format!("{format} (unrecognized)")).fg(Color::Red)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count).add_attribute(Attribute::Dim)
    } else {
        Cell::new(count).fg(color)
    }
}
