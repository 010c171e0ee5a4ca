//! Human-facing tables for mapping and import results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nestory_map::MappingResult;
use nestory_model::{Archive, ImportReport};

pub fn print_inspect(archive: &Archive) {
    println!("Exported: {}", archive.export_date.to_rfc3339());
    println!("Producer: v{}", archive.app_version);
    let mut table = new_table(vec![header_cell("Collection"), header_cell("Records")]);
    table.add_row(vec![Cell::new("Items"), count_cell(archive.items.len())]);
    table.add_row(vec![
        Cell::new("Categories"),
        count_cell(archive.categories.len()),
    ]);
    table.add_row(vec![Cell::new("Rooms"), count_cell(archive.rooms.len())]);
    table.add_row(vec![
        Cell::new("Receipts"),
        count_cell(archive.receipts.len()),
    ]);
    println!("{table}");
}

pub fn print_mapping(result: &MappingResult) {
    let mut table = new_table(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Field"),
        header_cell("Confidence"),
    ]);
    for mapping in &result.mappings {
        let (field, confidence) = match mapping.field {
            Some(field) => (
                Cell::new(field.display_name()),
                Cell::new(format!("{:.0}%", mapping.confidence * 100.0))
                    .set_alignment(CellAlignment::Right),
            ),
            None => (
                Cell::new("-").fg(Color::DarkGrey),
                Cell::new("").set_alignment(CellAlignment::Right),
            ),
        };
        table.add_row(vec![
            Cell::new(mapping.column_index).set_alignment(CellAlignment::Right),
            Cell::new(&mapping.header),
            field,
            confidence,
        ]);
    }
    println!("{table}");

    if result.is_valid {
        println!("Mapping covers all mandatory fields.");
    } else {
        let missing: Vec<&str> = result
            .missing_required
            .iter()
            .map(|field| field.display_name())
            .collect();
        println!("Missing mandatory fields: {}", missing.join(", "));
    }
}

pub fn print_report(report: &ImportReport) {
    println!("{}", report.summary());
    if !report.has_errors() {
        return;
    }
    let mut table = new_table(vec![header_cell("Error")]);
    for error in &report.errors {
        table.add_row(vec![Cell::new(&error.message).fg(Color::Red)]);
    }
    println!("{table}");
}

fn new_table(header: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
