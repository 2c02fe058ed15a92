//! Result summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::types::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    if result.dry_run {
        return;
    }
    println!("Type: {}", display_type_name(&result.type_name));
    println!("Package: {}", result.package_name);
    println!("Output: {}", result.destination.display());
    if !result.formatted {
        println!("Formatting: skipped");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("CSV header"),
    ]);
    apply_table_style(&mut table);
    for field in &result.fields {
        table.add_row(vec![
            Cell::new(&field.name),
            Cell::new(field.scalar_type.rust_name()),
            Cell::new(&field.original_header),
        ]);
    }
    println!("{table}");
}

fn display_type_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
