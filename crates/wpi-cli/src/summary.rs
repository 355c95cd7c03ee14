use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wpi_cli::wizard::RunOutcome;
use wpi_core::ImportSession;
use wpi_map::MappingPreset;
use wpi_model::{FieldCatalog, FieldGroup, FieldType, FieldValue, ParsedRow};

use crate::cli::RunArgs;

pub fn print_run_summary(args: &RunArgs, outcome: &RunOutcome) {
    println!("Source: {}", outcome.source_id);
    println!("Store: {}", args.store.display());
    if let Some(path) = &outcome.error_file {
        println!("Error file: {}", path.display());
    }
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Duplicates"),
        header_cell("Imported"),
        header_cell("Skipped"),
        header_cell("Errors"),
    ]);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.total_rows),
        Cell::new(outcome.valid_rows),
        count_cell(outcome.duplicate_rows, Color::Yellow),
        Cell::new(outcome.results.imported_count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(outcome.results.skipped_duplicates, Color::Yellow),
        count_cell(outcome.results.error_count(), Color::Red),
    ]);
    println!("{table}");
    if outcome.results.cancelled {
        println!("Import cancelled between batches; unwritten rows are listed in the error file.");
    }
    print_error_rows(&outcome.results.error_rows);
}

pub fn print_check_preview(rows: &[ParsedRow], eligible: usize) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Name"),
        header_cell("Valid"),
        header_cell("Duplicate of"),
        header_cell("Problems"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for row in rows {
        let name = row
            .mapped
            .get("name")
            .and_then(FieldValue::as_text)
            .unwrap_or("-");
        let duplicate = match &row.duplicate_of {
            Some(existing) => Cell::new(existing).fg(Color::Yellow),
            None => dim_cell("-"),
        };
        let problems = if row.errors.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(row.errors.join("; ")).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(row.row_number()),
            Cell::new(name),
            flag_cell(row.is_valid),
            duplicate,
            problems,
        ]);
    }
    println!("{table}");
    let valid = rows.iter().filter(|row| row.is_valid).count();
    let duplicates = rows.iter().filter(|row| row.is_duplicate).count();
    println!(
        "{} rows: {valid} valid, {duplicates} duplicates, {eligible} eligible for import",
        rows.len()
    );
}

pub fn print_mapping(session: &ImportSession<'_>) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Required"),
        header_cell("Column"),
    ]);
    align_column(&mut table, 2, CellAlignment::Center);
    for field in session.catalog().fields() {
        let column = match session.mapping().column_for(field.key) {
            Some(column) => Cell::new(column),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(field.key),
            Cell::new(field.label),
            flag_cell(field.required),
            column,
        ]);
    }
    println!("{table}");
    let missing = session.unmapped_required();
    if !missing.is_empty() {
        let keys: Vec<&str> = missing.iter().map(|field| field.key).collect();
        println!("Unmapped required fields: {}", keys.join(", "));
    }
    let hints = session.hints();
    if hints.is_empty() {
        return;
    }
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Looks like"),
        header_cell("Similarity"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    for hint in &hints {
        table.add_row(vec![
            Cell::new(&hint.column),
            Cell::new(hint.field_key),
            Cell::new(format!("{:.0}%", hint.similarity * 100.0)),
        ]);
    }
    println!();
    println!("Close matches:");
    println!("{table}");
}

pub fn print_fields(catalog: &FieldCatalog) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Aliases"),
    ]);
    align_column(&mut table, 4, CellAlignment::Center);
    for group in FieldGroup::ALL {
        for field in catalog.group_fields(group) {
            table.add_row(vec![
                Cell::new(group.as_str()),
                Cell::new(field.key),
                Cell::new(field.label),
                Cell::new(type_name(field.field_type)),
                flag_cell(field.required),
                Cell::new(field.aliases.join(", ")),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_presets(presets: &[MappingPreset], path: &Path) {
    if presets.is_empty() {
        println!("No presets saved at {}", path.display());
        return;
    }
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Mapped fields"),
        header_cell("Created"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    for preset in presets {
        table.add_row(vec![
            Cell::new(&preset.id),
            Cell::new(&preset.name),
            Cell::new(preset.mapping.len()),
            Cell::new(&preset.created_at),
        ]);
    }
    println!("{table}");
}

fn print_error_rows(rows: &[ParsedRow]) {
    if rows.is_empty() {
        return;
    }
    let mut table = styled_table();
    table.set_header(vec![header_cell("Row"), header_cell("Problems")]);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.row_number()),
            Cell::new(row.errors.join("; ")),
        ]);
    }
    println!();
    println!("Rows needing attention:");
    println!("{table}");
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table
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

fn flag_cell(set: bool) -> Cell {
    if set {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn type_name(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Text => "text",
        FieldType::Number => "number",
        FieldType::Boolean => "boolean",
        FieldType::Array => "array",
        FieldType::Category => "category",
        FieldType::Price => "price",
    }
}
