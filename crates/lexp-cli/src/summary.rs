use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lexp_cli::pipeline::CleanRunResult;

pub fn print_summary(result: &CleanRunResult) {
    println!("Country: {}", result.country);
    println!("Input: {}", result.input_path.display());
    if result.written {
        println!("Output: {}", result.output_path.display());
    } else {
        println!("Output: {} (dry run, not written)", result.output_path.display());
    }
    println!("{}", summary_table(result));
}

fn summary_table(result: &CleanRunResult) -> Table {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Rows read"), Cell::new(stats.input_rows)]);
    table.add_row(vec![Cell::new("Observations"), Cell::new(stats.observations)]);
    table.add_row(vec![dim_cell("Other regions"), dim_cell(stats.other_regions)]);
    table.add_row(vec![
        Cell::new("Malformed keys"),
        count_cell(stats.malformed_keys, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Invalid years"),
        count_cell(stats.invalid_years, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Invalid values"),
        count_cell(stats.invalid_values, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Rows written").add_attribute(Attribute::Bold),
        Cell::new(stats.kept)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
