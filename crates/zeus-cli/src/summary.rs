//! Terminal rendering of lookup and quote results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use zeus_core::Quote;
use zeus_model::{PricedPublication, Publication};
use zeus_postcode::{PostcodeParts, Sector};

/// Plain `field: value` lines for a normalized postcode.
pub fn postcode_report(parts: &PostcodeParts) -> String {
    let sector = parts.sector();
    [
        ("postcode", parts.postcode().unwrap_or("-").to_string()),
        ("outcode", parts.outcode().to_string()),
        ("district", parts.district().to_string()),
        (
            "sector",
            sector.map_or_else(|| "-".to_string(), Sector::compact),
        ),
    ]
    .iter()
    .map(|(field, value)| format!("{field:<9}{value}"))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn publications_table(publications: &[Publication]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Group"),
        header_cell("Circulation"),
        header_cell("Confirmed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for publication in publications {
        table.add_row(vec![
            Cell::new(publication.id.as_str()),
            Cell::new(&publication.name).add_attribute(Attribute::Bold),
            text_cell(&publication.group),
            Cell::new(&publication.circulation),
            confirmed_cell(publication.confirmed),
        ]);
    }
    table
}

/// Quote rows sorted by publication name.
pub fn quote_table(quote: &Quote) -> Table {
    let mut rows: Vec<&PricedPublication> = quote.values().collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Col width"),
        header_cell("Confirmed"),
        header_cell("Cost"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for priced in rows {
        table.add_row(vec![
            Cell::new(priced.id.as_str()),
            Cell::new(&priced.name).add_attribute(Attribute::Bold),
            match &priced.col_width {
                Some(width) => Cell::new(format!("{width} mm")),
                None => dim_cell("-"),
            },
            confirmed_cell(priced.confirmed),
            Cell::new(priced.cost)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// The whole directory with how each publication is priced.
pub fn directory_table(publications: &[Publication]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Group"),
        header_cell("Pricing"),
        header_cell("Confirmed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for publication in publications {
        table.add_row(vec![
            Cell::new(publication.id.as_str()),
            Cell::new(&publication.name).add_attribute(Attribute::Bold),
            text_cell(&publication.group),
            pricing_cell(publication),
            confirmed_cell(publication.confirmed),
        ]);
    }
    table
}

pub fn pricing_label(publication: &Publication) -> &'static str {
    if publication.trustee_price().is_some() {
        "trustee"
    } else if publication.is_priceable() {
        "column"
    } else {
        "unpriceable"
    }
}

fn pricing_cell(publication: &Publication) -> Cell {
    match pricing_label(publication) {
        "unpriceable" => Cell::new("unpriceable")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        label => Cell::new(label),
    }
}

fn confirmed_cell(confirmed: bool) -> Cell {
    if confirmed {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
