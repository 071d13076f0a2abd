//! Plain-text rendering of the grid and of single elements.

use ptable_core::format::format_float;
use ptable_core::placement::{PlacedElement, MAX_PERIOD};
use ptable_core::reference::{properties, wikipedia_url};
use ptable_core::style::{category_color, phase_color};
use ptable_core::PeriodicTable;

/// Width of one grid cell in characters
const CELL_WIDTH: usize = 4;

/// Width of one element card
const CARD_WIDTH: usize = 16;

/// Render the whole table, one text row per grid row.
///
/// Main-table rows are labelled with their period; the two footnote rows
/// carry the series tag instead.
pub fn render_grid(table: &PeriodicTable) -> String {
    let (rows, columns) = table.dimensions();
    let mut out = String::new();

    let mut header = " ".repeat(CELL_WIDTH);
    for column in 0..columns {
        header.push_str(&format!("{:<width$}", column + 1, width = CELL_WIDTH));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for row in 0..rows {
        let mut line = format!("{:>2}  ", row_label(row));
        for column in 0..columns {
            let symbol = table
                .at(row, column)
                .map(|p| p.element.symbol.as_str())
                .unwrap_or("");
            line.push_str(&format!("{:<width$}", symbol, width = CELL_WIDTH));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn row_label(row: usize) -> String {
    let periods = usize::from(MAX_PERIOD);
    match row {
        r if r < periods => (r + 1).to_string(),
        r if r == periods => "La".to_string(),
        r if r == periods + 1 => "Ac".to_string(),
        _ => String::new(),
    }
}

/// Render the four-line card shown in a grid cell: number and mass,
/// name, symbol, electronegativity and density.
pub fn render_card(placed: &PlacedElement) -> String {
    let element = &placed.element;
    let corners = |left: String, right: String| {
        let gap = CARD_WIDTH.saturating_sub(left.len() + right.len()).max(1);
        format!("{}{}{}", left, " ".repeat(gap), right)
    };

    [
        corners(element.number.to_string(), format_float(Some(element.mass))),
        element.name.clone(),
        element.symbol.clone(),
        corners(
            format_float(element.electronegativity),
            format_float(element.density),
        ),
    ]
    .join("\n")
}

/// Render the card, cell position, colours, reference link, and the full
/// property list of one element.
pub fn render_details(placed: &PlacedElement) -> String {
    let element = &placed.element;
    let mut out = String::new();

    out.push_str(&render_card(placed));
    out.push_str("\n\n");
    out.push_str(&format!("Cell:       row {}, column {}\n", placed.row, placed.column));
    out.push_str(&format!(
        "Colours:    background {}, symbol {}\n",
        category_color(&element.category),
        phase_color(element.phase)
    ));
    out.push_str(&format!("Wikipedia:  {}\n\n", wikipedia_url(element)));

    for (label, value) in properties(element) {
        out.push_str(&format!("{:<19}{}\n", format!("{}:", label), value));
    }

    out
}
