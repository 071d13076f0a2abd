//! # Element Reference
//!
//! Per-element property listing and external reference links.
//!
//! ## Example
//!
//! ```rust
//! use ptable_core::reference::{properties, wikipedia_url};
//! use ptable_core::PeriodicTable;
//!
//! let table = PeriodicTable::builtin();
//! let iron = &table.by_symbol("Fe").unwrap().element;
//!
//! assert_eq!(wikipedia_url(iron), "https://en.wikipedia.org/wiki/Iron");
//! assert_eq!(properties(iron)[0], ("Symbol", "Fe".to_string()));
//! ```

use crate::element::Element;
use crate::format::NOT_AVAILABLE;

/// Base URL of the English Wikipedia article namespace
pub const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Wikipedia article for an element, named after its English name.
pub fn wikipedia_url(element: &Element) -> String {
    format!("{}{}", WIKIPEDIA_BASE, element.name.trim().replace(' ', "_"))
}

/// Every field of an element as `(label, value)`, in field order.
///
/// Absent optional values show as [`NOT_AVAILABLE`]. Mass, density, and
/// electronegativity are shown unrounded; see [`crate::format`] for the
/// two-decimal cell form.
pub fn properties(element: &Element) -> Vec<(&'static str, String)> {
    let optional = |value: Option<f64>| match value {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    };

    vec![
        ("Symbol", element.symbol.clone()),
        ("Name", element.name.clone()),
        ("Number", element.number.to_string()),
        ("Category", element.category.to_string()),
        ("Group", element.group.to_string()),
        ("Period", element.period.to_string()),
        ("Block", element.block.clone()),
        ("Mass", element.mass.to_string()),
        (
            "Phase",
            element
                .phase
                .map(|p| p.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        ("Density", optional(element.density)),
        ("Electronegativity", optional(element.electronegativity)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::builtin_elements;

    fn find(symbol: &str) -> &'static Element {
        builtin_elements().iter().find(|e| e.symbol == symbol).unwrap()
    }

    #[test]
    fn test_wikipedia_url() {
        assert_eq!(wikipedia_url(find("H")), "https://en.wikipedia.org/wiki/Hydrogen");
    }

    #[test]
    fn test_wikipedia_url_replaces_spaces() {
        let mut element = find("H").clone();
        element.name = "Heavy Hydrogen".to_string();
        assert_eq!(wikipedia_url(&element), "https://en.wikipedia.org/wiki/Heavy_Hydrogen");
    }

    #[test]
    fn test_properties_list_every_field() {
        let props = properties(find("U"));
        let labels: Vec<&str> = props.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Symbol", "Name", "Number", "Category", "Group", "Period", "Block", "Mass",
                "Phase", "Density", "Electronegativity",
            ]
        );
        assert_eq!(props[4].1, "Ac");
        assert_eq!(props[8].1, "solid");
    }

    #[test]
    fn test_properties_show_missing_values() {
        let props = properties(find("Og"));
        assert_eq!(props[8], ("Phase", NOT_AVAILABLE.to_string()));
        assert_eq!(props[9], ("Density", "n.A".to_string()));
        assert_eq!(props[10], ("Electronegativity", "n.A".to_string()));
    }
}
