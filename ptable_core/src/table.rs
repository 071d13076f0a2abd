//! # Periodic Table
//!
//! A placed dataset with lookups. This is what renderers hold on to: cells in
//! dataset order, plus the grid extent and the set of occupied columns.
//!
//! ## Example
//!
//! ```rust
//! use ptable_core::PeriodicTable;
//!
//! let table = PeriodicTable::builtin();
//! assert_eq!(table.len(), 118);
//! assert_eq!(table.dimensions(), (9, 18));
//!
//! let gold = table.find("au")?;
//! assert_eq!(gold.element.number, 79);
//! assert_eq!(table.at(5, 10).map(|p| p.element.symbol.as_str()), Some("Au"));
//! # Ok::<(), ptable_core::errors::TableError>(())
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::dataset::{builtin_elements, load_elements};
use crate::element::Element;
use crate::errors::{TableError, TableResult};
use crate::placement::{place_all, PlacedElement};

/// All elements of one dataset with their grid cells, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodicTable {
    placed: Vec<PlacedElement>,
}

impl PeriodicTable {
    /// Place a dataset. Fails on malformed groups/periods or colliding cells.
    pub fn from_elements(elements: Vec<Element>) -> TableResult<Self> {
        let placed = place_all(elements)?;
        Ok(PeriodicTable { placed })
    }

    /// Table for the embedded 118-element dataset
    pub fn builtin() -> Self {
        let placed = place_all(builtin_elements().iter().cloned())
            .expect("embedded element dataset must place cleanly");
        PeriodicTable { placed }
    }

    /// Load and place a dataset file
    pub fn load(path: &Path) -> TableResult<Self> {
        let elements = load_elements(path)?;
        debug!("Placing {} elements from {}", elements.len(), path.display());
        Self::from_elements(elements)
    }

    /// Placed elements in dataset order
    pub fn placed(&self) -> &[PlacedElement] {
        &self.placed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedElement> {
        self.placed.iter()
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Look up by chemical symbol, ignoring case
    pub fn by_symbol(&self, symbol: &str) -> Option<&PlacedElement> {
        self.placed
            .iter()
            .find(|p| p.element.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Look up by English name, ignoring case
    pub fn by_name(&self, name: &str) -> Option<&PlacedElement> {
        self.placed
            .iter()
            .find(|p| p.element.name.eq_ignore_ascii_case(name))
    }

    /// Look up by atomic number
    pub fn by_number(&self, number: u32) -> Option<&PlacedElement> {
        self.placed.iter().find(|p| p.element.number == number)
    }

    /// Resolve a user query: atomic number, then symbol, then name.
    pub fn find(&self, query: &str) -> TableResult<&PlacedElement> {
        let query = query.trim();
        let found = match query.parse::<u32>() {
            Ok(number) => self.by_number(number),
            Err(_) => self.by_symbol(query).or_else(|| self.by_name(query)),
        };
        found.ok_or_else(|| TableError::not_found(query))
    }

    /// Element occupying a grid cell
    pub fn at(&self, row: usize, column: usize) -> Option<&PlacedElement> {
        self.placed
            .iter()
            .find(|p| p.row == row && p.column == column)
    }

    /// Grid size as `(rows, columns)`: one past the highest occupied index.
    pub fn dimensions(&self) -> (usize, usize) {
        let rows = self.placed.iter().map(|p| p.row + 1).max().unwrap_or(0);
        let columns = self.placed.iter().map(|p| p.column + 1).max().unwrap_or(0);
        (rows, columns)
    }

    /// Occupied column indices, ascending. Renderers give each equal width.
    pub fn columns(&self) -> BTreeSet<usize> {
        self.placed.iter().map(|p| p.column).collect()
    }
}

impl<'a> IntoIterator for &'a PeriodicTable {
    type Item = &'a PlacedElement;
    type IntoIter = std::slice::Iter<'a, PlacedElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placed.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_elements;

    #[test]
    fn test_builtin_table() {
        let table = PeriodicTable::builtin();
        assert_eq!(table.len(), 118);
        assert!(!table.is_empty());
        assert_eq!(table.placed()[0].element.symbol, "H");
        assert_eq!(table.iter().count(), 118);

        let footnotes = (&table).into_iter().filter(|p| p.element.is_footnote()).count();
        assert_eq!(footnotes, 30);
    }

    #[test]
    fn test_lookups() {
        let table = PeriodicTable::builtin();
        assert_eq!(table.by_symbol("fe").unwrap().element.name, "Iron");
        assert_eq!(table.by_name("IRON").unwrap().element.symbol, "Fe");
        assert_eq!(table.by_number(26).unwrap().element.symbol, "Fe");
        assert!(table.by_symbol("Zz").is_none());
    }

    #[test]
    fn test_find_prefers_number_then_symbol_then_name() {
        let table = PeriodicTable::builtin();
        assert_eq!(table.find("8").unwrap().element.symbol, "O");
        assert_eq!(table.find(" Na ").unwrap().element.name, "Sodium");
        assert_eq!(table.find("sodium").unwrap().element.symbol, "Na");
        assert_eq!(table.find("Unobtainium").unwrap_err(), TableError::not_found("Unobtainium"));
        assert!(table.find("999").is_err());
    }

    #[test]
    fn test_cell_access() {
        let table = PeriodicTable::builtin();
        assert_eq!(table.at(0, 17).unwrap().element.symbol, "He");
        assert_eq!(table.at(7, 3).unwrap().element.symbol, "La");
        assert_eq!(table.at(8, 3).unwrap().element.symbol, "Ac");
        assert!(table.at(0, 1).is_none());
    }

    #[test]
    fn test_dimensions_and_columns() {
        let table = PeriodicTable::builtin();
        assert_eq!(table.dimensions(), (9, 18));
        assert_eq!(table.columns(), (0..18).collect::<BTreeSet<usize>>());
    }

    #[test]
    fn test_small_dataset() {
        let elements = parse_elements(
            r#"[{"symbol":"H","name":"Hydrogen","number":1,"category":"Nonmetal",
                "group":1,"period":1,"block":"s","mass":1.008},
               {"symbol":"He","name":"Helium","number":2,"category":"Noble Gas",
                "group":18,"period":1,"block":"s","mass":4.0026}]"#,
        )
        .unwrap();
        let table = PeriodicTable::from_elements(elements).unwrap();
        assert_eq!(table.dimensions(), (1, 18));
        assert_eq!(table.columns().into_iter().collect::<Vec<_>>(), vec![0, 17]);
    }

    #[test]
    fn test_empty_table() {
        let table = PeriodicTable::from_elements(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.dimensions(), (0, 0));
    }

    #[test]
    fn test_serializes_placements() {
        let table = PeriodicTable::builtin();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["placed"][1]["column"], 17);
        assert_eq!(json["placed"][56]["element"]["group"], "La");
    }
}
