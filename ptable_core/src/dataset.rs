//! # Dataset Loading
//!
//! Reads element records from JSON and checks that symbols, names, and atomic
//! numbers are unique. Grid coordinates are not checked here; see
//! [`crate::placement`].
//!
//! ## File Format
//!
//! A JSON array of element objects, in the order they should be placed:
//!
//! ```json
//! [
//!   { "symbol": "H", "name": "Hydrogen", "number": 1, "category": "Nonmetal",
//!     "group": 1, "period": 1, "block": "s", "mass": 1.008, "phase": "gaseous",
//!     "density": 0.00008988, "electronegativity": 2.2 },
//!   ...
//! ]
//! ```
//!
//! The canonical 118-element dataset ships inside the crate and is available
//! through [`builtin_elements`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use ptable_core::dataset::load_elements;
//! use std::path::Path;
//!
//! let elements = load_elements(Path::new("elements.json"))?;
//! println!("Loaded {} elements", elements.len());
//! # Ok::<(), ptable_core::errors::TableError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::element::Element;
use crate::errors::{TableError, TableResult};

/// Canonical dataset, embedded at compile time
const BUILTIN_JSON: &str = include_str!("../data/elements.json");

static BUILTIN: Lazy<Vec<Element>> = Lazy::new(|| {
    parse_elements(BUILTIN_JSON).expect("embedded element dataset must be valid")
});

/// The canonical 118-element dataset, ordered by atomic number.
pub fn builtin_elements() -> &'static [Element] {
    &BUILTIN
}

/// Parse a JSON array of elements.
///
/// # Returns
///
/// * `Ok(Vec<Element>)` - Elements in file order
/// * `Err(TableError::SerializationError)` - Invalid JSON, unknown group tag, missing field
/// * `Err(TableError::DuplicateElement)` - Symbol, name, or number used twice
/// * `Err(TableError::InvalidInput)` - Atomic number of zero
pub fn parse_elements(json: &str) -> TableResult<Vec<Element>> {
    let elements: Vec<Element> = serde_json::from_str(json)?;
    validate_unique(&elements)?;
    debug!("Parsed {} elements", elements.len());
    Ok(elements)
}

/// Load elements from a JSON file.
///
/// # Example
///
/// ```rust,no_run
/// use ptable_core::dataset::load_elements;
/// use std::path::Path;
///
/// let elements = load_elements(Path::new("data/elements.json"))?;
/// assert!(!elements.is_empty());
/// # Ok::<(), ptable_core::errors::TableError>(())
/// ```
pub fn load_elements(path: &Path) -> TableResult<Vec<Element>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        TableError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    parse_elements(&contents).map_err(|e| match e {
        TableError::SerializationError { reason } => TableError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), reason),
        },
        other => other,
    })
}

/// Reject zero atomic numbers and repeated symbols, names, or numbers.
fn validate_unique(elements: &[Element]) -> TableResult<()> {
    let mut symbols = HashSet::new();
    let mut names = HashSet::new();
    let mut numbers = HashSet::new();

    for element in elements {
        if element.number == 0 {
            return Err(TableError::invalid_input(
                "number",
                format!("{} ({})", element.number, element.symbol),
                "Atomic number must be positive",
            ));
        }
        if !symbols.insert(element.symbol.as_str()) {
            warn!("Duplicate symbol {}", element.symbol);
            return Err(TableError::duplicate("symbol", &element.symbol));
        }
        if !names.insert(element.name.as_str()) {
            warn!("Duplicate name {}", element.name);
            return Err(TableError::duplicate("name", &element.name));
        }
        if !numbers.insert(element.number) {
            warn!("Duplicate atomic number {}", element.number);
            return Err(TableError::duplicate("number", element.number.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Category, Group, Phase};
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_dataset_path(name: &str) -> PathBuf {
        temp_dir().join(format!("ptable_test_{}.json", name))
    }

    fn record(symbol: &str, name: &str, number: u32) -> String {
        format!(
            r#"{{"symbol":"{}","name":"{}","number":{},"category":"Metal",
                "group":1,"period":1,"block":"s","mass":1.0}}"#,
            symbol, name, number
        )
    }

    #[test]
    fn test_builtin_dataset_is_complete() {
        let elements = builtin_elements();
        assert_eq!(elements.len(), 118);
        let numbers: Vec<u32> = elements.iter().map(|e| e.number).collect();
        assert_eq!(numbers, (1..=118).collect::<Vec<u32>>());
    }

    #[test]
    fn test_builtin_footnote_counts() {
        let elements = builtin_elements();
        let lanthanides = elements.iter().filter(|e| e.group == Group::Lanthanide).count();
        let actinides = elements.iter().filter(|e| e.group == Group::Actinide).count();
        assert_eq!(lanthanides, 15);
        assert_eq!(actinides, 15);
    }

    #[test]
    fn test_builtin_sample_values() {
        let bromine = builtin_elements().iter().find(|e| e.symbol == "Br").unwrap();
        assert_eq!(bromine.name, "Bromine");
        assert_eq!(bromine.category, Category::Halogen);
        assert_eq!(bromine.phase, Some(Phase::Liquid));
        assert_eq!(bromine.group, Group::Number(17));
        assert_eq!(bromine.period, 4);
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let json = format!("[{},{}]", record("H", "Hydrogen", 1), record("H", "Other", 2));
        let err = parse_elements(&json).unwrap_err();
        assert_eq!(err, TableError::duplicate("symbol", "H"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let json = format!("[{},{}]", record("H", "Hydrogen", 1), record("D", "Hydrogen", 2));
        assert_eq!(parse_elements(&json).unwrap_err(), TableError::duplicate("name", "Hydrogen"));
    }

    #[test]
    fn test_duplicate_number_rejected() {
        let json = format!("[{},{}]", record("H", "Hydrogen", 1), record("D", "Deuterium", 1));
        assert_eq!(parse_elements(&json).unwrap_err(), TableError::duplicate("number", "1"));
    }

    #[test]
    fn test_zero_number_rejected() {
        let json = format!("[{}]", record("X", "Nothing", 0));
        assert_eq!(parse_elements(&json).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_bad_group_tag_is_serialization_error() {
        let json = r#"[{"symbol":"X","name":"X","number":1,"category":"Metal",
            "group":"Zz","period":1,"block":"s","mass":1.0}]"#;
        assert_eq!(parse_elements(json).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_dataset_path("load");
        let json = format!("[{},{}]", record("H", "Hydrogen", 1), record("Li", "Lithium", 3));
        fs::write(&path, json).unwrap();

        let elements = load_elements(&path).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].symbol, "Li");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_dataset_path("does_not_exist");
        let err = load_elements(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json_names_file() {
        let path = temp_dataset_path("invalid");
        fs::write(&path, "{ not json").unwrap();

        match load_elements(&path).unwrap_err() {
            TableError::SerializationError { reason } => {
                assert!(reason.contains("ptable_test_invalid.json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let _ = fs::remove_file(&path);
    }
}
