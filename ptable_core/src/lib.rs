//! # ptable_core - Periodic Table Layout Engine
//!
//! `ptable_core` turns a periodic-table dataset into grid cells for rendering.
//! Every element keeps its chemistry coordinates (period, group); the
//! [`placement`] module maps those onto a zero-based 9 x 18 grid, moving the
//! lanthanide and actinide series into two rows below period 7.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Placement is a single pass with no global state
//! - **JSON-First**: Elements and placements implement Serialize/Deserialize
//! - **Validated**: Bad groups, periods, duplicates, and collisions are errors, not odd coordinates
//!
//! ## Quick Start
//!
//! ```rust
//! use ptable_core::PeriodicTable;
//!
//! let table = PeriodicTable::builtin();
//! let lanthanum = table.by_symbol("La").unwrap();
//! assert_eq!((lanthanum.row, lanthanum.column), (7, 3));
//! ```
//!
//! ## Modules
//!
//! - [`element`] - Element records (group, phase, category)
//! - [`placement`] - Grid placement engine
//! - [`dataset`] - JSON loading and the embedded dataset
//! - [`table`] - Placed dataset with lookups
//! - [`format`], [`style`], [`reference`] - Presentation helpers
//! - [`errors`] - Structured error types

pub mod dataset;
pub mod element;
pub mod errors;
pub mod format;
pub mod placement;
pub mod reference;
pub mod style;
pub mod table;

// Re-export commonly used types at crate root for convenience
pub use element::{Category, Element, Group, Phase};
pub use errors::{TableError, TableResult};
pub use placement::{place_all, place_elements, PlacedElement};
pub use table::PeriodicTable;
