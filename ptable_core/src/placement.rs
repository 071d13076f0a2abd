//! # Placement Engine
//!
//! Maps each element's chemistry coordinates (period, group) onto the
//! zero-based grid used for rendering.
//!
//! Main-table elements land at `(period - 1, group - 1)`. Lanthanides and
//! actinides have no real group number, so they are moved two periods down
//! (the two rows under period 7) and given sequential columns starting after
//! a two-column indent, in input order:
//!
//! ```text
//! row 0   H . . . . . . . . . . . . . . . . He
//! ...
//! row 6   Fr Ra . Rf ... Og
//! row 7   . . . La Ce Pr ... Lu          <- "La" tagged, period 6
//! row 8   . . . Ac Th Pa ... Lr          <- "Ac" tagged, period 7
//! ```
//!
//! The two running column counters live inside one [`Placements`] iterator,
//! so every call to [`place_elements`] starts from scratch.
//!
//! ## Example
//!
//! ```rust
//! use ptable_core::placement::place_all;
//! use ptable_core::dataset::builtin_elements;
//!
//! let placed = place_all(builtin_elements().iter().cloned()).unwrap();
//! let hydrogen = &placed[0];
//! assert_eq!((hydrogen.row, hydrogen.column), (0, 0));
//! ```

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::element::{Element, Group};
use crate::errors::{TableError, TableResult};

/// Shift applied to footnote elements: added to their period, and added to
/// their running counter to get the column.
pub const FOOTNOTE_OFFSET: usize = 2;

/// Starting value of both the lanthanide and actinide counters
pub const FOOTNOTE_BASE: usize = 2;

/// Highest group number in the main table
pub const MAX_GROUP: u8 = 18;

/// Highest period in the main table
pub const MAX_PERIOD: u8 = 7;

/// An element paired with its zero-based grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedElement {
    pub row: usize,
    pub column: usize,
    pub element: Element,
}

impl PlacedElement {
    /// Grid cell as `(row, column)`
    pub fn cell(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}

/// Lazy placement over a sequence of elements.
///
/// Yields one result per input element, in input order. A malformed group
/// or period yields an error for that element; later elements are still
/// placed.
#[derive(Debug, Clone)]
pub struct Placements<I> {
    elements: I,
    la_offset: usize,
    ac_offset: usize,
}

impl<I> Placements<I> {
    fn new(elements: I) -> Self {
        Placements {
            elements,
            la_offset: FOOTNOTE_BASE,
            ac_offset: FOOTNOTE_BASE,
        }
    }

    fn place(&mut self, element: Element) -> TableResult<PlacedElement> {
        if element.period == 0 || element.period > MAX_PERIOD {
            warn!("Rejecting {}: period {} out of range", element.symbol, element.period);
            return Err(TableError::invalid_period(&element.symbol, element.period));
        }

        let period = usize::from(element.period);
        let (column, period) = match element.group {
            Group::Lanthanide => {
                let column = self.la_offset + FOOTNOTE_OFFSET;
                self.la_offset += 1;
                (column, period + FOOTNOTE_OFFSET)
            }
            Group::Actinide => {
                let column = self.ac_offset + FOOTNOTE_OFFSET;
                self.ac_offset += 1;
                (column, period + FOOTNOTE_OFFSET)
            }
            Group::Number(group) => {
                if group == 0 || group > MAX_GROUP {
                    warn!("Rejecting {}: group {} out of range", element.symbol, group);
                    return Err(TableError::invalid_group(&element.symbol, group));
                }
                (usize::from(group), period)
            }
        };

        Ok(PlacedElement {
            row: period - 1,
            column: column - 1,
            element,
        })
    }
}

impl<I> Iterator for Placements<I>
where
    I: Iterator<Item = Element>,
{
    type Item = TableResult<PlacedElement>;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.next()?;
        Some(self.place(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

/// Place elements lazily, one result per input element.
///
/// # Example
///
/// ```rust
/// use ptable_core::placement::place_elements;
/// use ptable_core::dataset::parse_elements;
///
/// let elements = parse_elements(r#"[
///     {"symbol":"H","name":"Hydrogen","number":1,"category":"Nonmetal",
///      "group":1,"period":1,"block":"s","mass":1.008},
///     {"symbol":"He","name":"Helium","number":2,"category":"Noble Gas",
///      "group":18,"period":1,"block":"s","mass":4.0026}
/// ]"#)?;
///
/// let cells: Vec<(usize, usize)> = place_elements(elements)
///     .map(|p| p.map(|p| p.cell()))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(cells, vec![(0, 0), (0, 17)]);
/// # Ok::<(), ptable_core::errors::TableError>(())
/// ```
pub fn place_elements<E>(elements: E) -> Placements<E::IntoIter>
where
    E: IntoIterator<Item = Element>,
{
    Placements::new(elements.into_iter())
}

/// Place every element, failing on the first malformed record or on two
/// elements sharing a cell.
pub fn place_all<E>(elements: E) -> TableResult<Vec<PlacedElement>>
where
    E: IntoIterator<Item = Element>,
{
    let placed = place_elements(elements).collect::<TableResult<Vec<_>>>()?;

    check_collisions(&placed)?;

    debug!("Placed {} elements", placed.len());
    Ok(placed)
}

/// Reject the first cell claimed by two elements.
fn check_collisions(placed: &[PlacedElement]) -> TableResult<()> {
    let mut occupied: HashMap<(usize, usize), &str> = HashMap::with_capacity(placed.len());
    for p in placed {
        if let Some(first) = occupied.insert(p.cell(), &p.element.symbol) {
            warn!("{} and {} both placed at {:?}", first, p.element.symbol, p.cell());
            return Err(TableError::collision(p.row, p.column, first, &p.element.symbol));
        }
    }
    Ok(())
}
