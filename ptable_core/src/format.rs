//! Display formatting for optional numeric properties.

/// Placeholder shown for properties the dataset does not record
pub const NOT_AVAILABLE: &str = "n.A";

/// Format a property value with two decimals, or [`NOT_AVAILABLE`] when absent.
///
/// ```rust
/// use ptable_core::format::format_float;
///
/// assert_eq!(format_float(Some(55.845)), "55.84");
/// assert_eq!(format_float(None), "n.A");
/// ```
pub fn format_float(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}
