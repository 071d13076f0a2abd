//! # Colour Palettes
//!
//! Cell background by category and symbol colour by phase. Colours are CSS
//! strings so any renderer (terminal, web, toolkit) can map them.

use crate::element::{Category, Phase};

/// Background for categories without a palette entry
pub const DEFAULT_CATEGORY_COLOR: &str = "#808080";

/// Symbol colour for elements with no recorded phase
pub const DEFAULT_PHASE_COLOR: &str = "grey";

/// Cell background colour for a category
pub fn category_color(category: &Category) -> &'static str {
    match category {
        Category::AlkaliMetal => "#fe6f61",
        Category::AlkalineEarthMetal => "#6791a7",
        Category::TransitionMetal => "#83b8d0",
        Category::Metal => "#cae2ed",
        Category::Metalloid => "#a7d6bc",
        Category::Nonmetal => "#ffde66",
        Category::Halogen => "#e9aa63",
        Category::NobleGas => "#e29136",
        Category::Unknown => "#cec0bf",
        Category::Lanthanide => "#696071",
        Category::Actinide => "#5b4c68",
        Category::Other(_) => DEFAULT_CATEGORY_COLOR,
    }
}

/// Symbol text colour for a phase
pub fn phase_color(phase: Option<Phase>) -> &'static str {
    match phase {
        Some(Phase::Solid) => "black",
        Some(Phase::Liquid) => "blue",
        Some(Phase::Gaseous) => "red",
        None => DEFAULT_PHASE_COLOR,
    }
}
