//! # Element Records
//!
//! The immutable element record produced by data loading, plus the small
//! enums describing its group, phase, and category.
//!
//! ## JSON Format
//!
//! Elements use the field names of the dataset file directly. `group` is
//! either a number or one of the footnote tags:
//!
//! ```json
//! { "symbol": "Fe", "name": "Iron", "number": 26, "category": "Transition Metal",
//!   "group": 8, "period": 4, "block": "d", "mass": 55.845, "phase": "solid",
//!   "density": 7.874, "electronegativity": 1.83 }
//!
//! { "symbol": "U", "name": "Uranium", "number": 92, "category": "Actinide",
//!   "group": "Ac", "period": 7, "block": "f", "mass": 238.03, "phase": "solid",
//!   "density": 19.1, "electronegativity": 1.38 }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column of the standard table, or the footnote series the element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GroupRepr", into = "GroupRepr")]
pub enum Group {
    /// Numbered group (1-18 for a well-formed dataset)
    Number(u8),
    /// Lanthanide series, tagged `"La"`
    Lanthanide,
    /// Actinide series, tagged `"Ac"`
    Actinide,
}

impl Group {
    pub const LANTHANIDE_TAG: &'static str = "La";
    pub const ACTINIDE_TAG: &'static str = "Ac";

    /// True for the two series that are pulled out below the main grid
    pub fn is_footnote(&self) -> bool {
        matches!(self, Group::Lanthanide | Group::Actinide)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Number(n) => write!(f, "{}", n),
            Group::Lanthanide => f.write_str(Self::LANTHANIDE_TAG),
            Group::Actinide => f.write_str(Self::ACTINIDE_TAG),
        }
    }
}

/// Wire form of [`Group`]: a bare number or a string tag.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum GroupRepr {
    Number(u8),
    Tag(String),
}

impl TryFrom<GroupRepr> for Group {
    type Error = String;

    fn try_from(repr: GroupRepr) -> Result<Self, Self::Error> {
        match repr {
            GroupRepr::Number(n) => Ok(Group::Number(n)),
            GroupRepr::Tag(tag) => match tag.as_str() {
                Group::LANTHANIDE_TAG => Ok(Group::Lanthanide),
                Group::ACTINIDE_TAG => Ok(Group::Actinide),
                other => Err(format!(
                    "unknown group tag '{}', expected a number or \"La\"/\"Ac\"",
                    other
                )),
            },
        }
    }
}

impl From<Group> for GroupRepr {
    fn from(group: Group) -> Self {
        match group {
            Group::Number(n) => GroupRepr::Number(n),
            Group::Lanthanide => GroupRepr::Tag(Group::LANTHANIDE_TAG.to_string()),
            Group::Actinide => GroupRepr::Tag(Group::ACTINIDE_TAG.to_string()),
        }
    }
}

/// State of matter at standard conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Solid,
    Liquid,
    Gaseous,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Solid => "solid",
            Phase::Liquid => "liquid",
            Phase::Gaseous => "gaseous",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element category, used for colouring.
///
/// Strings outside the known vocabulary are kept verbatim in `Other` so a
/// dataset with extra categories still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    Metal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Unknown,
    Lanthanide,
    Actinide,
    Other(String),
}

impl Category {
    /// All named categories, in legend order
    pub const ALL: [Category; 11] = [
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::Metal,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Unknown,
        Category::Lanthanide,
        Category::Actinide,
    ];

    /// Label as written in the dataset
    pub fn label(&self) -> &str {
        match self {
            Category::AlkaliMetal => "Alkali Metal",
            Category::AlkalineEarthMetal => "Alkaline Earth Metal",
            Category::TransitionMetal => "Transition Metal",
            Category::Metal => "Metal",
            Category::Metalloid => "Metalloid",
            Category::Nonmetal => "Nonmetal",
            Category::Halogen => "Halogen",
            Category::NobleGas => "Noble Gas",
            Category::Unknown => "Unknown",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::ALL
            .iter()
            .find(|c| c.label() == label)
            .cloned()
            .unwrap_or(Category::Other(label))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            named => named.label().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A chemical element as read from the dataset. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Chemical symbol, e.g. "Fe"
    pub symbol: String,
    /// English name, e.g. "Iron"
    pub name: String,
    /// Atomic number
    pub number: u32,
    pub category: Category,
    pub group: Group,
    pub period: u8,
    /// Electron block ("s", "p", "d", "f")
    pub block: String,
    /// Standard atomic mass (u)
    pub mass: f64,
    #[serde(default)]
    pub phase: Option<Phase>,
    /// Density (g/cm³)
    #[serde(default)]
    pub density: Option<f64>,
    /// Pauling electronegativity
    #[serde(default)]
    pub electronegativity: Option<f64>,
}

impl Element {
    /// True for lanthanides and actinides
    pub fn is_footnote(&self) -> bool {
        self.group.is_footnote()
    }
}
