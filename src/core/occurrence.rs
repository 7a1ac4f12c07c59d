//! Occurrence records and field separators.
//!
//! An occurrence is one placement of a component inside an assembly tree.
//! The aggregator consumes a flat, already-ordered sequence of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BomError;

/// A single component occurrence taken from a design traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    /// Grouping key for the BOM; may be empty or shared by unrelated parts
    pub part_number: String,

    /// Component name
    pub name: String,

    /// Component description
    #[serde(default)]
    pub description: String,

    /// Whether this occurrence has child occurrences
    #[serde(default)]
    pub is_assembly: bool,

    /// Whether this occurrence is visible in the design
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

impl OccurrenceRecord {
    /// Create a visible, non-assembly occurrence with an empty description.
    pub fn new(part_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            name: name.into(),
            description: String::new(),
            is_assembly: false,
            is_visible: true,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark this occurrence as an assembly.
    #[must_use]
    pub fn with_assembly(mut self, is_assembly: bool) -> Self {
        self.is_assembly = is_assembly;
        self
    }

    /// Set visibility.
    #[must_use]
    pub fn with_visible(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }
}

/// Field separator used in the generated CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// `,`
    #[default]
    Comma,
    /// `;`
    Semicolon,
}

impl Separator {
    /// The separator character.
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
        }
    }

    /// Label shown for this choice in the generator dialog.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Comma => ", (colon)",
            Self::Semicolon => "; (semicolon)",
        }
    }

    /// Config/CLI name of this separator.
    pub fn name(self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Separator {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "comma" | "," => Ok(Self::Comma),
            "semicolon" | ";" => Ok(Self::Semicolon),
            _ => Err(BomError::InvalidSeparator(s.to_string())),
        }
    }
}
