//! Snapshot schema definitions.
//!
//! Defines the structure of design snapshot files.

use serde::{Deserialize, Serialize};

use crate::core::OccurrenceRecord;
use crate::error::{BomError, BomResult};

/// Top-level snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// The active design, if the host had one open
    #[serde(default)]
    pub design: Option<Design>,
}

impl SnapshotFile {
    /// The active design, or `NoActiveDesign` when the snapshot has none.
    pub fn active_design(&self) -> BomResult<&Design> {
        self.design.as_ref().ok_or(BomError::NoActiveDesign)
    }

    /// Consume the snapshot, returning its design.
    pub fn into_active_design(self) -> BomResult<Design> {
        self.design.ok_or(BomError::NoActiveDesign)
    }
}

/// A design captured from the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Design {
    /// Design name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Occurrences already flattened by the exporter, in traversal order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<OccurrenceRecord>,

    /// Occurrences under the root component, nested by assembly
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tree: Vec<OccurrenceNode>,
}

impl Design {
    /// All occurrences in traversal order: the flat list first, then the
    /// tree walked depth-first.
    pub fn occurrences(&self) -> Vec<OccurrenceRecord> {
        let mut all = self.occurrences.clone();
        all.extend(flatten(&self.tree));
        all
    }
}

/// An occurrence with its child occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceNode {
    /// Part number of the referenced component
    pub part_number: String,

    /// Component name
    pub name: String,

    /// Component description
    #[serde(default)]
    pub description: String,

    /// Whether the occurrence is visible
    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Child occurrences
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OccurrenceNode>,
}

fn default_visible() -> bool {
    true
}

impl OccurrenceNode {
    /// Create a visible leaf node.
    pub fn new(part_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            name: name.into(),
            description: String::new(),
            visible: true,
            children: Vec::new(),
        }
    }

    /// Add a child occurrence.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Set visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// An occurrence counts as an assembly when it has at least one child.
    pub fn is_assembly(&self) -> bool {
        !self.children.is_empty()
    }

    fn to_record(&self) -> OccurrenceRecord {
        OccurrenceRecord {
            part_number: self.part_number.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            is_assembly: self.is_assembly(),
            is_visible: self.visible,
        }
    }
}

/// Flatten a forest of occurrences depth-first, parents before children.
pub fn flatten(nodes: &[OccurrenceNode]) -> Vec<OccurrenceRecord> {
    let mut records = Vec::new();
    let mut stack: Vec<&OccurrenceNode> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        records.push(node.to_record());
        stack.extend(node.children.iter().rev());
    }

    records
}
