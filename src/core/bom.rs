//! Bill of materials aggregation.
//!
//! Collapses a traversal of occurrences into one row per part number,
//! counting instances and keeping the first-encountered component details.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

use super::csv::format_csv;
use super::occurrence::{OccurrenceRecord, Separator};

/// One aggregated BOM row. The part number is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomEntry {
    /// Name of the first occurrence seen with this part number
    pub name: String,

    /// Description of the first occurrence seen with this part number
    pub description: String,

    /// Number of included occurrences sharing this part number
    pub instance_count: usize,

    /// Assembly flag of the first occurrence seen with this part number
    pub is_assembly: bool,
}

impl BomEntry {
    fn from_occurrence(occurrence: &OccurrenceRecord) -> Self {
        Self {
            name: occurrence.name.clone(),
            description: occurrence.description.clone(),
            instance_count: 1,
            is_assembly: occurrence.is_assembly,
        }
    }
}

/// Inclusion filters applied while aggregating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateOptions {
    /// Keep occurrences that have children
    pub include_assemblies: bool,

    /// Keep occurrences that are not visible
    pub include_hidden: bool,
}

impl AggregateOptions {
    /// Create options from the two inclusion flags.
    pub fn new(include_assemblies: bool, include_hidden: bool) -> Self {
        Self { include_assemblies, include_hidden }
    }

    /// Whether an occurrence passes both filters.
    ///
    /// The assembly filter is checked first, so a hidden assembly excluded
    /// by either rule is reported as an assembly skip.
    pub fn includes(&self, occurrence: &OccurrenceRecord) -> bool {
        if !self.include_assemblies && occurrence.is_assembly {
            tracing::trace!(part_number = %occurrence.part_number, "Skipping assembly");
            return false;
        }

        if !self.include_hidden && !occurrence.is_visible {
            tracing::trace!(part_number = %occurrence.part_number, "Skipping hidden occurrence");
            return false;
        }

        true
    }
}

/// An aggregated bill of materials, ordered by first encounter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bom {
    /// Rows in insertion order
    entries: Vec<(String, BomEntry)>,

    /// Part number -> position in `entries`
    index: HashMap<String, usize>,
}

impl Bom {
    /// Create an empty BOM.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence, inserting a new row on first sight of its part number.
    pub fn record(&mut self, occurrence: &OccurrenceRecord) {
        if let Some(&position) = self.index.get(&occurrence.part_number) {
            self.entries[position].1.instance_count += 1;
            return;
        }

        if occurrence.part_number.is_empty() {
            tracing::warn!(
                name = %occurrence.name,
                "Occurrence has no part number; all such occurrences share one BOM row"
            );
        }

        self.index.insert(occurrence.part_number.clone(), self.entries.len());
        self.entries.push((occurrence.part_number.clone(), BomEntry::from_occurrence(occurrence)));
    }

    /// Number of distinct part numbers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the BOM has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a row by part number.
    pub fn get(&self, part_number: &str) -> Option<&BomEntry> {
        self.index.get(part_number).map(|&position| &self.entries[position].1)
    }

    /// Iterate rows in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BomEntry)> {
        self.entries.iter().map(|(pn, entry)| (pn.as_str(), entry))
    }

    /// Part numbers in first-encounter order.
    pub fn part_numbers(&self) -> Vec<&str> {
        self.entries.iter().map(|(pn, _)| pn.as_str()).collect()
    }

    /// Total instances across all rows.
    pub fn total_instances(&self) -> usize {
        self.entries.iter().map(|(_, entry)| entry.instance_count).sum()
    }

    /// Consume the BOM, returning its rows.
    pub fn into_entries(self) -> Vec<(String, BomEntry)> {
        self.entries
    }

    /// Render as delimited text.
    pub fn to_csv(&self, separator: Separator) -> String {
        format_csv(&self.entries, separator)
    }
}

#[derive(Serialize)]
struct BomRow<'a> {
    part_number: &'a str,
    #[serde(flatten)]
    entry: &'a BomEntry,
}

impl Serialize for Bom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.entries.iter().map(|(part_number, entry)| BomRow { part_number, entry }),
        )
    }
}

/// Aggregate occurrences into a BOM.
///
/// Occurrences are visited in the order given. An assembly is skipped when
/// `include_assemblies` is false; otherwise a hidden occurrence is skipped
/// when `include_hidden` is false. Every remaining occurrence either opens a
/// new row or bumps the count of the row for its part number.
pub fn aggregate<'a, I>(occurrences: I, include_assemblies: bool, include_hidden: bool) -> Bom
where
    I: IntoIterator<Item = &'a OccurrenceRecord>,
{
    aggregate_with(occurrences, AggregateOptions::new(include_assemblies, include_hidden))
}

/// Aggregate occurrences using a set of options.
pub fn aggregate_with<'a, I>(occurrences: I, options: AggregateOptions) -> Bom
where
    I: IntoIterator<Item = &'a OccurrenceRecord>,
{
    let mut bom = Bom::new();
    let mut seen = 0usize;

    for occurrence in occurrences {
        seen += 1;
        if options.includes(occurrence) {
            bom.record(occurrence);
        }
    }

    tracing::debug!(
        occurrences = seen,
        parts = bom.len(),
        instances = bom.total_instances(),
        "Aggregated BOM"
    );

    bom
}
