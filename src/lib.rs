//! # bomgen
//!
//! Bill of materials generator for CAD design snapshots.
//!
//! bomgen reads a snapshot of a design's occurrence tree, collapses the
//! occurrences into one row per part number with instance counts, and
//! writes the result as delimited text ready for a spreadsheet.
//!
//! ## Features
//!
//! - **Aggregation**: One row per part number, in first-encounter order
//! - **Filters**: Optionally leave out assemblies and hidden occurrences
//! - **Snapshots**: JSON, YAML, or TOML, as a flat list or a nested tree
//! - **Separators**: Comma or semicolon, with in-field separators replaced by `-`
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a BOM next to the snapshot
//! bomgen generate design.json -o parts.csv
//!
//! # Preview the aggregated rows
//! bomgen inspect design.yaml --include-assemblies
//! ```
//!
//! ## Library use
//!
//! ```
//! use bomgen::{aggregate, OccurrenceRecord, Separator};
//!
//! let occurrences = vec![
//!     OccurrenceRecord::new("A1", "Bracket"),
//!     OccurrenceRecord::new("A1", "Bracket"),
//! ];
//! let bom = aggregate(&occurrences, false, false);
//! assert_eq!(bom.get("A1").unwrap().instance_count, 2);
//! assert!(bom.to_csv(Separator::Comma).ends_with("A1,Bracket,,2,False,\n"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod app;
pub mod core;
pub mod error;
pub mod export;
pub mod snapshot;

// Re-export commonly used types
pub use app::{App, GenerateOptions, GeneratedBom};
pub use crate::core::{
    aggregate, aggregate_with, format_csv, AggregateOptions, Bom, BomEntry, Config,
    OccurrenceRecord, Separator,
};
pub use error::{BomError, BomResult};
pub use snapshot::{Design, OccurrenceNode, SnapshotFile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "bomgen";
