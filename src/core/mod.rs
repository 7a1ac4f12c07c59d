//! Core types and functionality for bomgen.
//!
//! This module contains the fundamental data structures used throughout
//! the application: occurrences, the aggregated BOM, its text rendering,
//! and configuration.

mod bom;
mod config;
pub mod csv;
mod occurrence;

pub use bom::{aggregate, aggregate_with, AggregateOptions, Bom, BomEntry};
pub use config::{BomConfig, Config, ExportConfig};
pub use csv::format_csv;
pub use occurrence::{OccurrenceRecord, Separator};
