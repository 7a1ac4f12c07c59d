//! Design snapshots.
//!
//! A snapshot is an immutable, serialized copy of a design's occurrence
//! tree. Materializing it up front keeps aggregation independent of any live
//! CAD session: the caller loads a snapshot, flattens it into occurrences,
//! and hands those to the aggregator.

mod parser;
mod schema;

pub use parser::{parse_snapshot, parse_snapshot_str, SnapshotFormat};
pub use schema::{flatten, Design, OccurrenceNode, SnapshotFile};
