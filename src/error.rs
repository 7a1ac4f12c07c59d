//! Error types for BOM generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for BOM operations.
pub type BomResult<T> = Result<T, BomError>;

/// Errors that can occur around BOM generation.
///
/// The aggregator itself never fails; these cover the boundaries around it:
/// reading a design snapshot and writing the finished CSV.
#[derive(Debug, Error)]
pub enum BomError {
    /// The snapshot carries no design to read occurrences from.
    #[error("No active design")]
    NoActiveDesign,

    /// Snapshot file could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot content could not be parsed.
    #[error("Invalid snapshot {path}: {message}")]
    SnapshotParse { path: PathBuf, message: String },

    /// Snapshot file extension is not a known format.
    #[error("Unsupported snapshot format: {0} (expected json, yaml, yml or toml)")]
    UnsupportedFormat(String),

    /// Separator name is not one of the supported choices.
    #[error("Invalid separator '{0}' (expected comma or semicolon)")]
    InvalidSeparator(String),

    /// Destination already exists and overwriting is disabled.
    #[error("Output file already exists: {0}")]
    OutputExists(PathBuf),

    /// Writing the BOM file failed.
    #[error("Failed to write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
