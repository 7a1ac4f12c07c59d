//! Writing generated BOM text to disk.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BomError, BomResult};

/// Append `extension` to `path` when it has none.
///
/// Mirrors a save dialog filtered to `*.csv`: `parts` becomes `parts.csv`,
/// while `parts.txt` is left alone.
pub fn resolve_destination(path: &Path, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    if path.extension().is_some() || extension.is_empty() {
        return path.to_path_buf();
    }

    path.with_extension(extension)
}

/// Write BOM text to `path`.
///
/// The file is created (or truncated), written in full, and flushed before
/// the handle is dropped. Nothing is added to the text: no byte-order mark
/// and no trailing newline beyond what the caller produced.
pub fn write_bom(path: &Path, text: &str, overwrite: bool) -> BomResult<()> {
    if !overwrite && path.exists() {
        return Err(BomError::OutputExists(path.to_path_buf()));
    }

    let export_err = |source| BomError::Export { path: path.to_path_buf(), source };

    let mut file = File::create(path).map_err(export_err)?;
    file.write_all(text.as_bytes()).map_err(export_err)?;
    file.flush().map_err(export_err)?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Wrote BOM");
    Ok(())
}
