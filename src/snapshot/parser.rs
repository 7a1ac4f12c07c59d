//! Snapshot parser.
//!
//! Parses JSON, YAML, or TOML snapshot files into `SnapshotFile` values.

use std::fmt;
use std::path::Path;

use super::SnapshotFile;
use crate::error::{BomError, BomResult};

/// Serialization format of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
    Toml,
}

impl SnapshotFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> BomResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(BomError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        };
        write!(f, "{name}")
    }
}

/// Parse a snapshot from a file, choosing the format by extension.
pub fn parse_snapshot(path: &Path) -> BomResult<SnapshotFile> {
    let format = SnapshotFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|source| BomError::SnapshotRead { path: path.to_path_buf(), source })?;

    let snapshot = decode(&content, format)
        .map_err(|message| BomError::SnapshotParse { path: path.to_path_buf(), message })?;

    tracing::debug!(
        path = %path.display(),
        format = %format,
        has_design = snapshot.design.is_some(),
        "Loaded snapshot"
    );

    Ok(snapshot)
}

/// Parse a snapshot from a string.
pub fn parse_snapshot_str(content: &str, format: SnapshotFormat) -> BomResult<SnapshotFile> {
    decode(content, format).map_err(|message| BomError::SnapshotParse {
        path: format!("<{format} input>").into(),
        message,
    })
}

fn decode(content: &str, format: SnapshotFormat) -> Result<SnapshotFile, String> {
    match format {
        SnapshotFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SnapshotFormat::Yaml => {
            // An empty YAML document deserializes as unit, not as an empty map.
            if content.trim().is_empty() {
                return Ok(SnapshotFile::default());
            }
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        }
        SnapshotFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate;

    #[test]
    fn test_format_detection() {
        assert_eq!(SnapshotFormat::from_path(Path::new("a.json")).unwrap(), SnapshotFormat::Json);
        assert_eq!(SnapshotFormat::from_path(Path::new("a.YML")).unwrap(), SnapshotFormat::Yaml);
        assert_eq!(SnapshotFormat::from_path(Path::new("a.yaml")).unwrap(), SnapshotFormat::Yaml);
        assert_eq!(SnapshotFormat::from_path(Path::new("a.toml")).unwrap(), SnapshotFormat::Toml);
        assert!(matches!(
            SnapshotFormat::from_path(Path::new("a.f3d")),
            Err(BomError::UnsupportedFormat(_))
        ));
        assert!(SnapshotFormat::from_path(Path::new("snapshot")).is_err());
    }

    #[test]
    fn test_parse_json_flat() {
        let json = r#"{
            "design": {
                "name": "Bracket plate",
                "occurrences": [
                    {"part_number": "A1", "name": "Bracket", "description": "L-bracket"},
                    {"part_number": "A1", "name": "Bracket", "description": "L-bracket", "is_visible": false}
                ]
            }
        }"#;

        let snapshot = parse_snapshot_str(json, SnapshotFormat::Json).unwrap();
        let design = snapshot.active_design().unwrap();
        assert_eq!(design.name.as_deref(), Some("Bracket plate"));

        let occurrences = design.occurrences();
        assert_eq!(occurrences.len(), 2);
        assert!(!occurrences[1].is_visible);
    }

    #[test]
    fn test_parse_yaml_tree() {
        let yaml = r"
design:
  name: Cart
  tree:
    - part_number: AX-1
      name: Axle assembly
      children:
        - part_number: W-1
          name: Wheel
        - part_number: W-1
          name: Wheel
          visible: false
";

        let snapshot = parse_snapshot_str(yaml, SnapshotFormat::Yaml).unwrap();
        let occurrences = snapshot.active_design().unwrap().occurrences();

        assert_eq!(occurrences.len(), 3);
        assert!(occurrences[0].is_assembly);

        let bom = aggregate(&occurrences, false, false);
        assert_eq!(bom.part_numbers(), vec!["W-1"]);
        assert_eq!(bom.get("W-1").unwrap().instance_count, 1);
    }

    #[test]
    fn test_parse_toml_tree() {
        let toml_str = r#"
[design]
name = "Frame"

[[design.tree]]
part_number = "FR-1"
name = "Frame"

[[design.tree.children]]
part_number = "TB-2"
name = "Tube"
description = "25x25, steel"
"#;

        let snapshot = parse_snapshot_str(toml_str, SnapshotFormat::Toml).unwrap();
        let occurrences = snapshot.active_design().unwrap().occurrences();

        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[1].description, "25x25, steel");
    }

    #[test]
    fn test_no_design_in_document() {
        let snapshot = parse_snapshot_str(r#"{"design": null}"#, SnapshotFormat::Json).unwrap();
        assert!(matches!(snapshot.active_design(), Err(BomError::NoActiveDesign)));

        let snapshot = parse_snapshot_str("{}", SnapshotFormat::Json).unwrap();
        assert!(snapshot.design.is_none());

        let snapshot = parse_snapshot_str("", SnapshotFormat::Yaml).unwrap();
        assert!(snapshot.design.is_none());
    }

    #[test]
    fn test_invalid_content() {
        let result = parse_snapshot_str("{not json", SnapshotFormat::Json);
        assert!(matches!(result, Err(BomError::SnapshotParse { .. })));

        let result = parse_snapshot_str(
            r#"{"design": {"occurrences": [{"name": "no part number"}]}}"#,
            SnapshotFormat::Json,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_snapshot_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("design.json");
        std::fs::write(&path, r#"{"design": {"occurrences": [{"part_number": "P", "name": "p"}]}}"#)
            .unwrap();

        let snapshot = parse_snapshot(&path).unwrap();
        assert_eq!(snapshot.active_design().unwrap().occurrences().len(), 1);
    }

    #[test]
    fn test_parse_snapshot_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = parse_snapshot(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(BomError::SnapshotRead { .. })));
    }
}
