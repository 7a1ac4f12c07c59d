//! BOM generation workflow.
//!
//! This module contains the `App` struct that holds the configuration and
//! runs the full pipeline: load a snapshot, aggregate its occurrences,
//! render the text, and write it out.

use std::path::{Path, PathBuf};

use crate::core::{aggregate_with, AggregateOptions, Bom, Config, Separator};
use crate::error::BomResult;
use crate::export::{resolve_destination, write_bom};
use crate::snapshot::parse_snapshot;

/// Options for a single generation run.
///
/// `None` fields fall back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Field separator override
    pub separator: Option<Separator>,

    /// Include-assemblies override
    pub include_assemblies: Option<bool>,

    /// Include-hidden override
    pub include_hidden: Option<bool>,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedBom {
    /// Name of the design the BOM was built from
    pub design_name: Option<String>,

    /// The aggregated rows
    pub bom: Bom,

    /// Separator the text was rendered with
    pub separator: Separator,

    /// Rendered delimited text
    pub text: String,
}

/// Application state.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Application configuration
    pub config: Config,
}

impl App {
    /// Create an app with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Effective separator for a run.
    pub fn separator(&self, options: &GenerateOptions) -> Separator {
        options.separator.unwrap_or(self.config.bom.separator)
    }

    /// Effective aggregation filters for a run.
    pub fn aggregate_options(&self, options: &GenerateOptions) -> AggregateOptions {
        let defaults = self.config.bom.aggregate_options();
        AggregateOptions::new(
            options.include_assemblies.unwrap_or(defaults.include_assemblies),
            options.include_hidden.unwrap_or(defaults.include_hidden),
        )
    }

    /// Load a snapshot and build its BOM text.
    ///
    /// Fails with `NoActiveDesign` before aggregating when the snapshot
    /// holds no design.
    pub fn generate(&self, snapshot: &Path, options: &GenerateOptions) -> BomResult<GeneratedBom> {
        let design = parse_snapshot(snapshot)?.into_active_design()?;
        let occurrences = design.occurrences();

        let separator = self.separator(options);
        let bom = aggregate_with(&occurrences, self.aggregate_options(options));
        let text = bom.to_csv(separator);

        Ok(GeneratedBom { design_name: design.name, bom, separator, text })
    }

    /// Write generated text to `destination`, applying the configured
    /// default extension and overwrite policy. Returns the path written.
    pub fn export(&self, generated: &GeneratedBom, destination: &Path) -> BomResult<PathBuf> {
        let path = resolve_destination(destination, &self.config.export.extension);
        write_bom(&path, &generated.text, self.config.export.overwrite)?;

        tracing::info!(
            path = %path.display(),
            parts = generated.bom.len(),
            instances = generated.bom.total_instances(),
            "Exported BOM"
        );

        Ok(path)
    }
}
