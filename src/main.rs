//! bomgen - bill of materials generator for CAD design snapshots.
//!
//! Reads a design snapshot, aggregates its occurrences by part number, and
//! writes the result as delimited text.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bomgen::{App, BomError, Config, GenerateOptions, Separator};

/// Bill of materials generator for CAD design snapshots
#[derive(Parser)]
#[command(name = "bomgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this configuration file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CSV bill of materials from a design snapshot
    Generate {
        /// Design snapshot (.json, .yaml, .yml or .toml)
        snapshot: PathBuf,

        /// Destination file (".csv" is added when no extension is given);
        /// prints to stdout when omitted
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the aggregated BOM without writing a file
    Inspect {
        /// Design snapshot (.json, .yaml, .yml or .toml)
        snapshot: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show configuration
    Config {
        /// Show config directory path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Options shared by the BOM-producing subcommands.
#[derive(Args)]
struct FilterArgs {
    /// Field separator (comma or semicolon)
    #[arg(short, long, value_name = "SEP")]
    separator: Option<Separator>,

    /// List assemblies (occurrences with children) as BOM rows
    #[arg(short = 'a', long, overrides_with = "exclude_assemblies")]
    include_assemblies: bool,

    /// Leave assemblies out, even when the config includes them
    #[arg(long, overrides_with = "include_assemblies")]
    exclude_assemblies: bool,

    /// Count occurrences that are hidden in the design
    #[arg(short = 'H', long, overrides_with = "exclude_hidden")]
    include_hidden: bool,

    /// Skip hidden occurrences, even when the config includes them
    #[arg(long, overrides_with = "include_hidden")]
    exclude_hidden: bool,
}

/// `Some(true)` for an include flag, `Some(false)` for an exclude flag,
/// `None` to defer to the config.
fn filter_override(include: bool, exclude: bool) -> Option<bool> {
    if include {
        Some(true)
    } else if exclude {
        Some(false)
    } else {
        None
    }
}

impl FilterArgs {
    fn to_options(&self) -> GenerateOptions {
        GenerateOptions {
            separator: self.separator,
            include_assemblies: filter_override(self.include_assemblies, self.exclude_assemblies),
            include_hidden: filter_override(self.include_hidden, self.exclude_hidden),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(e.downcast_ref::<BomError>(), Some(BomError::NoActiveDesign)) {
                eprintln!("No active design");
            } else {
                eprintln!("Failed:\n{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate { snapshot, output, filters } => {
            let app = load_app(cli.config.as_deref())?;
            cmd_generate(&app, &snapshot, output.as_deref(), &filters)
        }
        Commands::Inspect { snapshot, format, filters } => {
            let app = load_app(cli.config.as_deref())?;
            cmd_inspect(&app, &snapshot, &format, &filters)
        }
        Commands::Config { path } => cmd_config(cli.config.as_deref(), path),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    }
}

fn load_app(config_path: Option<&Path>) -> Result<App> {
    Ok(App::with_config(load_config(config_path)?))
}

/// Generate a BOM and write it to a file or stdout.
fn cmd_generate(
    app: &App,
    snapshot: &Path,
    output: Option<&Path>,
    filters: &FilterArgs,
) -> Result<()> {
    let generated = app.generate(snapshot, &filters.to_options())?;

    match output {
        Some(destination) => {
            let written = app.export(&generated, destination)?;
            println!(
                "Wrote {} parts ({} instances) to {}",
                generated.bom.len(),
                generated.bom.total_instances(),
                written.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(generated.text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Print the aggregated rows.
fn cmd_inspect(app: &App, snapshot: &Path, format: &str, filters: &FilterArgs) -> Result<()> {
    let generated = app.generate(snapshot, &filters.to_options())?;
    let bom = &generated.bom;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(bom)?;
            println!("{json}");
        }
        "text" => {
            if let Some(ref name) = generated.design_name {
                println!("Design: {name}\n");
            }
            for (part_number, entry) in bom.iter() {
                let part_number = if part_number.is_empty() { "(none)" } else { part_number };
                let marker = if entry.is_assembly { " [assembly]" } else { "" };
                println!("{:>4} x {} - {}{}", entry.instance_count, part_number, entry.name, marker);
            }
            println!("\nTotal: {} parts, {} instances", bom.len(), bom.total_instances());
        }
        other => anyhow::bail!("Unsupported format: {other}. Supported: text, json"),
    }

    Ok(())
}

/// Show configuration.
fn cmd_config(config_path: Option<&Path>, show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::config_dir() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let config = load_config(config_path)?;
    let toml = toml::to_string_pretty(&config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "bomgen", &mut io::stdout());
}
