//! Command-line interface.
//!
//! Argument parsing with clap derive, plus [`run`], which resolves
//! configuration, opens storage and dispatches to a command.

pub mod commands;

use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::OutputContext;
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ingest SPDX JSON SBOMs and query their components.
#[derive(Parser, Debug)]
#[command(name = "sbom-index", version, about, long_about = None)]
pub struct Cli {
    /// Database path (overrides config and SBOM_INDEX_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress result output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write JSON logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest an SPDX JSON SBOM file
    Ingest(IngestArgs),

    /// Query packages by component name or license
    Query(QueryArgs),

    /// List ingested documents
    Documents,

    /// Print the stored content of a document
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct IngestArgs {
    /// Path to SPDX JSON SBOM file
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Component/package name to search for (exact match)
    #[arg(long)]
    pub component: Option<String>,

    /// Only match this exact version (requires --component)
    #[arg(long)]
    pub version: Option<String>,

    /// License identifier to search for (exact match)
    #[arg(long)]
    pub license: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Document ID as printed by `ingest` or `documents`
    pub id: i64,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            db: self.db.clone(),
            json: self.json.then_some(true),
        }
    }
}

/// Resolve configuration, open storage and run the selected command.
///
/// # Errors
///
/// Returns the command's error, or a config/storage error from startup.
pub fn run(cli: &Cli) -> Result<()> {
    if let Commands::Completions(args) = &cli.command {
        commands::completions::execute(args);
        return Ok(());
    }

    let settings = config::load_settings(Path::new("."), &cli.overrides())?;
    let ctx = OutputContext::from_flags(settings.json, cli.quiet);
    let mut storage = config::open_storage(&settings)?;
    debug!(command = ?cli.command, "Dispatching command");

    match &cli.command {
        Commands::Ingest(args) => commands::ingest::execute(args, &mut storage, &ctx),
        Commands::Query(args) => commands::query::execute(args, &storage, &ctx),
        Commands::Documents => commands::documents::execute(&storage, &ctx),
        Commands::Show(args) => commands::show::execute(args, &storage, &ctx),
        Commands::Completions(_) => Ok(()),
    }
}
