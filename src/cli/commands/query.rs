//! Query command implementation.
//!
//! `--component` (optionally narrowed by `--version`) takes precedence over
//! `--license`. With neither, the command fails with a usage error.

use crate::cli::QueryArgs;
use crate::error::{Result, SbomError};
use crate::format::{OutputContext, format_match_line};
use crate::model::PackageMatch;
use crate::storage::SqliteStorage;
use tracing::warn;

/// Which query path a set of arguments selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind<'a> {
    Component {
        name: &'a str,
        version: Option<&'a str>,
    },
    License(&'a str),
}

impl QueryKind<'_> {
    const fn label(&self) -> &'static str {
        match self {
            Self::Component { .. } => "component",
            Self::License(_) => "license",
        }
    }
}

/// Pick the query path from the arguments.
///
/// # Errors
///
/// Returns [`SbomError::NoQueryCriteria`] when neither a component nor a
/// license was given.
pub fn select(args: &QueryArgs) -> Result<QueryKind<'_>> {
    if let Some(name) = args.component.as_deref() {
        if args.license.is_some() {
            warn!("--component given; ignoring --license");
        }
        if args.version.as_deref() == Some("") {
            warn!("empty --version matches only packages with an empty version");
        }
        return Ok(QueryKind::Component {
            name,
            version: args.version.as_deref(),
        });
    }

    if args.version.is_some() {
        warn!("--version only applies to --component queries; ignoring it");
    }

    args.license
        .as_deref()
        .map(QueryKind::License)
        .ok_or(SbomError::NoQueryCriteria)
}

/// Run the selected query against storage.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn run_query(storage: &SqliteStorage, kind: QueryKind<'_>) -> Result<Vec<PackageMatch>> {
    match kind {
        QueryKind::Component { name, version } => storage.query_by_component(name, version),
        QueryKind::License(license) => storage.query_by_license(license),
    }
}

/// Execute the query command.
///
/// An empty result is not an error: text mode prints a notice and JSON mode
/// prints an empty array.
///
/// # Errors
///
/// Returns an error if no criteria were given or the query fails.
pub fn execute(args: &QueryArgs, storage: &SqliteStorage, ctx: &OutputContext) -> Result<()> {
    let kind = select(args)?;
    let rows = run_query(storage, kind)?;

    if ctx.is_json() {
        return ctx.json_pretty(&rows);
    }

    if rows.is_empty() {
        ctx.line(&format!("No results found for {} query.", kind.label()));
        return Ok(());
    }
    for row in &rows {
        ctx.line(&format_match_line(row));
    }
    Ok(())
}
