//! Show command implementation.
//!
//! Prints a document's stored SBOM text exactly as it was ingested.

use crate::cli::ShowArgs;
use crate::error::{Result, SbomError};
use crate::format::OutputContext;
use crate::model::{Document, Package};
use crate::storage::SqliteStorage;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    document: &'a Document,
    packages: Vec<Package>,
}

/// Execute the show command.
///
/// # Errors
///
/// Returns [`SbomError::DocumentNotFound`] for an unknown ID, or a storage error.
pub fn execute(args: &ShowArgs, storage: &SqliteStorage, ctx: &OutputContext) -> Result<()> {
    let document = storage
        .get_document(args.id)?
        .ok_or(SbomError::DocumentNotFound { id: args.id })?;

    if ctx.is_json() {
        let packages = storage.get_packages(document.id)?;
        return ctx.json_pretty(&ShowOutput {
            document: &document,
            packages,
        });
    }

    ctx.raw(&document.raw_json);
    Ok(())
}
