//! Documents command implementation.

use crate::error::Result;
use crate::format::{OutputContext, format_document_line};
use crate::storage::SqliteStorage;

/// List every ingested document with its package count.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn execute(storage: &SqliteStorage, ctx: &OutputContext) -> Result<()> {
    let documents = storage.list_documents()?;

    if ctx.is_json() {
        return ctx.json_pretty(&documents);
    }

    if documents.is_empty() {
        ctx.line("No documents ingested.");
        return Ok(());
    }
    for document in &documents {
        ctx.line(&format_document_line(document));
    }
    Ok(())
}
