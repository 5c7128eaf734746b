//! Output formatting for `sbom_index`.
//!
//! Supports human-readable text output and machine-parseable JSON. Results go
//! to stdout; diagnostics go to stderr through `tracing`.

mod context;
mod text;

pub use context::{OutputContext, OutputMode};
pub use text::{ABSENT, format_document_line, format_ingest_summary, format_match_line};
