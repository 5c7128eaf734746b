//! Command implementations.

pub mod completions;
pub mod documents;
pub mod ingest;
pub mod query;
pub mod show;
