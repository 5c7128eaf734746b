//! `SQLite` storage layer for `sbom_index`.
//!
//! Two insert-only tables: `documents` holds each ingested SBOM verbatim and
//! `packages` holds the components extracted from it.
//!
//! # Submodules
//!
//! - [`schema`] - Database schema definitions
//! - [`sqlite`] - Main `SQLite` storage implementation

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStorage;
