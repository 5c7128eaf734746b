//! `sbom_index` - SPDX SBOM ingestion and lookup
//!
//! Ingests SPDX JSON documents into `SQLite`, keeping each document verbatim
//! alongside the packages it declares, and answers lookups by component name
//! (optionally pinned to a version) or by license identifier.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`extract`] - Pure SPDX JSON → component extraction
//! - [`storage`] - `SQLite` schema, inserts and queries
//! - [`model`] - Data types (documents, packages, query rows)
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Layered configuration (YAML, env, CLI)
//! - [`error`] - Error types and exit codes
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod model;
pub mod storage;

pub use error::{ErrorCode, Result, SbomError, StructuredError};
pub use extract::extract;
pub use model::{ComponentRecord, PackageMatch};
pub use storage::SqliteStorage;
