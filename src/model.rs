//! Core data types.
//!
//! Documents and packages are insert-only: nothing in this crate updates or
//! deletes a row once it is written.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a document on insert.
pub type DocumentId = i64;

/// One component declared by an SBOM, as produced by the extractor.
///
/// Every field is optional; a field missing from the source stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
}

impl ComponentRecord {
    #[must_use]
    pub fn new(name: &str, version: &str, license: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            version: Some(version.to_string()),
            license: Some(license.to_string()),
        }
    }
}

/// A persisted SBOM document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    /// The SBOM text exactly as it was read.
    pub raw_json: String,
}

/// A persisted package row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: i64,
    pub document_id: DocumentId,
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
}

/// Query result row: a package joined with the name of its document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageMatch {
    pub document: String,
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
}

/// Document listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: DocumentId,
    pub name: String,
    pub package_count: usize,
}

/// Outcome of an ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub document_id: DocumentId,
    pub packages: usize,
}
