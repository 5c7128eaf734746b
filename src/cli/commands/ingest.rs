//! Ingest command implementation.
//!
//! Reads an SPDX JSON file, extracts its declared packages and stores the
//! document together with one package row per component. A file that is not
//! a recognized SBOM is rejected before anything is written.

use crate::cli::IngestArgs;
use crate::error::{Result, SbomError};
use crate::extract::{extract, spdx_version};
use crate::format::{OutputContext, format_ingest_summary};
use crate::model::IngestSummary;
use crate::storage::SqliteStorage;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct IngestOutput<'a> {
    document_id: i64,
    name: &'a str,
    packages: usize,
}

/// Execute the ingest command.
///
/// # Errors
///
/// Returns an error if the file is missing, is not JSON, is not an SPDX
/// document, or cannot be stored.
pub fn execute(args: &IngestArgs, storage: &mut SqliteStorage, ctx: &OutputContext) -> Result<()> {
    let name = document_name(&args.file);
    let summary = ingest_file(storage, &args.file)?;

    if ctx.is_json() {
        return ctx.json_pretty(&IngestOutput {
            document_id: summary.document_id,
            name: &name,
            packages: summary.packages,
        });
    }

    for line in format_ingest_summary(&summary) {
        ctx.line(&line);
    }
    Ok(())
}

/// Read, validate and store one SBOM file.
///
/// The stored raw content is the file text exactly as read.
///
/// # Errors
///
/// See [`execute`].
pub fn ingest_file(storage: &mut SqliteStorage, path: &Path) -> Result<IngestSummary> {
    if !path.is_file() {
        return Err(SbomError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&raw).map_err(|source| SbomError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let components = extract(&document)?;
    debug!(
        path = %path.display(),
        spdx_version = spdx_version(&document).unwrap_or_default(),
        components = components.len(),
        "Extracted components"
    );

    let summary = storage.ingest(&document_name(path), &raw, &components)?;
    info!(document_id = summary.document_id, "Ingest complete");
    Ok(summary)
}

/// Base name of the SBOM file, used as the document name.
#[must_use]
pub fn document_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use tempfile::TempDir;

    const SBOM: &str = r#"{
  "spdxVersion": "SPDX-3.0",
  "packages": [
    {"name": "openssl", "versionInfo": "3.0.1", "licenseDeclared": "Apache-2.0"},
    {"name": "zlib", "versionInfo": "1.2.13", "licenseDeclared": "Zlib"}
  ]
}
"#;

    #[test]
    fn ingest_file_stores_document_verbatim() {
        init_test_logging();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test-sbom.json");
        fs::write(&path, SBOM).unwrap();
        let mut storage = SqliteStorage::open_memory().unwrap();

        let summary = ingest_file(&mut storage, &path).unwrap();
        assert_eq!(summary.packages, 2);

        let document = storage.get_document(summary.document_id).unwrap().unwrap();
        assert_eq!(document.name, "test-sbom.json");
        assert_eq!(document.raw_json, SBOM);
    }

    #[test]
    fn unrecognized_document_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cyclonedx.json");
        fs::write(&path, r#"{"bomFormat": "CycloneDX", "components": []}"#).unwrap();
        let mut storage = SqliteStorage::open_memory().unwrap();

        let err = ingest_file(&mut storage, &path).unwrap_err();
        assert!(matches!(err, SbomError::Format { .. }));
        assert_eq!(storage.count_documents().unwrap(), 0);
    }

    #[test]
    fn invalid_json_is_reported_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let mut storage = SqliteStorage::open_memory().unwrap();

        let err = ingest_file(&mut storage, &path).unwrap_err();
        assert!(matches!(err, SbomError::InvalidJson { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut storage = SqliteStorage::open_memory().unwrap();

        let err = ingest_file(&mut storage, &temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SbomError::FileNotFound { .. }));
    }

    #[test]
    fn document_name_is_base_name() {
        assert_eq!(document_name(Path::new("/tmp/a/b/sbom.spdx.json")), "sbom.spdx.json");
        assert_eq!(document_name(Path::new("local.json")), "local.json");
    }
}
