#![allow(dead_code)]

use super::*;
use sbom_index::extract;
use sbom_index::model::IngestSummary;
use serde_json::Value;

/// Extract and ingest a JSON document the way the `ingest` command does.
pub fn ingest_value(storage: &mut SqliteStorage, name: &str, document: &Value) -> IngestSummary {
    let components = extract(document).expect("fixture is an SPDX document");
    let raw = serde_json::to_string(document).expect("serialize fixture");
    storage
        .ingest(name, &raw, &components)
        .expect("ingest fixture")
}

/// A database holding the openssl/zlib document.
pub fn scenario_openssl_zlib() -> (SqliteStorage, IngestSummary) {
    let mut storage = test_db();
    let summary = ingest_value(&mut storage, "test-sbom.json", &fixtures::openssl_zlib());
    (storage, summary)
}

/// A database holding two documents that both declare zlib.
pub fn scenario_two_documents() -> SqliteStorage {
    let mut storage = test_db();
    ingest_value(&mut storage, "test-sbom.json", &fixtures::openssl_zlib());
    ingest_value(&mut storage, "update.json", &fixtures::zlib_update());
    storage
}
