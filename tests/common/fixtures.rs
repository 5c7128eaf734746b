#![allow(dead_code)]

use serde_json::{Value, json};

/// The two-package document used throughout the query scenarios.
pub const OPENSSL_ZLIB: &str = r#"{
  "spdxVersion": "SPDX-3.0",
  "packages": [
    {"name": "openssl", "versionInfo": "3.0.1", "licenseDeclared": "Apache-2.0"},
    {"name": "zlib", "versionInfo": "1.2.13", "licenseDeclared": "Zlib"}
  ]
}
"#;

pub fn openssl_zlib() -> Value {
    serde_json::from_str(OPENSSL_ZLIB).expect("fixture is valid JSON")
}

/// A second document that shares `zlib` at a different version.
pub fn zlib_update() -> Value {
    json!({
        "spdxVersion": "SPDX-2.3",
        "packages": [
            {"name": "zlib", "versionInfo": "1.3", "licenseDeclared": "Zlib"},
            {"name": "curl", "versionInfo": "8.5.0", "licenseDeclared": "curl"}
        ]
    })
}

/// A package list where some components omit fields.
pub fn sparse() -> Value {
    json!({
        "spdxVersion": "SPDX-2.3",
        "packages": [
            {"name": "busybox"},
            {"versionInfo": "0.1"},
            {"name": "musl", "licenseDeclared": "MIT"}
        ]
    })
}

pub fn cyclonedx() -> Value {
    json!({
        "bomFormat": "CycloneDX",
        "specVersion": "1.5",
        "components": [{"name": "openssl", "version": "3.0.1"}]
    })
}
