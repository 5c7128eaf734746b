//! SPDX JSON component extraction.
//!
//! Turns a parsed SPDX JSON tree into [`ComponentRecord`]s. The only
//! validation performed is the presence of the `spdxVersion` marker; every
//! other field is read defensively and a missing or oddly-typed value simply
//! becomes `None`.

use crate::error::{Result, SbomError};
use crate::model::ComponentRecord;
use serde_json::Value;

/// Field that marks a JSON object as an SPDX document.
pub const VERSION_MARKER: &str = "spdxVersion";

const PACKAGES_FIELD: &str = "packages";
const NAME_FIELD: &str = "name";
const VERSION_FIELD: &str = "versionInfo";
const LICENSE_FIELD: &str = "licenseDeclared";

/// Extract the declared packages of an SPDX JSON document, in document order.
///
/// # Errors
///
/// Returns [`SbomError::Format`] if `document` is not a JSON object or has no
/// `spdxVersion` field. No records are produced in that case.
pub fn extract(document: &Value) -> Result<Vec<ComponentRecord>> {
    let Some(root) = document.as_object() else {
        return Err(SbomError::format("top-level value is not a JSON object"));
    };
    if !root.contains_key(VERSION_MARKER) {
        return Err(SbomError::format(format!("missing \"{VERSION_MARKER}\"")));
    }

    let records: Vec<ComponentRecord> = root
        .get(PACKAGES_FIELD)
        .and_then(Value::as_array)
        .map(|packages| packages.iter().map(component_from_value).collect())
        .unwrap_or_default();

    Ok(records)
}

/// The declared SPDX version, when it is a string.
#[must_use]
pub fn spdx_version(document: &Value) -> Option<&str> {
    document.get(VERSION_MARKER).and_then(Value::as_str)
}

fn component_from_value(package: &Value) -> ComponentRecord {
    ComponentRecord {
        name: text_field(package, NAME_FIELD),
        version: text_field(package, VERSION_FIELD),
        license: text_field(package, LICENSE_FIELD),
    }
}

// Strings pass through verbatim; numbers and booleans keep their JSON text.
// Null, arrays and objects have no scalar text and read as absent.
fn text_field(package: &Value, field: &str) -> Option<String> {
    match package.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
