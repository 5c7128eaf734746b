mod common;

use common::fixtures;
use proptest::prelude::*;
use sbom_index::{ComponentRecord, SbomError, extract};
use serde_json::{Map, Value, json};

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z0-9 .+-]{0,12}")
}

fn component() -> impl Strategy<Value = ComponentRecord> {
    (optional_text(), optional_text(), optional_text()).prop_map(|(name, version, license)| {
        ComponentRecord {
            name,
            version,
            license,
        }
    })
}

fn package_json(record: &ComponentRecord) -> Value {
    let mut object = Map::new();
    if let Some(name) = &record.name {
        object.insert("name".to_string(), json!(name));
    }
    if let Some(version) = &record.version {
        object.insert("versionInfo".to_string(), json!(version));
    }
    if let Some(license) = &record.license {
        object.insert("licenseDeclared".to_string(), json!(license));
    }
    Value::Object(object)
}

proptest! {
    #[test]
    fn extracts_one_record_per_package_in_order(records in prop::collection::vec(component(), 0..24)) {
        let packages: Vec<Value> = records.iter().map(package_json).collect();
        let document = json!({"spdxVersion": "SPDX-2.3", "packages": packages});

        let extracted = extract(&document).unwrap();
        prop_assert_eq!(extracted, records);
    }

    #[test]
    fn documents_without_marker_are_rejected(
        records in prop::collection::vec(component(), 0..8),
        key in "[a-zA-Z]{1,12}",
    ) {
        prop_assume!(key != "spdxVersion");
        let packages: Vec<Value> = records.iter().map(package_json).collect();
        let mut root = Map::new();
        root.insert(key, json!("SPDX-2.3"));
        root.insert("packages".to_string(), Value::Array(packages));
        let document = Value::Object(root);

        let rejected = matches!(extract(&document), Err(SbomError::Format { .. }));
        prop_assert!(rejected, "expected a format error without the marker");
    }
}

#[test]
fn cyclonedx_is_not_recognized() {
    let err = extract(&fixtures::cyclonedx()).unwrap_err();
    assert!(err.to_string().starts_with("not a recognized SBOM format"));
}

#[test]
fn sparse_fixture_maps_missing_fields_to_none() {
    let records = extract(&fixtures::sparse()).unwrap();
    assert_eq!(
        records,
        vec![
            ComponentRecord {
                name: Some("busybox".to_string()),
                version: None,
                license: None,
            },
            ComponentRecord {
                name: None,
                version: Some("0.1".to_string()),
                license: None,
            },
            ComponentRecord {
                name: Some("musl".to_string()),
                version: None,
                license: Some("MIT".to_string()),
            },
        ]
    );
}
