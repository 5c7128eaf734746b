mod common;

use common::scenarios::{ingest_value, scenario_openssl_zlib, scenario_two_documents};
use common::{fixtures, test_db};
use sbom_index::PackageMatch;

fn row(document: &str, name: &str, version: &str, license: &str) -> PackageMatch {
    PackageMatch {
        document: document.to_string(),
        name: Some(name.to_string()),
        version: Some(version.to_string()),
        license: Some(license.to_string()),
    }
}

fn sorted(mut rows: Vec<PackageMatch>) -> Vec<PackageMatch> {
    rows.sort();
    rows
}

#[test]
fn openssl_zlib_scenario() {
    let (storage, summary) = scenario_openssl_zlib();
    assert_eq!(summary.packages, 2);
    assert_eq!(storage.count_packages().unwrap(), 2);

    assert_eq!(
        storage.query_by_component("openssl", None).unwrap(),
        vec![row("test-sbom.json", "openssl", "3.0.1", "Apache-2.0")]
    );
    assert!(
        storage
            .query_by_component("openssl", Some("9.9.9"))
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        storage.query_by_license("Zlib").unwrap(),
        vec![row("test-sbom.json", "zlib", "1.2.13", "Zlib")]
    );
}

#[test]
fn every_inserted_package_round_trips_by_name() {
    let (storage, _) = scenario_openssl_zlib();
    let expected = [
        row("test-sbom.json", "openssl", "3.0.1", "Apache-2.0"),
        row("test-sbom.json", "zlib", "1.2.13", "Zlib"),
    ];

    for package in expected {
        let name = package.name.clone().unwrap();
        let rows = storage.query_by_component(&name, None).unwrap();
        assert_eq!(rows, vec![package]);
    }
}

#[test]
fn component_query_spans_documents() {
    let storage = scenario_two_documents();

    assert_eq!(
        sorted(storage.query_by_component("zlib", None).unwrap()),
        vec![
            row("test-sbom.json", "zlib", "1.2.13", "Zlib"),
            row("update.json", "zlib", "1.3", "Zlib"),
        ]
    );
    assert_eq!(
        storage.query_by_component("zlib", Some("1.3")).unwrap(),
        vec![row("update.json", "zlib", "1.3", "Zlib")]
    );
}

#[test]
fn license_query_spans_documents() {
    let storage = scenario_two_documents();

    assert_eq!(storage.query_by_license("Zlib").unwrap().len(), 2);
    assert_eq!(
        storage.query_by_license("curl").unwrap(),
        vec![row("update.json", "curl", "8.5.0", "curl")]
    );
}

#[test]
fn unused_license_returns_empty() {
    let storage = scenario_two_documents();
    assert!(storage.query_by_license("GPL-2.0-only").unwrap().is_empty());
    assert!(storage.query_by_license("").unwrap().is_empty());
}

#[test]
fn unknown_component_returns_empty() {
    let storage = scenario_two_documents();
    assert!(storage.query_by_component("left-pad", None).unwrap().is_empty());
    assert!(storage.query_by_component("ZLIB", None).unwrap().is_empty());
}

#[test]
fn sparse_packages_are_queryable() {
    let mut storage = test_db();
    ingest_value(&mut storage, "sparse.json", &fixtures::sparse());

    let busybox = storage.query_by_component("busybox", None).unwrap();
    assert_eq!(
        busybox,
        vec![PackageMatch {
            document: "sparse.json".to_string(),
            name: Some("busybox".to_string()),
            version: None,
            license: None,
        }]
    );

    // A version filter never matches a package without a version.
    assert!(
        storage
            .query_by_component("busybox", Some(""))
            .unwrap()
            .is_empty()
    );

    let mit = storage.query_by_license("MIT").unwrap();
    assert_eq!(mit.len(), 1);
    assert_eq!(mit[0].name.as_deref(), Some("musl"));
    assert_eq!(mit[0].version, None);
}
