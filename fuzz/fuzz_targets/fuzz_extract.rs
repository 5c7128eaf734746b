#![no_main]

use libfuzzer_sys::fuzz_target;
use sbom_index::extract::extract;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    if let Ok(records) = extract(&value) {
        let declared = value
            .get("packages")
            .and_then(serde_json::Value::as_array)
            .map_or(0, Vec::len);
        assert_eq!(records.len(), declared);
    }
});
