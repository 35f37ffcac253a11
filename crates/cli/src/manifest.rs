use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Manifest envelope version.
pub const MANIFEST_UPKEEP_VERSION: &str = "1.0";

/// Compute SHA-256 etag from compact JSON representation.
pub fn compute_etag(ruleset: &Value) -> String {
    // Serializing a Value to a String does not fail.
    let canonical = serde_json::to_string(ruleset).unwrap_or_default();
    let hash = Sha256::digest(canonical.as_bytes());
    format!("{:x}", hash)
}

/// Wrap an exported ruleset in a manifest envelope.
///
/// `serde_json::Map` is a `BTreeMap` without `preserve_order`, so keys
/// come out sorted and the etag is stable across runs.
pub fn build_manifest(ruleset: Value) -> Value {
    let etag = compute_etag(&ruleset);
    let mut map = Map::new();
    map.insert("etag".to_string(), Value::String(etag));
    map.insert("ruleset".to_string(), ruleset);
    map.insert(
        "upkeep".to_string(),
        Value::String(MANIFEST_UPKEEP_VERSION.to_string()),
    );
    Value::Object(map)
}

/// Split a manifest into its ruleset, checking the recorded etag.
pub fn open_manifest(doc: &Value) -> Result<&Value, String> {
    let ruleset = doc
        .get("ruleset")
        .ok_or_else(|| "manifest has no 'ruleset' field".to_string())?;
    let recorded = doc
        .get("etag")
        .and_then(Value::as_str)
        .ok_or_else(|| "manifest 'etag' must be a string".to_string())?;
    let actual = compute_etag(ruleset);
    if recorded != actual {
        return Err(format!(
            "etag mismatch: manifest records {}, content hashes to {}",
            recorded, actual
        ));
    }
    Ok(ruleset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn etag_is_stable_and_hex() {
        let v = json!({ "id": "strategy", "rules": [] });
        let a = compute_etag(&v);
        assert_eq!(a, compute_etag(&v));
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn manifest_round_trip() {
        let v = json!({ "id": "strategy" });
        let m = build_manifest(v.clone());
        assert_eq!(m["upkeep"], "1.0");
        assert_eq!(open_manifest(&m).unwrap(), &v);
    }

    #[test]
    fn tampered_manifest_rejected() {
        let mut m = build_manifest(json!({ "id": "strategy" }));
        m["ruleset"]["id"] = json!("other");
        assert!(open_manifest(&m).unwrap_err().contains("etag mismatch"));
    }
}
