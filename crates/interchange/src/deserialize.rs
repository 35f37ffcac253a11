//! Deserialization from interchange JSON into typed structs.
//!
//! The main entry point is [`from_interchange`], which takes a
//! `&serde_json::Value` and produces an [`InterchangeRuleset`].

use crate::types::*;
use std::fmt;

/// Errors during interchange JSON deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterchangeError {
    /// The document is missing a required top-level field.
    MissingField { field: String },
    /// The `kind` field names something other than a ruleset.
    WrongKind { kind: String },
    /// The `version` field is not one this crate understands.
    UnsupportedVersion { version: String },
    /// The document structure is invalid.
    InvalidDocument(String),
}

impl fmt::Display for InterchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterchangeError::MissingField { field } => {
                write!(f, "ruleset missing required field: '{}'", field)
            }
            InterchangeError::WrongKind { kind } => {
                write!(f, "expected kind '{}', got '{}'", RULESET_KIND, kind)
            }
            InterchangeError::UnsupportedVersion { version } => {
                write!(
                    f,
                    "unsupported ruleset version '{}' (supported: {})",
                    version, RULESET_VERSION
                )
            }
            InterchangeError::InvalidDocument(msg) => {
                write!(f, "invalid ruleset document: {}", msg)
            }
        }
    }
}

impl std::error::Error for InterchangeError {}

/// Deserialize an interchange JSON document into typed structs.
///
/// The envelope (`id`, `kind`, `version`) is checked first so that a
/// wrong file produces a precise message instead of a serde path error.
pub fn from_interchange(doc: &serde_json::Value) -> Result<InterchangeRuleset, InterchangeError> {
    if !doc.is_object() {
        return Err(InterchangeError::InvalidDocument(
            "ruleset must be a JSON object".to_string(),
        ));
    }

    for field in ["id", "kind", "version", "attributes", "rules"] {
        if doc.get(field).is_none() {
            return Err(InterchangeError::MissingField {
                field: field.to_string(),
            });
        }
    }

    let kind = doc.get("kind").and_then(|k| k.as_str()).unwrap_or("");
    if kind != RULESET_KIND {
        return Err(InterchangeError::WrongKind {
            kind: kind.to_string(),
        });
    }

    let version = doc.get("version").and_then(|v| v.as_str()).unwrap_or("");
    if version != RULESET_VERSION {
        return Err(InterchangeError::UnsupportedVersion {
            version: version.to_string(),
        });
    }

    serde_json::from_value(doc.clone())
        .map_err(|e| InterchangeError::InvalidDocument(e.to_string()))
}

/// Serialize a ruleset document back to JSON.
pub fn to_interchange(ruleset: &InterchangeRuleset) -> serde_json::Value {
    // Every field is a plain string, list or enum, so this cannot fail.
    serde_json::to_value(ruleset).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": "pumps",
            "kind": "Ruleset",
            "version": "1.0",
            "attributes": [
                { "name": "criticality", "values": ["High", "Low"] }
            ],
            "rules": [
                {
                    "id": "critical",
                    "when": [{ "attribute": "criticality", "op": "=", "value": "High" }],
                    "then": { "outcome": { "label": "CBM", "rationale": "monitor it" } }
                },
                {
                    "id": "fallback",
                    "then": { "reject": { "reason": "nothing authored" } }
                }
            ]
        })
    }

    #[test]
    fn parses_valid_document() {
        let rs = from_interchange(&sample()).unwrap();
        assert_eq!(rs.id, "pumps");
        assert_eq!(rs.attributes[0].values, vec!["High", "Low"]);
        assert_eq!(rs.rules.len(), 2);
        assert_eq!(rs.rules[0].when[0].op, OpSpec::Eq);
        assert!(rs.rules[1].when.is_empty());
        match &rs.rules[1].then {
            ConsequenceSpec::Reject(r) => assert_eq!(r.reason, "nothing authored"),
            other => panic!("expected reject, got {:?}", other),
        }
    }

    #[test]
    fn not_equal_operator_parses() {
        let mut doc = sample();
        doc["rules"][0]["when"][0]["op"] = json!("!=");
        let rs = from_interchange(&doc).unwrap();
        assert_eq!(rs.rules[0].when[0].op, OpSpec::NotEq);
    }

    #[test]
    fn missing_rules_field() {
        let mut doc = sample();
        doc.as_object_mut().unwrap().remove("rules");
        assert_eq!(
            from_interchange(&doc),
            Err(InterchangeError::MissingField {
                field: "rules".to_string()
            })
        );
    }

    #[test]
    fn wrong_kind_rejected() {
        let mut doc = sample();
        doc["kind"] = json!("Bundle");
        assert_eq!(
            from_interchange(&doc),
            Err(InterchangeError::WrongKind {
                kind: "Bundle".to_string()
            })
        );
    }

    #[test]
    fn unsupported_version_rejected() {
        let mut doc = sample();
        doc["version"] = json!("2.0");
        assert!(matches!(
            from_interchange(&doc),
            Err(InterchangeError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn unknown_operator_is_invalid_document() {
        let mut doc = sample();
        doc["rules"][0]["when"][0]["op"] = json!("<");
        assert!(matches!(
            from_interchange(&doc),
            Err(InterchangeError::InvalidDocument(_))
        ));
    }

    #[test]
    fn non_object_rejected() {
        assert!(matches!(
            from_interchange(&json!([1, 2])),
            Err(InterchangeError::InvalidDocument(_))
        ));
    }

    #[test]
    fn output_omits_empty_optionals() {
        let rs = from_interchange(&sample()).unwrap();
        let out = to_interchange(&rs);
        assert!(out.get("title").is_none());
        assert!(out["rules"][0]["then"]["outcome"].get("detail").is_none());
        assert_eq!(out["rules"][0]["when"][0]["op"], "=");
        assert_eq!(from_interchange(&out).unwrap(), rs);
    }
}
