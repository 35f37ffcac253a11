//! Upkeep decision table evaluator -- ordered first-match rule
//! evaluation over categorical facts, with a guaranteed fallback.
//!
//! A [`Ruleset`] is an inspectable list of (predicate, consequence)
//! pairs over a fixed attribute schema. Construction validates the
//! table once (trailing catch-all present, no unreachable rules, test
//! values inside their domains); evaluation is then a pure linear scan
//! returning the first matching rule's [`Outcome`] with provenance.

pub mod assemble;
pub mod predicate;
pub mod provenance;
pub mod rules;
pub mod types;

pub use provenance::DecisionProvenance;
pub use rules::{evaluate, Decision};
pub use types::{
    AttributeDecl, Comparator, Consequence, ErrorKind, EvalError, FactSet, InvalidInput,
    MalformedRuleset, Outcome, Predicate, Rule, Ruleset, Schema, Test,
};

/// Evaluate a ruleset given as interchange JSON against a facts JSON
/// object.
///
/// This is the entry point for rulesets that live outside the binary.
/// Built-in tables are evaluated through [`evaluate`] directly.
///
/// # Arguments
/// * `ruleset` - Ruleset interchange document (serde_json::Value)
/// * `facts` - Facts JSON object mapping attribute names to values
pub fn evaluate_json(
    ruleset: &serde_json::Value,
    facts: &serde_json::Value,
) -> Result<Decision, EvalError> {
    let ruleset = Ruleset::from_json(ruleset)?;
    let fact_set = assemble::assemble_facts(&ruleset, facts)?;
    evaluate(&ruleset, &fact_set)
}

// ──────────────────────────────────────────────
// Integration tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn bundle() -> serde_json::Value {
        serde_json::json!({
            "id": "motors",
            "kind": "Ruleset",
            "version": "1.0",
            "attributes": [
                { "name": "criticality", "values": ["High", "Low"] },
                { "name": "environment", "values": ["Harsh", "Clean"] }
            ],
            "rules": [
                {
                    "id": "harsh_critical",
                    "when": [
                        { "attribute": "criticality", "op": "=", "value": "High" },
                        { "attribute": "environment", "op": "=", "value": "Harsh" }
                    ],
                    "then": { "outcome": {
                        "label": "Condition-Based Maintenance (CBM)",
                        "rationale": "monitor",
                        "detail": "IR thermography"
                    } }
                },
                {
                    "id": "default",
                    "when": [],
                    "then": { "outcome": { "label": "Preventive Maintenance (PM)", "rationale": "schedule" } }
                }
            ]
        })
    }

    #[test]
    fn evaluate_json_end_to_end() {
        let facts = serde_json::json!({ "criticality": "High", "environment": "Harsh" });
        let d = evaluate_json(&bundle(), &facts).unwrap();
        assert_eq!(d.outcome.label, "Condition-Based Maintenance (CBM)");
        assert_eq!(d.outcome.detail.as_deref(), Some("IR thermography"));
        assert_eq!(d.provenance.ruleset, "motors");
        assert_eq!(d.provenance.rule_id, "harsh_critical");
    }

    #[test]
    fn evaluate_json_fallback() {
        let facts = serde_json::json!({ "criticality": "Low", "environment": "Harsh" });
        let d = evaluate_json(&bundle(), &facts).unwrap();
        assert_eq!(d.outcome.label, "Preventive Maintenance (PM)");
        assert_eq!(d.provenance.position, 1);
    }

    #[test]
    fn evaluate_json_invalid_value() {
        let facts = serde_json::json!({ "criticality": "Medium", "environment": "Harsh" });
        let err = evaluate_json(&bundle(), &facts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn decision_serializes_to_json() {
        let facts = serde_json::json!({ "criticality": "High", "environment": "Harsh" });
        let d = evaluate_json(&bundle(), &facts).unwrap();
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["outcome"]["label"], "Condition-Based Maintenance (CBM)");
        assert_eq!(v["provenance"]["rule_id"], "harsh_critical");
        assert_eq!(
            v["provenance"]["attributes_used"],
            serde_json::json!(["criticality", "environment"])
        );
    }
}
