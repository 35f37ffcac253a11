//! Ruleset representation, construction-time validation and interchange
//! conversion.

use std::collections::BTreeSet;

use serde::Serialize;
use upkeep_interchange::{
    AttributeSpec, ConsequenceSpec, InterchangeRuleset, OpSpec, OutcomeSpec, RejectSpec, RuleSpec,
    TestSpec, RULESET_KIND, RULESET_VERSION,
};

use super::fact::{AttributeDecl, Schema};
use super::{Comparator, EvalError, MalformedRuleset, Predicate, Test};

// ──────────────────────────────────────────────
// Outcomes and rules
// ──────────────────────────────────────────────

/// A pre-authored result: a label, why it applies, and optional
/// examples or actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub label: String,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Outcome {
    pub fn new(label: impl Into<String>, rationale: impl Into<String>) -> Self {
        Outcome {
            label: label.into(),
            rationale: rationale.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// What a matching rule yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Consequence {
    Outcome(Outcome),
    /// No authored answer: evaluation fails with `InvalidInput::Unauthored`.
    Reject { reason: String },
}

/// An ordered element of a ruleset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: String,
    pub when: Predicate,
    pub then: Consequence,
}

impl Rule {
    pub fn new(id: impl Into<String>, tests: Vec<Test>, outcome: Outcome) -> Self {
        Rule {
            id: id.into(),
            when: Predicate::all(tests),
            then: Consequence::Outcome(outcome),
        }
    }

    /// Universal rule returning `outcome`.
    pub fn fallback(id: impl Into<String>, outcome: Outcome) -> Self {
        Rule::new(id, Vec::new(), outcome)
    }

    /// Universal rule rejecting anything that reached it.
    pub fn reject(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Rule {
            id: id.into(),
            when: Predicate::always(),
            then: Consequence::Reject {
                reason: reason.into(),
            },
        }
    }
}

// ──────────────────────────────────────────────
// Ruleset
// ──────────────────────────────────────────────

/// An immutable, validated decision table. Rules are evaluated in
/// declaration order; the last rule is always the universal fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    id: String,
    title: Option<String>,
    schema: Schema,
    rules: Vec<Rule>,
}

impl Ruleset {
    /// Build a ruleset, rejecting authored data that would break totality
    /// or leave rules unreachable.
    pub fn new(
        id: impl Into<String>,
        schema: Schema,
        rules: Vec<Rule>,
    ) -> Result<Ruleset, MalformedRuleset> {
        let ruleset = Ruleset {
            id: id.into(),
            title: None,
            schema,
            rules,
        };
        ruleset.validate()?;
        tracing::debug!(
            ruleset = %ruleset.id,
            rules = ruleset.rules.len(),
            attributes = ruleset.schema.0.len(),
            "ruleset built"
        );
        Ok(ruleset)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn validate(&self) -> Result<(), MalformedRuleset> {
        let ruleset = self.id.clone();

        let mut names = BTreeSet::new();
        for attr in self.schema.attributes() {
            if !names.insert(attr.name.as_str()) {
                return Err(MalformedRuleset::DuplicateAttribute {
                    ruleset,
                    attribute: attr.name.clone(),
                });
            }
            if attr.values.is_empty() {
                return Err(MalformedRuleset::EmptyDomain {
                    ruleset,
                    attribute: attr.name.clone(),
                });
            }
        }

        let last = match self.rules.last() {
            Some(rule) => rule,
            None => return Err(MalformedRuleset::Empty { ruleset }),
        };
        if !last.when.is_universal() {
            return Err(MalformedRuleset::MissingFallback {
                ruleset,
                last_rule: last.id.clone(),
            });
        }

        let mut ids = BTreeSet::new();
        let final_index = self.rules.len() - 1;
        for (position, rule) in self.rules.iter().enumerate() {
            if !ids.insert(rule.id.as_str()) {
                return Err(MalformedRuleset::DuplicateRuleId {
                    ruleset,
                    rule_id: rule.id.clone(),
                });
            }
            if position < final_index && rule.when.is_universal() {
                return Err(MalformedRuleset::UnreachableRule {
                    ruleset,
                    rule_id: rule.id.clone(),
                    position,
                });
            }
            for test in rule.when.tests() {
                let decl = self.schema.get(&test.attribute).ok_or_else(|| {
                    MalformedRuleset::UndeclaredAttribute {
                        ruleset: ruleset.clone(),
                        rule_id: rule.id.clone(),
                        attribute: test.attribute.clone(),
                    }
                })?;
                if !decl.allows(&test.value) {
                    return Err(MalformedRuleset::ValueOutOfDomain {
                        ruleset,
                        rule_id: rule.id.clone(),
                        attribute: test.attribute.clone(),
                        value: test.value.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Attributes referenced by at least one rule predicate, in schema order.
    pub fn tested_attributes(&self) -> Vec<&str> {
        self.schema
            .attributes()
            .iter()
            .map(|a| a.name.as_str())
            .filter(|name| {
                self.rules
                    .iter()
                    .any(|r| r.when.tests().iter().any(|t| t.attribute == *name))
            })
            .collect()
    }

    // ── Interchange ─────────────────────────────

    /// Convert an interchange document into a validated ruleset.
    pub fn from_interchange(doc: &InterchangeRuleset) -> Result<Ruleset, EvalError> {
        let schema = Schema::new(
            doc.attributes
                .iter()
                .map(|a| AttributeDecl {
                    name: a.name.clone(),
                    values: a.values.clone(),
                    description: a.description.clone(),
                })
                .collect(),
        );

        let rules = doc
            .rules
            .iter()
            .map(|r| Rule {
                id: r.id.clone(),
                when: Predicate::all(
                    r.when
                        .iter()
                        .map(|t| Test {
                            attribute: t.attribute.clone(),
                            op: match t.op {
                                OpSpec::Eq => Comparator::Eq,
                                OpSpec::NotEq => Comparator::NotEq,
                            },
                            value: t.value.clone(),
                        })
                        .collect(),
                ),
                then: match &r.then {
                    ConsequenceSpec::Outcome(o) => Consequence::Outcome(Outcome {
                        label: o.label.clone(),
                        rationale: o.rationale.clone(),
                        detail: o.detail.clone(),
                    }),
                    ConsequenceSpec::Reject(rj) => Consequence::Reject {
                        reason: rj.reason.clone(),
                    },
                },
            })
            .collect();

        let mut ruleset = Ruleset::new(doc.id.clone(), schema, rules)?;
        ruleset.title = doc.title.clone();
        Ok(ruleset)
    }

    /// Parse and validate a ruleset straight from interchange JSON.
    pub fn from_json(doc: &serde_json::Value) -> Result<Ruleset, EvalError> {
        let parsed = upkeep_interchange::from_interchange(doc)?;
        Ruleset::from_interchange(&parsed)
    }

    /// Export this ruleset as an interchange document.
    pub fn to_interchange(&self) -> InterchangeRuleset {
        InterchangeRuleset {
            id: self.id.clone(),
            kind: RULESET_KIND.to_string(),
            version: RULESET_VERSION.to_string(),
            title: self.title.clone(),
            attributes: self
                .schema
                .attributes()
                .iter()
                .map(|a| AttributeSpec {
                    name: a.name.clone(),
                    values: a.values.clone(),
                    description: a.description.clone(),
                })
                .collect(),
            rules: self
                .rules
                .iter()
                .map(|r| RuleSpec {
                    id: r.id.clone(),
                    when: r
                        .when
                        .tests()
                        .iter()
                        .map(|t| TestSpec {
                            attribute: t.attribute.clone(),
                            op: match t.op {
                                Comparator::Eq => OpSpec::Eq,
                                Comparator::NotEq => OpSpec::NotEq,
                            },
                            value: t.value.clone(),
                        })
                        .collect(),
                    then: match &r.then {
                        Consequence::Outcome(o) => ConsequenceSpec::Outcome(OutcomeSpec {
                            label: o.label.clone(),
                            rationale: o.rationale.clone(),
                            detail: o.detail.clone(),
                        }),
                        Consequence::Reject { reason } => ConsequenceSpec::Reject(RejectSpec {
                            reason: reason.clone(),
                        }),
                    },
                })
                .collect(),
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(vec![
            AttributeDecl::new("criticality", ["High", "Medium", "Low"]),
            AttributeDecl::new("failureHistory", ["Frequent", "Occasional", "Rare"]),
        ])
    }

    fn outcome(label: &str) -> Outcome {
        Outcome::new(label, format!("because {}", label))
    }

    #[test]
    fn valid_ruleset_builds() {
        let rs = Ruleset::new(
            "t",
            schema(),
            vec![
                Rule::new("rtf", vec![Test::eq("criticality", "Low")], outcome("RTF")),
                Rule::fallback("pm", outcome("PM")),
            ],
        )
        .unwrap();
        assert_eq!(rs.rules().len(), 2);
        assert_eq!(rs.tested_attributes(), vec!["criticality"]);
    }

    #[test]
    fn empty_ruleset_rejected() {
        let err = Ruleset::new("t", schema(), vec![]).unwrap_err();
        assert_eq!(
            err,
            MalformedRuleset::Empty {
                ruleset: "t".to_string()
            }
        );
    }

    #[test]
    fn missing_fallback_rejected() {
        let err = Ruleset::new(
            "t",
            schema(),
            vec![Rule::new(
                "rtf",
                vec![Test::eq("criticality", "Low")],
                outcome("RTF"),
            )],
        )
        .unwrap_err();
        assert_eq!(
            err,
            MalformedRuleset::MissingFallback {
                ruleset: "t".to_string(),
                last_rule: "rtf".to_string()
            }
        );
    }

    #[test]
    fn early_catch_all_is_unreachable_rule() {
        let err = Ruleset::new(
            "t",
            schema(),
            vec![
                Rule::fallback("early", outcome("X")),
                Rule::new("rtf", vec![Test::eq("criticality", "Low")], outcome("RTF")),
                Rule::fallback("pm", outcome("PM")),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            MalformedRuleset::UnreachableRule {
                ruleset: "t".to_string(),
                rule_id: "early".to_string(),
                position: 0
            }
        );
    }

    #[test]
    fn duplicate_rule_id_rejected() {
        let err = Ruleset::new(
            "t",
            schema(),
            vec![
                Rule::new("a", vec![Test::eq("criticality", "Low")], outcome("A")),
                Rule::new("a", vec![Test::eq("criticality", "High")], outcome("B")),
                Rule::fallback("pm", outcome("PM")),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, MalformedRuleset::DuplicateRuleId { .. }));
    }

    #[test]
    fn undeclared_attribute_rejected() {
        let err = Ruleset::new(
            "t",
            schema(),
            vec![
                Rule::new("a", vec![Test::eq("environment", "Harsh")], outcome("A")),
                Rule::fallback("pm", outcome("PM")),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MalformedRuleset::UndeclaredAttribute { ref attribute, .. }
                if attribute == "environment"
        ));
    }

    #[test]
    fn out_of_domain_test_value_rejected() {
        let err = Ruleset::new(
            "t",
            schema(),
            vec![
                Rule::new("a", vec![Test::not_eq("criticality", "Severe")], outcome("A")),
                Rule::fallback("pm", outcome("PM")),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MalformedRuleset::ValueOutOfDomain { ref value, .. } if value == "Severe"
        ));
    }

    #[test]
    fn duplicate_attribute_and_empty_domain_rejected() {
        let dup = Schema::new(vec![
            AttributeDecl::new("criticality", ["High"]),
            AttributeDecl::new("criticality", ["Low"]),
        ]);
        let err = Ruleset::new("t", dup, vec![Rule::fallback("pm", outcome("PM"))]).unwrap_err();
        assert!(matches!(err, MalformedRuleset::DuplicateAttribute { .. }));

        let empty = Schema::new(vec![AttributeDecl::new("criticality", Vec::<String>::new())]);
        let err = Ruleset::new("t", empty, vec![Rule::fallback("pm", outcome("PM"))]).unwrap_err();
        assert!(matches!(err, MalformedRuleset::EmptyDomain { .. }));
    }

    #[test]
    fn interchange_round_trip_preserves_rules() {
        let rs = Ruleset::new(
            "t",
            schema(),
            vec![
                Rule::new(
                    "cbm",
                    vec![
                        Test::eq("criticality", "High"),
                        Test::not_eq("failureHistory", "Rare"),
                    ],
                    outcome("CBM").with_detail("sensors"),
                ),
                Rule::reject("none", "nothing authored"),
            ],
        )
        .unwrap()
        .with_title("Test table");

        let doc = rs.to_interchange();
        assert_eq!(doc.kind, "Ruleset");
        assert_eq!(doc.rules[0].when[1].op, OpSpec::NotEq);
        let back = Ruleset::from_interchange(&doc).unwrap();
        assert_eq!(back, rs);
    }

    #[test]
    fn from_json_reports_malformed_ruleset() {
        let doc = serde_json::json!({
            "id": "broken",
            "kind": "Ruleset",
            "version": "1.0",
            "attributes": [{ "name": "criticality", "values": ["High", "Low"] }],
            "rules": [{
                "id": "only",
                "when": [{ "attribute": "criticality", "op": "=", "value": "High" }],
                "then": { "outcome": { "label": "CBM", "rationale": "r" } }
            }]
        });
        let err = Ruleset::from_json(&doc).unwrap_err();
        assert_eq!(err.kind(), super::super::ErrorKind::MalformedRuleset);
    }
}
