//! First-match rule evaluation.
//!
//! Rules are checked in declaration order and the first rule whose
//! predicate holds decides the result. There is no scoring: a broad
//! early rule beats a more specific later one. Because every ruleset
//! ends with a universal rule, a validated fact set always matches
//! exactly one rule.

use serde::Serialize;

use crate::assemble::check_facts;
use crate::predicate::eval_pred;
use crate::provenance::{DecisionProvenance, ProvenanceCollector};
use crate::types::{Consequence, EvalError, FactSet, InvalidInput, Outcome, Ruleset};

/// The result of evaluating a ruleset: the authored outcome plus how it
/// was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub outcome: Outcome,
    pub provenance: DecisionProvenance,
}

/// Evaluate `facts` against `ruleset`, returning the first matching
/// rule's outcome.
///
/// Fails with `InvalidInput` when:
/// 1. an attribute tested by any rule is absent from `facts`
/// 2. a fact names an undeclared attribute or an out-of-domain value
/// 3. the matching rule is a reject rule (no authored answer)
pub fn evaluate(ruleset: &Ruleset, facts: &FactSet) -> Result<Decision, EvalError> {
    check_facts(ruleset, facts)?;

    let mut collector = ProvenanceCollector::new();

    for (position, rule) in ruleset.rules().iter().enumerate() {
        collector.record_rule();
        if !eval_pred(&rule.when, facts, &mut collector)? {
            continue;
        }

        tracing::debug!(
            ruleset = ruleset.id(),
            rule = %rule.id,
            position,
            "rule matched"
        );

        return match &rule.then {
            Consequence::Outcome(outcome) => Ok(Decision {
                outcome: outcome.clone(),
                provenance: collector.into_provenance(
                    ruleset.id().to_string(),
                    rule.id.clone(),
                    position,
                ),
            }),
            Consequence::Reject { reason } => Err(InvalidInput::Unauthored {
                rule_id: rule.id.clone(),
                key: describe_key(facts),
                reason: reason.clone(),
            }
            .into()),
        };
    }

    // Unreachable for a validated ruleset: the last rule is universal.
    Err(InvalidInput::Unauthored {
        rule_id: String::new(),
        key: describe_key(facts),
        reason: format!("no rule in '{}' matched", ruleset.id()),
    }
    .into())
}

/// Render a fact set as `a=x, b=y` for error messages.
fn describe_key(facts: &FactSet) -> String {
    let parts: Vec<String> = facts.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("({})", parts.join(", "))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
