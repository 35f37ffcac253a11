//! Provenance for decision table results.
//!
//! Each decision records which rule produced it, where that rule sits in
//! the table, and which attributes were read while scanning up to it.

use serde::Serialize;

/// Provenance record for a single decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionProvenance {
    /// The ruleset the decision came from.
    pub ruleset: String,
    /// The rule id that matched.
    pub rule_id: String,
    /// Zero-based position of the matching rule.
    pub position: usize,
    /// Number of rules whose predicates were tested (including the match).
    pub rules_tested: usize,
    /// Attributes that were read during predicate evaluation.
    pub attributes_used: Vec<String>,
}

/// Collector that tracks attribute reads during predicate evaluation,
/// for building provenance.
#[derive(Debug, Clone, Default)]
pub struct ProvenanceCollector {
    pub attributes_used: Vec<String>,
    pub rules_tested: usize,
}

impl ProvenanceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attribute read.
    pub fn record_attribute(&mut self, attribute: &str) {
        if !self.attributes_used.iter().any(|a| a == attribute) {
            self.attributes_used.push(attribute.to_string());
        }
    }

    /// Record that a rule's predicate was evaluated.
    pub fn record_rule(&mut self) {
        self.rules_tested += 1;
    }

    /// Finalize into a DecisionProvenance.
    pub fn into_provenance(
        self,
        ruleset: String,
        rule_id: String,
        position: usize,
    ) -> DecisionProvenance {
        DecisionProvenance {
            ruleset,
            rule_id,
            position,
            rules_tested: self.rules_tested,
            attributes_used: self.attributes_used,
        }
    }
}
