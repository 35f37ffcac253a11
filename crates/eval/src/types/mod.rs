//! Core types for the decision table evaluator.
//!
//! These types are DISTINCT from upkeep-interchange types. Interchange
//! structs describe the JSON document; the types here are the validated
//! in-memory form that the evaluator runs against.

pub mod fact;
pub mod ruleset;

use std::fmt;

use serde::Serialize;

pub use fact::{AttributeDecl, FactSet, Schema};
pub use ruleset::{Consequence, Outcome, Rule, Ruleset};

// ──────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────

/// A queried fact tuple or lookup key falls outside what the ruleset
/// declares or has authored. Recoverable: callers show "no guidance
/// available" for these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// A predicate names an attribute that was not supplied.
    #[error("missing attribute: {attribute}")]
    MissingAttribute { attribute: String },

    /// A fact was supplied for an attribute the ruleset does not declare.
    #[error("unknown attribute: {attribute}")]
    UnknownAttribute { attribute: String },

    /// A fact value is not in the attribute's declared domain.
    #[error("invalid value '{value}' for attribute '{attribute}', valid: {allowed:?}")]
    OutOfDomain {
        attribute: String,
        value: String,
        allowed: Vec<String>,
    },

    /// The fact tuple reached a reject rule: no authored answer exists.
    #[error("no authored entry for {key} (rule '{rule_id}'): {reason}")]
    Unauthored {
        rule_id: String,
        key: String,
        reason: String,
    },
}

/// Construction-time defect in authored rule data. Detected once when a
/// ruleset is built, never at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRuleset {
    #[error("ruleset '{ruleset}' has no rules")]
    Empty { ruleset: String },

    /// The last rule is not the universal "don't care" fallback.
    #[error("ruleset '{ruleset}' does not end with a catch-all rule (last rule: '{last_rule}')")]
    MissingFallback { ruleset: String, last_rule: String },

    /// A universal rule appears before the end, shadowing every later rule.
    #[error("ruleset '{ruleset}': catch-all rule '{rule_id}' at position {position} makes later rules unreachable")]
    UnreachableRule {
        ruleset: String,
        rule_id: String,
        position: usize,
    },

    #[error("ruleset '{ruleset}': duplicate rule id '{rule_id}'")]
    DuplicateRuleId { ruleset: String, rule_id: String },

    #[error("ruleset '{ruleset}': rule '{rule_id}' tests undeclared attribute '{attribute}'")]
    UndeclaredAttribute {
        ruleset: String,
        rule_id: String,
        attribute: String,
    },

    #[error("ruleset '{ruleset}': rule '{rule_id}' compares '{attribute}' against '{value}', which is outside its domain")]
    ValueOutOfDomain {
        ruleset: String,
        rule_id: String,
        attribute: String,
        value: String,
    },

    #[error("ruleset '{ruleset}': attribute '{attribute}' declared more than once")]
    DuplicateAttribute { ruleset: String, attribute: String },

    #[error("ruleset '{ruleset}': attribute '{attribute}' has an empty domain")]
    EmptyDomain { ruleset: String, attribute: String },
}

/// Errors that can occur while building or evaluating a ruleset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("malformed ruleset: {0}")]
    MalformedRuleset(#[from] MalformedRuleset),

    /// Error reading an interchange document or a facts object.
    #[error("deserialization error: {message}")]
    DeserializeError { message: String },
}

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    MalformedRuleset,
    Deserialize,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::InvalidInput(_) => ErrorKind::InvalidInput,
            EvalError::MalformedRuleset(_) => ErrorKind::MalformedRuleset,
            EvalError::DeserializeError { .. } => ErrorKind::Deserialize,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

impl From<upkeep_interchange::InterchangeError> for EvalError {
    fn from(e: upkeep_interchange::InterchangeError) -> Self {
        EvalError::DeserializeError {
            message: e.to_string(),
        }
    }
}

// ──────────────────────────────────────────────
// Predicates
// ──────────────────────────────────────────────

/// Comparison applied by a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    NotEq,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Eq => write!(f, "="),
            Comparator::NotEq => write!(f, "!="),
        }
    }
}

/// `attribute <op> value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    pub attribute: String,
    pub op: Comparator,
    pub value: String,
}

impl Test {
    pub fn eq(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Test {
            attribute: attribute.into(),
            op: Comparator::Eq,
            value: value.into(),
        }
    }

    pub fn not_eq(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Test {
            attribute: attribute.into(),
            op: Comparator::NotEq,
            value: value.into(),
        }
    }
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.op, self.value)
    }
}

/// Conjunction of tests. Attributes not mentioned are "don't care"; an
/// empty predicate always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate(pub Vec<Test>);

impl Predicate {
    /// The universal predicate.
    pub fn always() -> Self {
        Predicate(Vec::new())
    }

    pub fn all(tests: Vec<Test>) -> Self {
        Predicate(tests)
    }

    pub fn is_universal(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tests(&self) -> &[Test] {
        &self.0
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "always");
        }
        let parts: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", parts.join(" and "))
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_classification() {
        let e: EvalError = InvalidInput::MissingAttribute {
            attribute: "system".to_string(),
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
        assert!(e.is_invalid_input());

        let e: EvalError = MalformedRuleset::Empty {
            ruleset: "x".to_string(),
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::MalformedRuleset);
        assert!(!e.is_invalid_input());
    }

    #[test]
    fn error_messages() {
        let e = EvalError::from(InvalidInput::OutOfDomain {
            attribute: "criticality".to_string(),
            value: "Extreme".to_string(),
            allowed: vec!["High".to_string(), "Low".to_string()],
        });
        assert_eq!(
            e.to_string(),
            "invalid input: invalid value 'Extreme' for attribute 'criticality', valid: [\"High\", \"Low\"]"
        );

        let e = EvalError::from(MalformedRuleset::MissingFallback {
            ruleset: "strategy".to_string(),
            last_rule: "rcm".to_string(),
        });
        assert!(e.to_string().contains("does not end with a catch-all"));
    }

    #[test]
    fn predicate_display() {
        assert_eq!(Predicate::always().to_string(), "always");
        let p = Predicate::all(vec![
            Test::eq("criticality", "High"),
            Test::not_eq("failureHistory", "Rare"),
        ]);
        assert_eq!(p.to_string(), "criticality = High and failureHistory != Rare");
        assert!(!p.is_universal());
    }

    #[test]
    fn interchange_error_maps_to_deserialize() {
        let e: EvalError = upkeep_interchange::InterchangeError::MissingField {
            field: "rules".to_string(),
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::Deserialize);
    }
}
