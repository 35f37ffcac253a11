//! Typed structs representing the ruleset interchange JSON.
//!
//! Field names match the JSON document one to one. Optional fields are
//! skipped on output so exported documents stay minimal.

use serde::{Deserialize, Serialize};

/// Document kind marker expected in the `kind` field.
pub const RULESET_KIND: &str = "Ruleset";

/// Interchange format version written by this crate.
pub const RULESET_VERSION: &str = "1.0";

/// Top-level interchange document for a single decision table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterchangeRuleset {
    /// Ruleset identifier (e.g. "strategy").
    pub id: String,
    /// Always "Ruleset".
    pub kind: String,
    /// Interchange format version (e.g. "1.0").
    pub version: String,
    /// Human readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Declared attributes, in input order.
    pub attributes: Vec<AttributeSpec>,
    /// Rules, in evaluation order.
    pub rules: Vec<RuleSpec>,
}

/// A categorical attribute and its finite domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: String,
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A rule: a conjunction of tests and what to return when they all hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSpec {
    pub id: String,
    /// Empty means "always matches".
    #[serde(default)]
    pub when: Vec<TestSpec>,
    pub then: ConsequenceSpec,
}

/// A single attribute comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestSpec {
    pub attribute: String,
    pub op: OpSpec,
    pub value: String,
}

/// Comparison operator of a test.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OpSpec {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
}

/// What a matching rule yields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsequenceSpec {
    Outcome(OutcomeSpec),
    Reject(RejectSpec),
}

/// An authored outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeSpec {
    pub label: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Marks input that has no authored answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectSpec {
    pub reason: String,
}
