//! upkeep-interchange: JSON interchange format for decision tables.
//!
//! Provides typed structs for a serialized ruleset (attributes, rules,
//! tests, consequences) and a single `from_interchange()` entry point
//! that checks the document envelope and deserializes it into an
//! `InterchangeRuleset`.
//!
//! This crate only describes the shape of the document. Semantic checks
//! (fallback placement, unreachable rules, attribute domains) belong to
//! upkeep-eval, which converts these types into a validated `Ruleset`.

pub mod deserialize;
pub mod types;

pub use deserialize::{from_interchange, to_interchange, InterchangeError};
pub use types::*;
