//! FactSet assembly and domain checking.
//!
//! `assemble_facts(ruleset, facts_json)` turns a JSON object into a
//! FactSet. `check_facts(ruleset, facts)` enforces the evaluation
//! precondition:
//! - every attribute tested by some rule is present
//! - every supplied attribute is declared
//! - every supplied value is in its attribute's domain

use crate::types::{EvalError, FactSet, InvalidInput, Ruleset};

/// Assemble a FactSet from a facts JSON object (attribute -> string).
///
/// Values are checked against the ruleset schema, so a typo in a value
/// or attribute name fails here instead of silently falling through to
/// the catch-all rule.
pub fn assemble_facts(
    ruleset: &Ruleset,
    facts_json: &serde_json::Value,
) -> Result<FactSet, EvalError> {
    let facts_obj = facts_json
        .as_object()
        .ok_or_else(|| EvalError::DeserializeError {
            message: "facts must be a JSON object".to_string(),
        })?;

    let mut facts = FactSet::new();
    for (attribute, value) in facts_obj {
        let value = match value {
            serde_json::Value::String(s) => s.clone(),
            other => {
                return Err(EvalError::DeserializeError {
                    message: format!(
                        "fact '{}' must be a string, got {}",
                        attribute,
                        json_type_name(other)
                    ),
                })
            }
        };
        facts.insert(attribute.clone(), value);
    }

    check_facts(ruleset, &facts)?;
    Ok(facts)
}

/// Verify that `facts` satisfies the evaluation precondition for `ruleset`.
pub fn check_facts(ruleset: &Ruleset, facts: &FactSet) -> Result<(), InvalidInput> {
    let schema = ruleset.schema();

    for (attribute, value) in facts.iter() {
        let decl = schema
            .get(attribute)
            .ok_or_else(|| InvalidInput::UnknownAttribute {
                attribute: attribute.to_string(),
            })?;
        if !decl.allows(value) {
            return Err(InvalidInput::OutOfDomain {
                attribute: attribute.to_string(),
                value: value.to_string(),
                allowed: decl.values.clone(),
            });
        }
    }

    for attribute in ruleset.tested_attributes() {
        if facts.get(attribute).is_none() {
            return Err(InvalidInput::MissingAttribute {
                attribute: attribute.to_string(),
            });
        }
    }

    Ok(())
}

fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
