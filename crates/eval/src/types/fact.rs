//! Attribute schema and fact set types for the decision table evaluator.

use std::collections::BTreeMap;

use serde::Serialize;

/// A categorical attribute with a finite, ordered domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDecl {
    pub name: String,
    pub values: Vec<String>,
    pub description: Option<String>,
}

impl AttributeDecl {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeDecl {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// The fixed attribute set of a ruleset, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema(pub Vec<AttributeDecl>);

impl Schema {
    pub fn new(attributes: Vec<AttributeDecl>) -> Self {
        Schema(attributes)
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDecl> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn attributes(&self) -> &[AttributeDecl] {
        &self.0
    }

    /// Number of distinct fact tuples the schema admits.
    pub fn combinations(&self) -> usize {
        self.0.iter().map(|a| a.values.len()).product()
    }
}

/// A set of categorical fact values keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FactSet(pub BTreeMap<String, String>);

impl FactSet {
    pub fn new() -> Self {
        FactSet(BTreeMap::new())
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.0.insert(attribute.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FactSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        FactSet(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_lookup_and_combinations() {
        let schema = Schema::new(vec![
            AttributeDecl::new("criticality", ["High", "Medium", "Low"]),
            AttributeDecl::new("environment", ["Harsh", "Normal", "Clean"]),
        ]);
        assert_eq!(schema.combinations(), 9);
        assert!(schema.get("criticality").unwrap().allows("Medium"));
        assert!(!schema.get("criticality").unwrap().allows("medium"));
        assert!(schema.get("downtimeCost").is_none());
    }

    #[test]
    fn fact_set_from_pairs() {
        let facts: FactSet = [("system", "Boiler"), ("symptom", "Noise")]
            .into_iter()
            .collect();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts.get("system"), Some("Boiler"));
        assert_eq!(facts.get("missing"), None);
    }

    #[test]
    fn later_insert_replaces_value() {
        let facts = FactSet::new()
            .with("criticality", "High")
            .with("criticality", "Low");
        assert_eq!(facts.get("criticality"), Some("Low"));
        assert_eq!(facts.len(), 1);
    }
}
