//! Predicate evaluation over a fact set.
//!
//! A predicate is a flat conjunction of equality / inequality tests.
//! Evaluation short-circuits on the first failing test.

use crate::provenance::ProvenanceCollector;
use crate::types::{Comparator, FactSet, InvalidInput, Predicate, Test};

/// Evaluate a single test against the facts.
pub fn eval_test(
    test: &Test,
    facts: &FactSet,
    collector: &mut ProvenanceCollector,
) -> Result<bool, InvalidInput> {
    collector.record_attribute(&test.attribute);
    let actual = facts
        .get(&test.attribute)
        .ok_or_else(|| InvalidInput::MissingAttribute {
            attribute: test.attribute.clone(),
        })?;
    Ok(match test.op {
        Comparator::Eq => actual == test.value,
        Comparator::NotEq => actual != test.value,
    })
}

/// Evaluate a conjunction. The universal predicate always holds.
pub fn eval_pred(
    pred: &Predicate,
    facts: &FactSet,
    collector: &mut ProvenanceCollector,
) -> Result<bool, InvalidInput> {
    for test in pred.tests() {
        if !eval_test(test, facts, collector)? {
            // Short-circuit: one false test fails the conjunction
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> FactSet {
        FactSet::new()
            .with("criticality", "High")
            .with("environment", "Harsh")
            .with("failureHistory", "Occasional")
    }

    #[test]
    fn equality_test() {
        let mut c = ProvenanceCollector::new();
        assert!(eval_test(&Test::eq("criticality", "High"), &facts(), &mut c).unwrap());
        assert!(!eval_test(&Test::eq("criticality", "Low"), &facts(), &mut c).unwrap());
    }

    #[test]
    fn inequality_test() {
        let mut c = ProvenanceCollector::new();
        assert!(eval_test(&Test::not_eq("failureHistory", "Rare"), &facts(), &mut c).unwrap());
        assert!(
            !eval_test(&Test::not_eq("failureHistory", "Occasional"), &facts(), &mut c).unwrap()
        );
    }

    #[test]
    fn universal_predicate_holds_on_empty_facts() {
        let mut c = ProvenanceCollector::new();
        assert!(eval_pred(&Predicate::always(), &FactSet::new(), &mut c).unwrap());
        assert!(c.attributes_used.is_empty());
    }

    #[test]
    fn conjunction_all_true() {
        let mut c = ProvenanceCollector::new();
        let p = Predicate::all(vec![
            Test::eq("criticality", "High"),
            Test::eq("environment", "Harsh"),
            Test::not_eq("failureHistory", "Rare"),
        ]);
        assert!(eval_pred(&p, &facts(), &mut c).unwrap());
        assert_eq!(
            c.attributes_used,
            vec!["criticality", "environment", "failureHistory"]
        );
    }

    #[test]
    fn conjunction_short_circuits() {
        let mut c = ProvenanceCollector::new();
        let p = Predicate::all(vec![
            Test::eq("criticality", "Low"),
            Test::eq("downtimeCost", "High"),
        ]);
        // downtimeCost is absent but never read because the first test fails
        assert!(!eval_pred(&p, &facts(), &mut c).unwrap());
        assert_eq!(c.attributes_used, vec!["criticality"]);
    }

    #[test]
    fn missing_attribute_is_invalid_input() {
        let mut c = ProvenanceCollector::new();
        let err = eval_test(&Test::eq("downtimeCost", "High"), &facts(), &mut c).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::MissingAttribute {
                attribute: "downtimeCost".to_string()
            }
        );
    }
}
