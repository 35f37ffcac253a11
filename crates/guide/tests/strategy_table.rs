//! Exhaustive checks of the built-in strategy table.

use std::collections::BTreeMap;

use upkeep_guide::strategy::{
    CONDITION_BASED, PREVENTIVE, RELIABILITY_CENTERED, RUN_TO_FAILURE, TIME_BASED,
};
use upkeep_guide::{
    CostLevel, Criticality, Environment, FailureHistory, Guide, StrategyInputs,
};

#[test]
fn every_input_tuple_gets_a_recommendation() {
    let guide = Guide::load().unwrap();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for inputs in StrategyInputs::all() {
        let d = guide.recommend(&inputs).unwrap();
        *counts.entry(d.outcome.label).or_default() += 1;
    }
    assert_eq!(counts.values().sum::<usize>(), 243);
    // Low + Rare: 3 environments x 9 cost pairs
    assert_eq!(counts[RUN_TO_FAILURE], 27);
    // High + Harsh + (Frequent | Occasional): 2 x 9
    assert_eq!(counts[CONDITION_BASED], 18);
    // Medium + Frequent: 3 x 9
    assert_eq!(counts[TIME_BASED], 27);
    // High + both costs High, minus the tuples CBM already took
    // (Harsh with Frequent/Occasional): 9 - 2
    assert_eq!(counts[RELIABILITY_CENTERED], 7);
    assert_eq!(counts[PREVENTIVE], 243 - 27 - 18 - 27 - 7);
}

#[test]
fn recommendation_matches_manual_rule_order() {
    let guide = Guide::load().unwrap();
    for i in StrategyInputs::all() {
        let expected = if i.criticality == Criticality::Low
            && i.failure_history == FailureHistory::Rare
        {
            RUN_TO_FAILURE
        } else if i.criticality == Criticality::High
            && i.environment == Environment::Harsh
            && i.failure_history != FailureHistory::Rare
        {
            CONDITION_BASED
        } else if i.criticality == Criticality::Medium
            && i.failure_history == FailureHistory::Frequent
        {
            TIME_BASED
        } else if i.criticality == Criticality::High
            && i.downtime_cost == CostLevel::High
            && i.maintenance_cost == CostLevel::High
        {
            RELIABILITY_CENTERED
        } else {
            PREVENTIVE
        };
        assert_eq!(guide.recommend(&i).unwrap().outcome.label, expected, "{:?}", i);
    }
}

#[test]
fn sample_scenarios() {
    use CostLevel as C;
    use Criticality::*;
    use Environment::*;
    use FailureHistory::*;

    let guide = Guide::load().unwrap();
    let cases = [
        ((Low, Normal, Rare, C::Low, C::Low), RUN_TO_FAILURE),
        ((High, Harsh, Frequent, C::High, C::High), CONDITION_BASED),
        ((Medium, Clean, Frequent, C::Low, C::Low), TIME_BASED),
        ((Low, Clean, Occasional, C::Low, C::Low), PREVENTIVE),
    ];
    for ((criticality, environment, failure_history, maintenance_cost, downtime_cost), label) in
        cases
    {
        let inputs = StrategyInputs {
            criticality,
            environment,
            failure_history,
            maintenance_cost,
            downtime_cost,
        };
        assert_eq!(guide.recommend(&inputs).unwrap().outcome.label, label, "{:?}", inputs);
    }
}

#[test]
fn provenance_names_the_matching_rule() {
    let guide = Guide::load().unwrap();
    let d = guide
        .recommend(&StrategyInputs {
            criticality: Criticality::Medium,
            environment: Environment::Harsh,
            failure_history: FailureHistory::Frequent,
            maintenance_cost: CostLevel::Low,
            downtime_cost: CostLevel::Low,
        })
        .unwrap();
    assert_eq!(d.provenance.ruleset, "strategy");
    assert_eq!(d.provenance.rule_id, "time_based");
    assert_eq!(d.provenance.position, 2);
}

#[test]
fn misspelled_value_is_rejected_not_defaulted() {
    let guide = Guide::load().unwrap();
    let mut facts = StrategyInputs {
        criticality: Criticality::Low,
        environment: Environment::Clean,
        failure_history: FailureHistory::Rare,
        maintenance_cost: CostLevel::Low,
        downtime_cost: CostLevel::Low,
    }
    .to_facts();
    facts.insert("failureHistory", "rare");
    assert!(guide.evaluate_strategy(&facts).unwrap_err().is_invalid_input());
}
