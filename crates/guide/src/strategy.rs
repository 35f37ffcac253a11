//! Maintenance strategy recommendation table.
//!
//! Five categorical inputs, five rules, first match wins. The table
//! mixes equality tests with one inequality (`failureHistory != Rare`
//! on the condition-based rule), and its last rule is the universal
//! preventive maintenance fallback, so every one of the 243 input
//! tuples gets a recommendation.

use upkeep_eval::{AttributeDecl, FactSet, MalformedRuleset, Outcome, Rule, Ruleset, Schema, Test};

pub const CRITICALITY: &str = "criticality";
pub const ENVIRONMENT: &str = "environment";
pub const FAILURE_HISTORY: &str = "failureHistory";
pub const MAINTENANCE_COST: &str = "maintenanceCost";
pub const DOWNTIME_COST: &str = "downtimeCost";

pub const RUN_TO_FAILURE: &str = "Run-to-Failure (RTF)";
pub const CONDITION_BASED: &str = "Condition-Based Maintenance (CBM)";
pub const TIME_BASED: &str = "Time-Based Maintenance (TBM)";
pub const RELIABILITY_CENTERED: &str = "Reliability-Centered Maintenance (RCM)";
pub const PREVENTIVE: &str = "Preventive Maintenance (PM)";

categorical! {
    /// Importance of the asset to safety, production, or legal compliance.
    pub enum Criticality {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

categorical! {
    /// Physical conditions around the asset.
    pub enum Environment {
        Harsh => "Harsh",
        Normal => "Normal",
        Clean => "Clean",
    }
}

categorical! {
    /// How often the asset fails.
    pub enum FailureHistory {
        Frequent => "Frequent",
        Occasional => "Occasional",
        Rare => "Rare",
    }
}

categorical! {
    /// Relative cost level, used for both maintenance and downtime cost.
    pub enum CostLevel {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

/// One fully specified strategy question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyInputs {
    pub criticality: Criticality,
    pub environment: Environment,
    pub failure_history: FailureHistory,
    pub maintenance_cost: CostLevel,
    pub downtime_cost: CostLevel,
}

impl StrategyInputs {
    pub fn to_facts(&self) -> FactSet {
        FactSet::new()
            .with(CRITICALITY, self.criticality.as_str())
            .with(ENVIRONMENT, self.environment.as_str())
            .with(FAILURE_HISTORY, self.failure_history.as_str())
            .with(MAINTENANCE_COST, self.maintenance_cost.as_str())
            .with(DOWNTIME_COST, self.downtime_cost.as_str())
    }

    /// Every combination of inputs (3^5 = 243), in display order.
    pub fn all() -> Vec<StrategyInputs> {
        let mut out = Vec::with_capacity(243);
        for &criticality in Criticality::ALL {
            for &environment in Environment::ALL {
                for &failure_history in FailureHistory::ALL {
                    for &maintenance_cost in CostLevel::ALL {
                        for &downtime_cost in CostLevel::ALL {
                            out.push(StrategyInputs {
                                criticality,
                                environment,
                                failure_history,
                                maintenance_cost,
                                downtime_cost,
                            });
                        }
                    }
                }
            }
        }
        out
    }
}

pub fn schema() -> Schema {
    Schema::new(vec![
        AttributeDecl::new(CRITICALITY, Criticality::labels()).with_description(
            "Importance of the asset to safety, production, or legal compliance.",
        ),
        AttributeDecl::new(ENVIRONMENT, Environment::labels())
            .with_description("Physical conditions around the asset."),
        AttributeDecl::new(FAILURE_HISTORY, FailureHistory::labels())
            .with_description("How often this asset fails."),
        AttributeDecl::new(MAINTENANCE_COST, CostLevel::labels()).with_description(
            "Cost to repair, including labor, tools, spares, downtime.",
        ),
        AttributeDecl::new(DOWNTIME_COST, CostLevel::labels()).with_description(
            "Cost of system unavailability in terms of production, safety, or compliance.",
        ),
    ])
}

/// Build the strategy table. Rule order is significant.
pub fn ruleset() -> Result<Ruleset, MalformedRuleset> {
    let rules = vec![
        Rule::new(
            "run_to_failure",
            vec![
                Test::eq(CRITICALITY, "Low"),
                Test::eq(FAILURE_HISTORY, "Rare"),
            ],
            Outcome::new(
                RUN_TO_FAILURE,
                "Non-critical asset with rare failures. Let it run until it fails.",
            )
            .with_detail("Small lights, backup indicators."),
        ),
        Rule::new(
            "condition_based",
            vec![
                Test::eq(CRITICALITY, "High"),
                Test::eq(ENVIRONMENT, "Harsh"),
                Test::not_eq(FAILURE_HISTORY, "Rare"),
            ],
            Outcome::new(
                CONDITION_BASED,
                "Critical asset in harsh conditions benefits from monitoring sensors.",
            )
            .with_detail("Pumps with vibration sensors, motors with IR thermography."),
        ),
        Rule::new(
            "time_based",
            vec![
                Test::eq(CRITICALITY, "Medium"),
                Test::eq(FAILURE_HISTORY, "Frequent"),
            ],
            Outcome::new(TIME_BASED, "Frequent failures warrant a routine schedule.")
                .with_detail("Monthly maintenance of air filters."),
        ),
        Rule::new(
            "reliability_centered",
            vec![
                Test::eq(CRITICALITY, "High"),
                Test::eq(DOWNTIME_COST, "High"),
                Test::eq(MAINTENANCE_COST, "High"),
            ],
            Outcome::new(
                RELIABILITY_CENTERED,
                "Critical and costly failures justify detailed RCM analysis.",
            )
            .with_detail("Turbine system, excitation panel."),
        ),
        Rule::fallback(
            "preventive",
            Outcome::new(PREVENTIVE, "Standard scheduled checks fit this scenario.")
                .with_detail("Lubrication plans, visual inspections."),
        ),
    ];

    Ok(Ruleset::new(crate::STRATEGY, schema(), rules)?
        .with_title("Maintenance Strategy Selector"))
}
