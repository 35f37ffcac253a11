//! Authored maintenance engineering content built on the Upkeep
//! decision table evaluator.
//!
//! The two decision tables (strategy recommendation and root-cause
//! diagnosis) are ordinary [`Ruleset`]s, built and validated once by
//! [`Guide::load`]. The quiz, KPI calculator and fishbone builder are
//! plain computations that do not need the rule engine.

/// Declares a closed categorical enum whose variants map to fixed
/// display labels. The labels double as fact values.
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in authored display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Look a value up by its display label.
            pub fn from_label(label: &str) -> Option<$name> {
                Self::ALL.iter().copied().find(|v| v.as_str() == label)
            }

            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod diagnosis;
pub mod fishbone;
pub mod kpi;
pub mod quiz;
pub mod strategy;

use upkeep_eval::{evaluate, Decision, EvalError, FactSet, Ruleset};

pub use diagnosis::{Symptom, System};
pub use fishbone::{Category, Fishbone};
pub use kpi::{KpiInputs, KpiReport};
pub use quiz::{Level, Question, QuizError, QuizReport};
pub use strategy::{Criticality, CostLevel, Environment, FailureHistory, StrategyInputs};

/// Identifier of the built-in strategy ruleset.
pub const STRATEGY: &str = "strategy";
/// Identifier of the built-in diagnosis ruleset.
pub const DIAGNOSIS: &str = "diagnosis";

/// The built-in decision tables, validated and ready to evaluate.
#[derive(Debug, Clone)]
pub struct Guide {
    strategy: Ruleset,
    diagnosis: Ruleset,
}

impl Guide {
    /// Build and validate both built-in rulesets.
    ///
    /// Failure here means the authored content itself is malformed;
    /// callers treat it as fatal.
    pub fn load() -> Result<Guide, EvalError> {
        let strategy = strategy::ruleset()?;
        let diagnosis = diagnosis::ruleset(diagnosis::ENTRIES)?;
        tracing::debug!(
            strategy_rules = strategy.rules().len(),
            diagnosis_rules = diagnosis.rules().len(),
            "guide loaded"
        );
        Ok(Guide {
            strategy,
            diagnosis,
        })
    }

    pub fn strategy(&self) -> &Ruleset {
        &self.strategy
    }

    pub fn diagnosis(&self) -> &Ruleset {
        &self.diagnosis
    }

    /// Look up a built-in ruleset by id.
    pub fn ruleset(&self, id: &str) -> Option<&Ruleset> {
        match id {
            STRATEGY => Some(&self.strategy),
            DIAGNOSIS => Some(&self.diagnosis),
            _ => None,
        }
    }

    /// Evaluate raw strategy facts (attribute name to label).
    pub fn evaluate_strategy(&self, facts: &FactSet) -> Result<Decision, EvalError> {
        evaluate(&self.strategy, facts)
    }

    /// Recommend a strategy for typed inputs.
    pub fn recommend(&self, inputs: &StrategyInputs) -> Result<Decision, EvalError> {
        self.evaluate_strategy(&inputs.to_facts())
    }

    /// Diagnose a system/symptom pair given as display labels.
    ///
    /// Unknown labels surface as `InvalidInput::OutOfDomain`.
    pub fn evaluate_diagnosis(&self, system: &str, symptom: &str) -> Result<Decision, EvalError> {
        let facts = FactSet::new()
            .with(diagnosis::SYSTEM, system)
            .with(diagnosis::SYMPTOM, symptom);
        evaluate(&self.diagnosis, &facts)
    }

    pub fn diagnose(&self, system: System, symptom: Symptom) -> Result<Decision, EvalError> {
        self.evaluate_diagnosis(system.as_str(), symptom.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_both_tables() {
        let guide = Guide::load().unwrap();
        assert_eq!(guide.strategy().id(), STRATEGY);
        assert_eq!(guide.diagnosis().id(), DIAGNOSIS);
        assert!(guide.ruleset("strategy").is_some());
        assert!(guide.ruleset("diagnosis").is_some());
        assert!(guide.ruleset("fmea").is_none());
    }

    #[test]
    fn categorical_labels_round_trip() {
        for s in System::ALL {
            assert_eq!(System::from_label(s.as_str()), Some(*s));
        }
        assert_eq!(System::from_label("Compressor"), None);
        assert_eq!(Symptom::LowOutput.to_string(), "Low Output");
        assert_eq!(System::PumpMotor.to_string(), "Pump/Motor");
    }

    #[test]
    fn diagnose_by_label_and_by_type_agree() {
        let guide = Guide::load().unwrap();
        let by_label = guide.evaluate_diagnosis("Boiler", "Leakage").unwrap();
        let by_type = guide.diagnose(System::Boiler, Symptom::Leakage).unwrap();
        assert_eq!(by_label, by_type);
    }

    #[test]
    fn unknown_system_label_is_invalid_input() {
        let guide = Guide::load().unwrap();
        let err = guide.evaluate_diagnosis("Compressor", "Noise").unwrap_err();
        assert!(err.is_invalid_input());
    }
}
