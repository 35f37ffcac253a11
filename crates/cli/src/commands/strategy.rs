use upkeep_eval::FactSet;
use upkeep_guide::strategy::{
    CRITICALITY, DOWNTIME_COST, ENVIRONMENT, FAILURE_HISTORY, MAINTENANCE_COST,
};

use crate::{exit_with_eval_error, load_guide, print_json, OutputFormat};

/// Raw strategy answers as typed on the command line.
pub(crate) struct StrategyArgs {
    pub criticality: String,
    pub environment: String,
    pub failure_history: String,
    pub maintenance_cost: String,
    pub downtime_cost: String,
}

impl StrategyArgs {
    fn to_facts(&self) -> FactSet {
        FactSet::new()
            .with(CRITICALITY, self.criticality.as_str())
            .with(ENVIRONMENT, self.environment.as_str())
            .with(FAILURE_HISTORY, self.failure_history.as_str())
            .with(MAINTENANCE_COST, self.maintenance_cost.as_str())
            .with(DOWNTIME_COST, self.downtime_cost.as_str())
    }
}

pub(crate) fn cmd_strategy(args: &StrategyArgs, output: OutputFormat, quiet: bool) {
    let guide = load_guide(output, quiet);
    let decision = match guide.evaluate_strategy(&args.to_facts()) {
        Ok(d) => d,
        Err(e) => exit_with_eval_error(&e, output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&decision),
        OutputFormat::Text => {
            println!("Recommended Strategy: {}", decision.outcome.label);
            println!("Why: {}", decision.outcome.rationale);
            if let Some(examples) = &decision.outcome.detail {
                println!("Examples: {}", examples);
            }
        }
    }
}
