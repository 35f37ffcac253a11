use upkeep_guide::diagnosis;

use crate::{exit_with_eval_error, load_guide, print_json, OutputFormat};

pub(crate) fn cmd_diagnose(system: &str, symptom: &str, output: OutputFormat, quiet: bool) {
    let guide = load_guide(output, quiet);
    let decision = match guide.evaluate_diagnosis(system, symptom) {
        Ok(d) => d,
        Err(e) => exit_with_eval_error(&e, output, quiet),
    };

    match output {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "system": system,
                "symptom": symptom,
                "applicable": !diagnosis::is_not_applicable(&decision.outcome),
                "causes": diagnosis::causes(&decision.outcome),
                "actions": diagnosis::actions(&decision.outcome),
                "provenance": decision.provenance,
            });
            print_json(&json);
        }
        OutputFormat::Text => {
            if diagnosis::is_not_applicable(&decision.outcome) {
                println!("{}", decision.outcome.rationale);
                return;
            }
            println!("{}", decision.outcome.label);
            println!();
            println!("Possible Causes:");
            for cause in diagnosis::causes(&decision.outcome) {
                println!("  - {}", cause);
            }
            println!();
            println!("Actions:");
            for action in diagnosis::actions(&decision.outcome) {
                println!("  - {}", action);
            }
        }
    }
}
