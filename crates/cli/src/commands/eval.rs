use std::path::Path;
use std::process;

use upkeep_eval::{assemble::assemble_facts, evaluate, Ruleset};

use crate::{exit_with_eval_error, load_guide, print_json, read_json, report_error, OutputFormat};

/// Resolve the ruleset argument: an existing file wins, otherwise a
/// built-in id.
fn load_ruleset(path: &Path, output: OutputFormat, quiet: bool) -> Ruleset {
    if !path.exists() {
        let guide = load_guide(output, quiet);
        if let Some(rs) = path.to_str().and_then(|id| guide.ruleset(id)) {
            return rs.clone();
        }
        let msg = format!(
            "error: ruleset file not found and not a built-in ruleset: {}",
            path.display()
        );
        report_error(&msg, output, quiet);
        process::exit(1);
    }

    let doc = read_json(path, "ruleset", output, quiet);
    let doc = if doc.get("etag").is_some() {
        match crate::manifest::open_manifest(&doc) {
            Ok(inner) => inner.clone(),
            Err(msg) => {
                report_error(&format!("error: {}", msg), output, quiet);
                process::exit(1);
            }
        }
    } else {
        doc
    };
    match Ruleset::from_json(&doc) {
        Ok(rs) => rs,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

pub(crate) fn cmd_eval(ruleset_path: &Path, facts_path: &Path, output: OutputFormat, quiet: bool) {
    let ruleset = load_ruleset(ruleset_path, output, quiet);
    let facts_json = read_json(facts_path, "facts", output, quiet);

    let decision = match assemble_facts(&ruleset, &facts_json)
        .and_then(|facts| evaluate(&ruleset, &facts))
    {
        Ok(d) => d,
        Err(e) => exit_with_eval_error(&e, output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&decision),
        OutputFormat::Text => {
            println!("{}", decision.outcome.label);
            println!("{}", decision.outcome.rationale);
            if let Some(detail) = &decision.outcome.detail {
                println!("{}", detail);
            }
            if !quiet {
                println!(
                    "(rule '{}' at position {} of '{}')",
                    decision.provenance.rule_id,
                    decision.provenance.position,
                    decision.provenance.ruleset
                );
            }
        }
    }
}
