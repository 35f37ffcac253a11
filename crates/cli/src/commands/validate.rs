use std::path::Path;
use std::process;

use upkeep_eval::Ruleset;

use crate::{manifest, read_json, report_error, OutputFormat};

static RULESET_SCHEMA_STR: &str = include_str!("../../../../docs/ruleset-schema.json");

/// Schema violations first; a schema-valid document is then built as a
/// ruleset so totality and reachability problems are reported too.
pub(crate) fn cmd_validate(path: &Path, output: OutputFormat, quiet: bool) {
    let schema: serde_json::Value = match serde_json::from_str(RULESET_SCHEMA_STR) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("internal error: failed to parse embedded ruleset schema: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    let validator = match jsonschema::validator_for(&schema) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("internal error: failed to compile schema: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let doc = read_json(path, "ruleset", output, quiet);

    // Auto-detect manifest documents via etag field presence
    let is_manifest = doc.get("etag").is_some();
    let doc_type = if is_manifest { "manifest" } else { "ruleset" };
    let ruleset_doc = if is_manifest {
        match manifest::open_manifest(&doc) {
            Ok(inner) => inner,
            Err(msg) => fail(doc_type, vec![msg], output, quiet),
        }
    } else {
        &doc
    };

    let errors: Vec<String> = validator
        .iter_errors(ruleset_doc)
        .map(|e| format!("{}", e))
        .collect();
    if !errors.is_empty() {
        fail(doc_type, errors, output, quiet);
    }

    if let Err(e) = Ruleset::from_json(ruleset_doc) {
        fail(doc_type, vec![e.to_string()], output, quiet);
    }

    if !quiet {
        match output {
            OutputFormat::Text => println!("valid {}", doc_type),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "valid": true, "type": doc_type }));
            }
        }
    }
}

fn fail(doc_type: &str, errors: Vec<String>, output: OutputFormat, quiet: bool) -> ! {
    match output {
        OutputFormat::Text => {
            if !quiet {
                eprintln!("invalid {}", doc_type);
                for err in &errors {
                    eprintln!("  - {}", err);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "valid": false,
                "type": doc_type,
                "errors": errors
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
    }
    process::exit(1);
}
