use std::process;

use crate::{load_guide, manifest, print_json, report_error, BuiltinRuleset, OutputFormat};

pub(crate) fn cmd_export(
    which: BuiltinRuleset,
    with_manifest: bool,
    output: OutputFormat,
    quiet: bool,
) {
    let guide = load_guide(output, quiet);
    let Some(ruleset) = guide.ruleset(which.id()) else {
        report_error(&format!("error: unknown ruleset '{}'", which.id()), output, quiet);
        process::exit(1);
    };

    let doc = match serde_json::to_value(ruleset.to_interchange()) {
        Ok(v) => v,
        Err(e) => {
            report_error(&format!("serialization error: {}", e), output, quiet);
            process::exit(1);
        }
    };
    let doc = if with_manifest {
        manifest::build_manifest(doc)
    } else {
        doc
    };
    // Exports are JSON regardless of --output.
    print_json(&doc);
}
