use std::process;

use upkeep_guide::{Category, Fishbone};

use crate::{print_json, report_error, OutputFormat};

/// Split a `CATEGORY=TEXT` argument.
fn parse_cause(arg: &str) -> Result<(Category, &str), String> {
    let (category, text) = arg
        .split_once('=')
        .ok_or_else(|| format!("cause '{}' must look like CATEGORY=TEXT", arg))?;
    let category = Category::from_label(category.trim()).ok_or_else(|| {
        format!(
            "unknown category '{}' (expected one of: {})",
            category.trim(),
            Category::labels().join(", ")
        )
    })?;
    Ok((category, text))
}

pub(crate) fn cmd_fishbone(problem: &str, causes: &[String], output: OutputFormat, quiet: bool) {
    let mut fishbone = Fishbone::new(problem);
    for arg in causes {
        match parse_cause(arg) {
            Ok((category, text)) => fishbone.add_causes(category, text),
            Err(msg) => {
                report_error(&format!("error: {}", msg), output, quiet);
                process::exit(1);
            }
        }
    }

    match output {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "problem": fishbone.problem(),
                "nodes": fishbone.nodes(),
                "edges": fishbone.edges(),
                "dot": fishbone.to_dot(),
            });
            print_json(&json);
        }
        OutputFormat::Text => print!("{}", fishbone.to_dot()),
    }
}
