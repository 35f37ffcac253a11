use upkeep_guide::{KpiInputs, KpiReport};

use crate::{print_json, OutputFormat};

pub(crate) fn cmd_kpi(inputs: &KpiInputs, output: OutputFormat, quiet: bool) {
    let report = KpiReport::compute(inputs);
    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            let rows = report.rows();
            if rows.is_empty() && !quiet {
                eprintln!("no KPI is defined for these inputs");
            }
            for (name, value, unit) in rows {
                match unit {
                    "%" => println!("{} = {}%", name, value),
                    "$" => println!("{} = ${}", name, value),
                    _ => println!("{} = {} {}", name, value, unit),
                }
            }
        }
    }
}
