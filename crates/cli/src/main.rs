mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax).
const LOG_ENV: &str = "UPKEEP_LOG";

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Built-in rulesets that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BuiltinRuleset {
    Strategy,
    Diagnosis,
}

impl BuiltinRuleset {
    pub(crate) fn id(self) -> &'static str {
        match self {
            BuiltinRuleset::Strategy => upkeep_guide::STRATEGY,
            BuiltinRuleset::Diagnosis => upkeep_guide::DIAGNOSIS,
        }
    }
}

/// Maintenance engineering decision aids.
#[derive(Parser)]
#[command(
    name = "upkeep",
    version,
    about = "Maintenance engineering decision aids"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log rule evaluation at debug level (overrides UPKEEP_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a maintenance strategy for an asset
    Strategy {
        /// Importance of the asset to safety, production, or legal compliance
        #[arg(long, default_value = "High")]
        criticality: String,
        /// Physical conditions around the asset
        #[arg(long, default_value = "Harsh")]
        environment: String,
        /// How often this asset fails
        #[arg(long, default_value = "Frequent")]
        failure_history: String,
        /// Cost to repair, including labor, tools, spares, downtime
        #[arg(long, default_value = "High")]
        maintenance_cost: String,
        /// Cost of system unavailability
        #[arg(long, default_value = "High")]
        downtime_cost: String,
    },

    /// Show possible causes and actions for a system symptom
    Diagnose {
        /// Equipment, e.g. "Generator" or "Pump/Motor"
        #[arg(long, default_value = "Steam Turbine")]
        system: String,
        /// Observed symptom, e.g. "Overheating" or "Low Output"
        #[arg(long, default_value = "Overheating")]
        symptom: String,
    },

    /// Maintenance knowledge quiz
    Quiz {
        #[command(subcommand)]
        command: QuizCommands,
    },

    /// Calculate maintenance KPIs
    Kpi {
        /// Total uptime (hours)
        #[arg(long, default_value = "1000")]
        uptime: Decimal,
        /// Number of failures
        #[arg(long, default_value = "5")]
        failures: Decimal,
        /// Total downtime (hours)
        #[arg(long, default_value = "50")]
        downtime: Decimal,
        /// Number of repairs
        #[arg(long, default_value = "5")]
        repairs: Decimal,
        /// Total maintenance cost
        #[arg(long, default_value = "15000")]
        cost: Decimal,
        /// Total output (e.g. MWh, tons)
        #[arg(long = "units", default_value = "1000")]
        output_units: Decimal,
        /// Scheduled jobs
        #[arg(long, default_value = "120")]
        scheduled: Decimal,
        /// Jobs completed on time
        #[arg(long, default_value = "108")]
        completed: Decimal,
        /// Planned budget
        #[arg(long, default_value = "20000")]
        budget: Decimal,
        /// Actual spend
        #[arg(long, default_value = "18500")]
        actual: Decimal,
    },

    /// Build a fishbone (Ishikawa) diagram as Graphviz DOT
    Fishbone {
        /// Main problem
        #[arg(long, default_value = "High Bearing Temperature")]
        problem: String,
        /// A cause as CATEGORY=TEXT (Human, Machine, Method, Material,
        /// Environment, Measurement); repeatable
        #[arg(long = "cause", value_name = "CATEGORY=TEXT")]
        causes: Vec<String>,
    },

    /// Evaluate a ruleset against a set of facts
    Eval {
        /// Path to a ruleset JSON document, or a built-in ruleset id
        ruleset: PathBuf,
        /// Path to the facts JSON file
        #[arg(long)]
        facts: PathBuf,
    },

    /// Validate a ruleset document against the JSON Schema
    Validate {
        /// Path to the ruleset (or manifest) JSON file
        file: PathBuf,
    },

    /// Print a built-in ruleset as interchange JSON
    Export {
        /// Which ruleset to export
        #[arg(value_enum)]
        ruleset: BuiltinRuleset,
        /// Wrap the ruleset in a manifest with an etag
        #[arg(long)]
        manifest: bool,
    },
}

#[derive(Subcommand)]
enum QuizCommands {
    /// List the questions and their options
    Questions,
    /// Score a JSON array of answers (option text or null per question)
    Score {
        /// Path to the answers JSON file
        #[arg(long)]
        answers: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = cli.output;
    let quiet = cli.quiet;
    match cli.command {
        Commands::Strategy {
            criticality,
            environment,
            failure_history,
            maintenance_cost,
            downtime_cost,
        } => {
            commands::strategy::cmd_strategy(
                &commands::strategy::StrategyArgs {
                    criticality,
                    environment,
                    failure_history,
                    maintenance_cost,
                    downtime_cost,
                },
                output,
                quiet,
            );
        }
        Commands::Diagnose { system, symptom } => {
            commands::diagnose::cmd_diagnose(&system, &symptom, output, quiet);
        }
        Commands::Quiz { command } => match command {
            QuizCommands::Questions => commands::quiz::cmd_questions(output, quiet),
            QuizCommands::Score { answers } => commands::quiz::cmd_score(&answers, output, quiet),
        },
        Commands::Kpi {
            uptime,
            failures,
            downtime,
            repairs,
            cost,
            output_units,
            scheduled,
            completed,
            budget,
            actual,
        } => {
            let inputs = upkeep_guide::KpiInputs {
                uptime,
                failures,
                downtime,
                repairs,
                maintenance_cost: cost,
                output: output_units,
                scheduled_jobs: scheduled,
                completed_on_time: completed,
                planned_budget: budget,
                actual_spend: actual,
            };
            commands::kpi::cmd_kpi(&inputs, output, quiet);
        }
        Commands::Fishbone { problem, causes } => {
            commands::fishbone::cmd_fishbone(&problem, &causes, output, quiet);
        }
        Commands::Eval { ruleset, facts } => {
            commands::eval::cmd_eval(&ruleset, &facts, output, quiet);
        }
        Commands::Validate { file } => {
            commands::validate::cmd_validate(&file, output, quiet);
        }
        Commands::Export { ruleset, manifest } => {
            commands::export::cmd_export(ruleset, manifest, output, quiet);
        }
    }
}

/// Install the stderr log subscriber. `--verbose` wins over UPKEEP_LOG,
/// which wins over the `warn` default.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

/// Report an evaluation failure and exit. Invalid input means "no
/// guidance available" and exits 2; anything else exits 1.
pub(crate) fn exit_with_eval_error(
    err: &upkeep_eval::EvalError,
    output: OutputFormat,
    quiet: bool,
) -> ! {
    report_error(&format!("error: {}", err), output, quiet);
    process::exit(if err.is_invalid_input() { 2 } else { 1 });
}

/// Read and parse a JSON file, exiting with status 1 on failure.
pub(crate) fn read_json(
    path: &Path,
    what: &str,
    output: OutputFormat,
    quiet: bool,
) -> serde_json::Value {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading {} file '{}': {}", what, path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error: invalid JSON in {}: {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}

/// Load the built-in rulesets, exiting with status 1 if the authored
/// content fails validation.
pub(crate) fn load_guide(output: OutputFormat, quiet: bool) -> upkeep_guide::Guide {
    match upkeep_guide::Guide::load() {
        Ok(g) => g,
        Err(e) => {
            let msg = format!("internal error: built-in ruleset is malformed: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}
