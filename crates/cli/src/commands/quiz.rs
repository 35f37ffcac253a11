use std::path::Path;
use std::process;

use upkeep_guide::quiz::{self, QUESTIONS};

use crate::{print_json, read_json, report_error, OutputFormat};

pub(crate) fn cmd_questions(output: OutputFormat, _quiet: bool) {
    match output {
        OutputFormat::Json => print_json(&QUESTIONS),
        OutputFormat::Text => {
            for (i, q) in QUESTIONS.iter().enumerate() {
                println!("Q{}: {}", i + 1, q.prompt);
                for option in q.options {
                    println!("  - {}", option);
                }
                println!();
            }
        }
    }
}

pub(crate) fn cmd_score(answers_path: &Path, output: OutputFormat, quiet: bool) {
    let doc = read_json(answers_path, "answers", output, quiet);
    let answers: Vec<Option<String>> = match serde_json::from_value(doc) {
        Ok(a) => a,
        Err(e) => {
            let msg = format!(
                "error: answers must be a JSON array of option text or null: {}",
                e
            );
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let report = match quiz::score(QUESTIONS, &answers) {
        Ok(r) => r,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            if !quiet {
                for f in &report.feedback {
                    if f.correct {
                        println!("Q{}: Correct. {}", f.number, f.explanation);
                    } else {
                        println!(
                            "Q{}: Incorrect. Correct answer: {}. {}",
                            f.number, f.expected, f.explanation
                        );
                    }
                }
                println!();
            }
            println!("Final Score: {} out of {}", report.score, report.total);
            println!("Level: {}. {}", report.level, report.message);
        }
    }
}
