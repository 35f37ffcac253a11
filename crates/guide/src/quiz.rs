//! Fixed-answer-key multiple choice quiz.
//!
//! Answers are compared by option text. A skipped question (`None`)
//! scores zero. Level bands use absolute thresholds on the raw score:
//! below 25 is Beginner, 25 to 39 Intermediate, 40 and above Expert.

use serde::Serialize;
use thiserror::Error;

/// One authored question. `answer` indexes into `options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
    pub explanation: &'static str,
}

impl Question {
    pub fn correct_option(&self) -> Option<&'static str> {
        self.options.get(self.answer).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question {index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("expected at most {expected} answers, got {got}")]
    TooManyAnswers { expected: usize, got: usize },

    #[error("question {index}: '{answer}' is not one of the options")]
    UnknownOption { index: usize, answer: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl Level {
    pub const INTERMEDIATE_FROM: usize = 25;
    pub const EXPERT_FROM: usize = 40;

    pub fn from_score(score: usize) -> Level {
        if score < Self::INTERMEDIATE_FROM {
            Level::Beginner
        } else if score < Self::EXPERT_FROM {
            Level::Intermediate
        } else {
            Level::Expert
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Level::Beginner => "Keep learning! Review key concepts and try again.",
            Level::Intermediate => "Great job! You're well on your way.",
            Level::Expert => "Excellent! You have strong maintenance knowledge.",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Expert => "Expert",
        };
        f.write_str(s)
    }
}

/// Per-question feedback line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionFeedback {
    pub number: usize,
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    pub expected: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub level: Level,
    pub message: &'static str,
    pub feedback: Vec<QuestionFeedback>,
}

/// Check that every question has distinct options and an in-range
/// answer index.
pub fn validate_bank(bank: &[Question]) -> Result<(), QuizError> {
    for (index, q) in bank.iter().enumerate() {
        if q.options.is_empty() {
            return Err(QuizError::InvalidQuestion {
                index: index + 1,
                reason: "no options".to_string(),
            });
        }
        if let Some((i, dup)) = q
            .options
            .iter()
            .enumerate()
            .find(|&(i, o)| q.options[..i].contains(o))
        {
            return Err(QuizError::InvalidQuestion {
                index: index + 1,
                reason: format!("option {} ('{}') repeats an earlier option", i + 1, dup),
            });
        }
        if q.answer >= q.options.len() {
            return Err(QuizError::InvalidQuestion {
                index: index + 1,
                reason: format!(
                    "answer index {} out of range for {} options",
                    q.answer,
                    q.options.len()
                ),
            });
        }
    }
    Ok(())
}

/// Score `answers` against `bank`.
///
/// `answers[i]` is the chosen option text for question `i`, or `None`
/// if skipped. Fewer answers than questions is allowed; the rest count
/// as skipped.
pub fn score<S: AsRef<str>>(
    bank: &[Question],
    answers: &[Option<S>],
) -> Result<QuizReport, QuizError> {
    validate_bank(bank)?;
    if answers.len() > bank.len() {
        return Err(QuizError::TooManyAnswers {
            expected: bank.len(),
            got: answers.len(),
        });
    }

    let mut feedback = Vec::with_capacity(bank.len());
    let mut total_correct = 0;
    for (index, q) in bank.iter().enumerate() {
        let given: Option<&str> = answers
            .get(index)
            .and_then(|a| a.as_ref())
            .map(|s| s.as_ref());
        if let Some(g) = given {
            if !q.options.contains(&g) {
                return Err(QuizError::UnknownOption {
                    index: index + 1,
                    answer: g.to_string(),
                });
            }
        }
        // validate_bank guarantees the index is in range
        let expected = q.options[q.answer];
        let correct = given == Some(expected);
        if correct {
            total_correct += 1;
        }
        feedback.push(QuestionFeedback {
            number: index + 1,
            correct,
            given: given.map(str::to_string),
            expected,
            explanation: q.explanation,
        });
    }

    let level = Level::from_score(total_correct);
    tracing::debug!(score = total_correct, total = bank.len(), %level, "quiz scored");
    Ok(QuizReport {
        score: total_correct,
        total: bank.len(),
        level,
        message: level.message(),
        feedback,
    })
}

/// The authored question bank.
pub static QUESTIONS: &[Question] = &[
    Question {
        prompt: "Which maintenance strategy is best suited for low-cost, non-critical assets?",
        options: &["RCM", "CBM", "Run-to-Failure", "PdM"],
        answer: 2,
        explanation: "RTF is ideal for non-critical, inexpensive assets.",
    },
    Question {
        prompt: "Which strategy is based on regularly scheduled interventions?",
        options: &["Corrective", "Predictive", "Preventive", "Reactive"],
        answer: 2,
        explanation: "Preventive maintenance follows a time or usage-based schedule.",
    },
    Question {
        prompt: "Which factor is most critical in selecting a maintenance strategy?",
        options: &["Asset color", "Manufacturer name", "Failure impact", "Location"],
        answer: 2,
        explanation: "RCM selects strategies based on consequences of failure.",
    },
    Question {
        prompt: "What does a strategy recommendation matrix usually compare?",
        options: &[
            "Voltage vs. temperature",
            "Risk vs. maintenance cost",
            "Color vs. size",
            "Speed vs. power",
        ],
        answer: 1,
        explanation: "Strategy tools map risk vs. cost.",
    },
    Question {
        prompt: "Which technique detects electrical insulation faults?",
        options: &["Ultrasound", "IR Thermography", "Megger Testing", "Vibration"],
        answer: 2,
        explanation: "Megger testing is used to detect insulation weaknesses.",
    },
    Question {
        prompt: "Which of these is not a condition monitoring method?",
        options: &["Oil analysis", "Thermal imaging", "Hammering", "Ultrasound"],
        answer: 2,
        explanation: "Hammering is not a diagnostic technique.",
    },
    Question {
        prompt: "In the DIPF model, when is the best time to apply predictive maintenance?",
        options: &["Design", "Installation", "Prediction", "Failure"],
        answer: 2,
        explanation: "Predictive maintenance is most useful during the prediction phase.",
    },
    Question {
        prompt: "The 'F' in DIPF represents:",
        options: &["Fix", "Flow", "Failure", "Forecast"],
        answer: 2,
        explanation: "'F' in DIPF stands for Failure.",
    },
    Question {
        prompt: "The early failure period of the bathtub curve is also known as:",
        options: &["Random zone", "Infant mortality", "Steady state", "Burn-in phase"],
        answer: 1,
        explanation: "Infant mortality phase has high initial failure rates.",
    },
    Question {
        prompt: "The constant failure rate phase in the bathtub curve is called:",
        options: &["Useful life", "Obsolete life", "Initial wear", "Shutdown phase"],
        answer: 0,
        explanation: "Useful life has a low and constant failure rate.",
    },
    Question {
        prompt: "Which of the following tools is commonly used in RCA?",
        options: &["CMMS", "Fishbone diagram", "PLC", "SCADA"],
        answer: 1,
        explanation: "Fishbone diagrams help identify root causes.",
    },
    Question {
        prompt: "Why is RCA important in maintenance?",
        options: &[
            "It makes checklists",
            "It increases paperwork",
            "It prevents recurrence",
            "It reduces cleaning",
        ],
        answer: 2,
        explanation: "RCA aims to eliminate the true cause of failure.",
    },
    Question {
        prompt: "In FMEA, the Risk Priority Number (RPN) is calculated by:",
        options: &[
            "Severity + Occurrence + Detection",
            "Severity × Occurrence × Detection",
            "Failure ÷ Risk × Time",
            "Risk – Detection + Time",
        ],
        answer: 1,
        explanation: "RPN = Severity × Occurrence × Detection.",
    },
    Question {
        prompt: "Which failure mode is most critical in FMEA?",
        options: &[
            "High severity, low detection",
            "Low severity, high detection",
            "High detection, low occurrence",
            "None of the above",
        ],
        answer: 0,
        explanation: "High severity + low detectability = high risk.",
    },
    Question {
        prompt: "What does a Gantt chart show in maintenance?",
        options: &["Power consumption", "Spare parts", "Job schedules over time", "Efficiency"],
        answer: 2,
        explanation: "Gantt charts visualize maintenance timelines.",
    },
    Question {
        prompt: "Which role ensures planned work is executed on time?",
        options: &["Storekeeper", "Operator", "Planner", "Driver"],
        answer: 2,
        explanation: "Planners ensure scheduled work is ready and organized.",
    },
    Question {
        prompt: "Which analysis helps prioritize spare parts?",
        options: &["ABC Analysis", "RCA", "P-F Curve", "Fishbone"],
        answer: 0,
        explanation: "ABC classifies inventory by value and criticality.",
    },
    Question {
        prompt: "What is the risk of overstocking spare parts?",
        options: &["No impact", "Waste of capital", "Improved uptime", "More failures"],
        answer: 1,
        explanation: "Overstocking ties up capital and storage space.",
    },
    Question {
        prompt: "A CMMS is used for:",
        options: &["Motor cooling", "Maintenance tracking", "Lubrication", "Vibration analysis"],
        answer: 1,
        explanation: "CMMS tracks work orders, history, assets.",
    },
    Question {
        prompt: "Which technology helps predict equipment failure using big data?",
        options: &["IIoT", "RTF", "Thermography", "ABC"],
        answer: 0,
        explanation: "IIoT sensors stream real-time data for analysis.",
    },
    Question {
        prompt: "Availability is calculated as:",
        options: &["Uptime / Total time", "Downtime / Uptime", "Load × Speed", "Cycle time – MTBF"],
        answer: 0,
        explanation: "Availability = Uptime / (Uptime + Downtime).",
    },
    Question {
        prompt: "Which KPI reflects repair efficiency?",
        options: &["MTBF", "MTTR", "OEE", "P-F"],
        answer: 1,
        explanation: "MTTR (Mean Time To Repair) shows how fast a system is restored.",
    },
    Question {
        prompt: "Which safety procedure ensures all energy is removed before maintenance?",
        options: &["LOTO", "FMEA", "PPE", "TPM"],
        answer: 0,
        explanation: "LOTO (Lockout Tagout) isolates energy sources.",
    },
    Question {
        prompt: "Which hazard is most common during confined space maintenance?",
        options: &["Vibration", "Overheating", "Asphyxiation", "Noise"],
        answer: 2,
        explanation: "Lack of oxygen is a leading risk in confined spaces.",
    },
    Question {
        prompt: "What is the purpose of proactive maintenance?",
        options: &[
            "Replace all components regularly",
            "React after failure",
            "Eliminate root causes of failure",
            "Ignore minor defects",
        ],
        answer: 2,
        explanation: "Proactive maintenance eliminates root causes before failure occurs.",
    },
    Question {
        prompt: "CBM stands for:",
        options: &[
            "Corrective Based Monitoring",
            "Condition Based Maintenance",
            "Continuous Battery Maintenance",
            "Certified Breakdown Model",
        ],
        answer: 1,
        explanation: "CBM relies on actual equipment condition to determine maintenance needs.",
    },
    Question {
        prompt: "The wear-out period of an asset is characterized by:",
        options: &[
            "Low failure rate",
            "Sudden voltage spikes",
            "High and increasing failure rate",
            "Noisy operations",
        ],
        answer: 2,
        explanation: "Failures increase due to age-related wear and fatigue.",
    },
    Question {
        prompt: "Which KPI shows how much of the scheduled work was done?",
        options: &["MTTR", "MTBF", "Schedule Compliance", "Availability"],
        answer: 2,
        explanation: "Schedule Compliance measures % of jobs completed on time.",
    },
    Question {
        prompt: "RCM aims to:",
        options: &[
            "Reduce staffing levels",
            "Select optimal strategy per failure mode",
            "Use one strategy for all equipment",
            "Eliminate the need for monitoring",
        ],
        answer: 1,
        explanation: "RCM chooses maintenance strategy based on risk and function.",
    },
    Question {
        prompt: "Electrical Signature Analysis is mainly used for:",
        options: &["Pipe thickness", "Bearing vibration", "Motor diagnostics", "Gas insulation"],
        answer: 2,
        explanation: "ESA identifies motor faults via voltage/current waveform analysis.",
    },
    Question {
        prompt: "What does PdM stand for?",
        options: &[
            "Proactive diagnostic Maintenance",
            "Prescribed digital Maintenance",
            "Predictive Maintenance",
            "Preventive deep Maintenance",
        ],
        answer: 2,
        explanation: "PdM stands for Predictive Maintenance, which uses data trends to forecast failures.",
    },
    Question {
        prompt: "What is the main goal of Total Productive Maintenance (TPM)?",
        options: &[
            "Increase overtime",
            "Eliminate planned maintenance",
            "Maximize equipment effectiveness",
            "Minimize staff involvement",
        ],
        answer: 2,
        explanation: "TPM aims to maximize equipment effectiveness with operator involvement.",
    },
    Question {
        prompt: "Which tool is used to analyze and visualize failure trends?",
        options: &[
            "Piping and Instrument Diagram",
            "Pareto chart",
            "Maintenance checklist",
            "Gantt chart",
        ],
        answer: 1,
        explanation: "Pareto charts highlight the most frequent or impactful causes.",
    },
    Question {
        prompt: "Which technique monitors particle contamination in oil?",
        options: &["Vibration", "Infrared", "Oil analysis", "Ultrasound"],
        answer: 2,
        explanation: "Oil analysis checks for wear particles, contamination, and fluid properties.",
    },
    Question {
        prompt: "In the P-F Curve, what does 'P' stand for?",
        options: &["Preventive", "Potential failure", "Physical wear", "Performance drop"],
        answer: 1,
        explanation: "'P' stands for Potential Failure—the point where degradation becomes detectable.",
    },
    Question {
        prompt: "Which software tool helps in planning and tracking maintenance work?",
        options: &["ERP", "SCADA", "CMMS", "PLC"],
        answer: 2,
        explanation: "CMMS stands for Computerized Maintenance Management System.",
    },
    Question {
        prompt: "The main benefit of predictive over preventive maintenance is:",
        options: &[
            "Lower reliability",
            "Higher manpower",
            "Less data required",
            "Longer asset life",
        ],
        answer: 3,
        explanation: "Predictive maintenance extends asset life by addressing issues before failure.",
    },
    Question {
        prompt: "Which condition monitoring technique is best for rotating equipment?",
        options: &["Thermal camera", "Vibration analysis", "Oil level inspection", "Ultrasound"],
        answer: 1,
        explanation: "Vibration analysis is ideal for rotating components like motors and pumps.",
    },
    Question {
        prompt: "What is the typical shape of the failure rate in the bathtub curve?",
        options: &["S-curve", "Straight line", "U-curve", "Bathtub-shaped"],
        answer: 3,
        explanation: "The bathtub curve shows early, constant, and wear-out failure rates.",
    },
    Question {
        prompt: "Which of the following is not part of the OEE formula?",
        options: &["Availability", "Quality", "Utilization", "Performance"],
        answer: 2,
        explanation: "OEE includes Availability, Performance, and Quality.",
    },
    Question {
        prompt: "What does the 'criticality' of an asset refer to?",
        options: &["Size", "Color", "Impact of its failure", "Speed of operation"],
        answer: 2,
        explanation: "Criticality measures how failure affects safety, production, or cost.",
    },
    Question {
        prompt: "When is 'Run to Failure' acceptable?",
        options: &[
            "For mission-critical assets",
            "For non-critical, low-cost items",
            "For transformer bushings",
            "For gas turbines",
        ],
        answer: 1,
        explanation: "RTF is acceptable for inexpensive, low-impact equipment.",
    },
    Question {
        prompt: "Which failure detection method is most immediate?",
        options: &[
            "Visual inspection",
            "Manual records",
            "Online sensor monitoring",
            "Annual audits",
        ],
        answer: 2,
        explanation: "Sensors enable continuous, real-time monitoring.",
    },
    Question {
        prompt: "What does MTBF measure?",
        options: &[
            "Maintenance time before fix",
            "Mean time between failures",
            "Machine tuning before fault",
            "Minimum temperature before fire",
        ],
        answer: 1,
        explanation: "MTBF is the average time between failures.",
    },
    Question {
        prompt: "A low MTTR value means:",
        options: &[
            "Slow repairs",
            "Frequent failures",
            "Fast recovery after failure",
            "Less data collected",
        ],
        answer: 2,
        explanation: "Low MTTR = equipment is restored quickly.",
    },
    Question {
        prompt: "Why is schedule compliance important?",
        options: &[
            "To track fuel levels",
            "To improve warehouse layout",
            "To ensure timely execution of PM tasks",
            "To reduce meeting duration",
        ],
        answer: 2,
        explanation: "It measures how much planned work is done on time.",
    },
    Question {
        prompt: "Root cause analysis should be done after:",
        options: &[
            "Every successful job",
            "Random sampling",
            "A major or repeated failure",
            "Quarterly audits",
        ],
        answer: 2,
        explanation: "RCA is conducted to understand and prevent recurring or serious failures.",
    },
    Question {
        prompt: "Which of the following improves mean time between failures?",
        options: &[
            "Overloading equipment",
            "Skipping lubrication",
            "Proper preventive maintenance",
            "Ignoring wear",
        ],
        answer: 2,
        explanation: "Preventive actions reduce stress and extend lifespan.",
    },
    Question {
        prompt: "What does a high RPN in FMEA indicate?",
        options: &["Low priority", "No concern", "High risk", "Maintenance completed"],
        answer: 2,
        explanation: "A high Risk Priority Number requires action.",
    },
    Question {
        prompt: "Infrared thermography is used mainly for:",
        options: &[
            "Voltage testing",
            "Visual inspection",
            "Detecting hotspots",
            "Harmonics measurement",
        ],
        answer: 2,
        explanation: "IR thermography detects heat anomalies in electrical and mechanical systems.",
    },
];
