//! Root-cause diagnostic lookup: System x Symptom.
//!
//! Each of the 42 cells is authored either with causes and corrective
//! actions or as explicitly not applicable. The table compiles to one
//! exact-match rule per cell followed by a reject rule, so a pair that
//! somehow lacks an entry fails as invalid input instead of returning a
//! made-up answer.

use upkeep_eval::{AttributeDecl, MalformedRuleset, Outcome, Rule, Ruleset, Schema, Test};

pub const SYSTEM: &str = "system";
pub const SYMPTOM: &str = "symptom";

pub const NOT_APPLICABLE: &str = "Not Applicable";
pub const NOT_APPLICABLE_REASON: &str =
    "Not Applicable or No Common Root Cause Identified for this combination.";

categorical! {
    /// Power plant equipment covered by the diagnostic table.
    pub enum System {
        SteamTurbine => "Steam Turbine",
        Generator => "Generator",
        Transformer => "Transformer",
        PumpMotor => "Pump/Motor",
        Boiler => "Boiler",
        Switchgear => "Switchgear",
    }
}

categorical! {
    /// Observable symptom reported for a system.
    pub enum Symptom {
        Overheating => "Overheating",
        Vibration => "Vibration",
        Tripping => "Tripping",
        Leakage => "Leakage",
        LowOutput => "Low Output",
        Noise => "Noise",
        ElectricalFlash => "Electrical Flash",
    }
}

/// What is known about one system/symptom cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    Causes {
        causes: &'static [&'static str],
        actions: &'static [&'static str],
    },
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub system: System,
    pub symptom: Symptom,
    pub finding: Finding,
}

impl Entry {
    /// Rule id for this cell, e.g. `pump_motor_low_output`.
    pub fn rule_id(&self) -> String {
        format!("{}_{}", slug(self.system.as_str()), slug(self.symptom.as_str()))
    }

    /// The outcome shown to the user. Causes go in the rationale and
    /// corrective actions in the detail, one per line.
    pub fn outcome(&self) -> Outcome {
        match self.finding {
            Finding::Causes { causes, actions } => Outcome::new(
                format!("{} / {}", self.system, self.symptom),
                causes.join("\n"),
            )
            .with_detail(actions.join("\n")),
            Finding::NotApplicable => Outcome::new(NOT_APPLICABLE, NOT_APPLICABLE_REASON),
        }
    }
}

fn slug(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// True when the outcome is the explicit "no common root cause" answer.
pub fn is_not_applicable(outcome: &Outcome) -> bool {
    outcome.label == NOT_APPLICABLE
}

/// Split an outcome's causes back into lines.
pub fn causes(outcome: &Outcome) -> Vec<&str> {
    if is_not_applicable(outcome) {
        return Vec::new();
    }
    outcome.rationale.lines().collect()
}

/// Split an outcome's corrective actions back into lines.
pub fn actions(outcome: &Outcome) -> Vec<&str> {
    outcome
        .detail
        .as_deref()
        .map(|d| d.lines().collect())
        .unwrap_or_default()
}

pub fn schema() -> Schema {
    Schema::new(vec![
        AttributeDecl::new(SYSTEM, System::labels()),
        AttributeDecl::new(SYMPTOM, Symptom::labels()),
    ])
}

/// Compile `entries` into the diagnosis ruleset.
pub fn ruleset(entries: &[Entry]) -> Result<Ruleset, MalformedRuleset> {
    let mut rules: Vec<Rule> = entries
        .iter()
        .map(|e| {
            Rule::new(
                e.rule_id(),
                vec![
                    Test::eq(SYSTEM, e.system.as_str()),
                    Test::eq(SYMPTOM, e.symptom.as_str()),
                ],
                e.outcome(),
            )
        })
        .collect();
    rules.push(Rule::reject(
        "unauthored",
        "no diagnosis is authored for this system and symptom",
    ));

    Ok(Ruleset::new(crate::DIAGNOSIS, schema(), rules)?
        .with_title("Root Cause Analysis Diagnostic Tool"))
}

/// The authored table, in system-major display order.
pub static ENTRIES: &[Entry] = &[
    Entry {
        system: System::SteamTurbine,
        symptom: Symptom::Overheating,
        finding: Finding::Causes {
            causes: &[
                "Bearing lubrication failure or oil degradation",
                "Blocked or inefficient lube oil cooler",
                "Overloading or excessive backpressure",
                "Rotor rubbing due to thermal expansion",
            ],
            actions: &[
                "Check lube oil pressure, flow, and quality",
                "Clean or replace oil coolers",
                "Analyze process parameters and steam conditions",
                "Inspect clearances and vibration trends for signs of rubbing",
            ],
        },
    },
    Entry {
        system: System::SteamTurbine,
        symptom: Symptom::Vibration,
        finding: Finding::Causes {
            causes: &[
                "Rotor imbalance or misalignment",
                "Bearing wear or damage",
                "Steam flow disturbance (e.g., wet steam, water induction)",
                "Foundation settlement or soft foot",
            ],
            actions: &[
                "Perform shaft alignment and rotor balancing",
                "Inspect journal and thrust bearings",
                "Verify steam quality and check for water carryover",
                "Conduct foundation level and bolt torque check",
            ],
        },
    },
    Entry {
        system: System::SteamTurbine,
        symptom: Symptom::Tripping,
        finding: Finding::Causes {
            causes: &[
                "Overspeed or vibration protection activation",
                "Low lube oil pressure or seal oil failure",
                "Emergency trip valve actuation",
                "Generator or process interlock triggering trip",
            ],
            actions: &[
                "Review trip log and overspeed test records",
                "Check turbine protection systems and trip oil circuits",
                "Test and verify operation of trip valves and solenoids",
                "Investigate related systems like generator load or condenser vacuum",
            ],
        },
    },
    Entry {
        system: System::SteamTurbine,
        symptom: Symptom::Leakage,
        finding: Finding::Causes {
            causes: &[
                "Steam seal packing wear or failure",
                "Gasket failure at flanges or inspection covers",
                "Lube oil or seal oil leakage",
                "Drain piping blockage causing backpressure",
            ],
            actions: &[
                "Inspect and replace worn gland or labyrinth seals",
                "Tighten or re-gasket leaking joints",
                "Check oil piping and pump seals",
                "Ensure proper drainage and venting of seal systems",
            ],
        },
    },
    Entry {
        system: System::SteamTurbine,
        symptom: Symptom::LowOutput,
        finding: Finding::Causes {
            causes: &[
                "Reduced steam inlet pressure or flow",
                "Fouled turbine blades or deposits on nozzles",
                "Throttle valve malfunction or partial stroke",
                "Vacuum loss in the condenser",
            ],
            actions: &[
                "Monitor steam parameters and check control valves",
                "Perform turbine inspection and cleaning (offline if needed)",
                "Test throttle valve actuation and feedback loop",
                "Inspect condenser performance and ejector operation",
            ],
        },
    },
    Entry {
        system: System::SteamTurbine,
        symptom: Symptom::Noise,
        finding: Finding::Causes {
            causes: &[
                "Blade vibration or steam whistle due to partial flow",
                "Bearing noise due to wear or oil starvation",
                "Loose casing bolts or insulation panels",
                "Water hammer in steam lines",
            ],
            actions: &[
                "Analyze acoustic signals and vibration spectrum",
                "Check oil film condition and replace worn bearings",
                "Tighten casing bolts and panels",
                "Verify proper startup/shutdown procedures to avoid water hammer",
            ],
        },
    },
    Entry {
        system: System::SteamTurbine,
        symptom: Symptom::ElectricalFlash,
        finding: Finding::NotApplicable,
    },
    Entry {
        system: System::Generator,
        symptom: Symptom::Overheating,
        finding: Finding::Causes {
            causes: &[
                "Blocked or inefficient cooling system (TEWAC, air, or hydrogen)",
                "Overloaded operation or poor power factor",
                "Stator or rotor winding insulation degradation",
                "Bearing friction or high ambient temperature",
            ],
            actions: &[
                "Inspect and clean air filters, heat exchangers, or coolers",
                "Monitor load, PF, and reduce overloading",
                "Perform insulation resistance and hotspot checks",
                "Verify bearing lubrication and ventilation",
            ],
        },
    },
    Entry {
        system: System::Generator,
        symptom: Symptom::Vibration,
        finding: Finding::Causes {
            causes: &[
                "Rotor imbalance or misalignment",
                "Magnetic unbalance (eccentric air gap)",
                "Bearing wear or resonance",
                "Foundation looseness or coupling issues",
            ],
            actions: &[
                "Perform rotor dynamic balancing",
                "Check shaft alignment and coupling condition",
                "Analyze vibration spectrum for electrical or mechanical sources",
                "Re-tighten foundation bolts and support structures",
            ],
        },
    },
    Entry {
        system: System::Generator,
        symptom: Symptom::Tripping,
        finding: Finding::Causes {
            causes: &[
                "Protection relay activation (differential, overcurrent, reverse power)",
                "Voltage or frequency instability",
                "AVR or excitation system malfunction",
                "Loss of prime mover input (e.g., turbine trip)",
                "External trip",
            ],
            actions: &[
                "Analyze protection relay logs and trip records",
                "Verify voltage and frequency stability",
                "Test AVR/excitation components (brushless or static)",
                "Check turbine/gas engine controls for faults",
            ],
        },
    },
    Entry {
        system: System::Generator,
        symptom: Symptom::Leakage,
        finding: Finding::Causes {
            causes: &[
                "Hydrogen or oil seal failure (in hydrogen-cooled machines)",
                "Shaft seal or cooler gasket wear",
                "Cooling water or lube oil system leak",
                "Loose terminal box grommets or penetrations",
            ],
            actions: &[
                "Check hydrogen purity, pressure, and seal oil system",
                "Replace worn seals and tighten gasketed joints",
                "Inspect lube oil and coolant piping",
                "Apply leak detection methods (pressure test, sniffer, dye)",
            ],
        },
    },
    Entry {
        system: System::Generator,
        symptom: Symptom::LowOutput,
        finding: Finding::Causes {
            causes: &[
                "Underexcitation or faulty AVR",
                "Partial winding short or high resistance joints",
                "Governor or prime mover input limitation",
                "Load rejection or control mismatch",
            ],
            actions: &[
                "Check excitation current and AVR settings",
                "Test windings for shorted turns or thermal hotspots",
                "Analyze prime mover output and governor response",
                "Verify load sharing and synchronization",
            ],
        },
    },
    Entry {
        system: System::Generator,
        symptom: Symptom::Noise,
        finding: Finding::Causes {
            causes: &[
                "Loose lamination stacks or stator core vibration",
                "Magnetic noise due to flux imbalance",
                "Bearing noise or shaft rub",
                "Ventilation fan imbalance or damage",
            ],
            actions: &[
                "Inspect stator core integrity and wedge tightness",
                "Verify air gap uniformity and excitation balance",
                "Check bearing condition and shaft alignment",
                "Balance or replace ventilation fan",
            ],
        },
    },
    Entry {
        system: System::Generator,
        symptom: Symptom::ElectricalFlash,
        finding: Finding::Causes {
            causes: &[
                "Line terminal assembly insulation failure or loose connection",
                "Voltage surges or transients",
                "Ground fault or phase-to-phase short",
                "Contamination or tracking on busbars or bushings",
            ],
            actions: &[
                "Isolate and inspect terminal connections and cable insulation",
                "Check for signs of arc tracking or corona",
                "Test for insulation resistance and partial discharge",
                "Verify surge protection devices and grounding integrity",
            ],
        },
    },
    Entry {
        system: System::Transformer,
        symptom: Symptom::Overheating,
        finding: Finding::Causes {
            causes: &[
                "Blocked radiator or degraded cooling system (fans/pumps)",
                "Overload or unbalanced loading",
                "High ambient temperature or poor ventilation",
                "Internal faults (e.g., winding hotspot or core heating)",
            ],
            actions: &[
                "Inspect and clean radiators, check fan/pump operation",
                "Monitor load current vs. rated capacity",
                "Perform infrared scanning and DGA for internal fault detection",
            ],
        },
    },
    Entry {
        system: System::Transformer,
        symptom: Symptom::Vibration,
        finding: Finding::Causes {
            causes: &[
                "Core lamination looseness or magnetic flux imbalance",
                "Mechanical looseness of mounting or clamping structure",
                "Harmonics from non-linear loads",
                "Cooling fans or oil pumps vibrating",
            ],
            actions: &[
                "Check core tightness and inspect for core noise",
                "Tighten anchor bolts and inspect for looseness",
                "Analyze power quality for harmonics",
                "Inspect rotating parts (Fans, oil pumps) and supports",
            ],
        },
    },
    Entry {
        system: System::Transformer,
        symptom: Symptom::Tripping,
        finding: Finding::Causes {
            causes: &[
                "Differential protection or Buchholz relay operation",
                "Sudden pressure or overcurrent fault",
                "Earth fault or winding short",
                "HV/LV side switching issues",
            ],
            actions: &[
                "Review protection relay trip logs and gas relay records",
                "Test winding insulation and perform fault analysis",
                "Conduct DGA and sweep frequency response analysis",
                "Check upstream/downstream breaker coordination",
            ],
        },
    },
    Entry {
        system: System::Transformer,
        symptom: Symptom::Leakage,
        finding: Finding::Causes {
            causes: &[
                "Gasket aging or failure",
                "Cracks in tank welds or valve threads",
                "Overpressure during load cycles",
                "Corrosion or mechanical shock to radiators or bushings",
            ],
            actions: &[
                "Inspect and tighten all gasket seals",
                "Monitor oil level and gas accumulation",
                "Conduct visual inspections and apply leak-detection tools",
            ],
        },
    },
    Entry {
        system: System::Transformer,
        symptom: Symptom::LowOutput,
        finding: Finding::Causes {
            causes: &[
                "Tap changer in incorrect position or malfunctioning",
                "Internal short circuits or high winding resistance",
                "Poor voltage regulation due to load changes",
                "Partial discharge or insulation degradation",
            ],
            actions: &[
                "Verify tap changer position and functionality",
                "Test winding resistance and perform ratio test",
                "Analyze voltage profile across the network",
                "Conduct partial discharge and insulation analysis",
            ],
        },
    },
    Entry {
        system: System::Transformer,
        symptom: Symptom::Noise,
        finding: Finding::Causes {
            causes: &[
                "Magnetostriction of core laminations (normal hum)",
                "Loose core clamping or aging insulation",
                "Harmonics or DC bias in the system",
                "Fan or pump noise from cooling system",
            ],
            actions: &[
                "Check if noise is within normal frequency range (100–150 Hz)",
                "Tighten internal clamping bolts (if offline possible)",
                "Perform harmonic analysis",
                "Inspect auxiliary components (fans, oil pumps) for noise",
            ],
        },
    },
    Entry {
        system: System::Transformer,
        symptom: Symptom::ElectricalFlash,
        finding: Finding::Causes {
            causes: &[
                "Bushing flashover or tracking due to contamination",
                "Internal arc due to winding insulation failure",
                "Surge arrestor failure or poor grounding",
                "Improper cable termination or loosened lugs",
            ],
            actions: &[
                "Inspect bushings for contamination, cracks, or partial discharge",
                "Perform insulation resistance and tan delta testing",
                "Test surge arrestors and inspect earthing",
                "Re-terminate and torque-check all cable connections",
            ],
        },
    },
    Entry {
        system: System::PumpMotor,
        symptom: Symptom::Overheating,
        finding: Finding::Causes {
            causes: &[
                "Bearing failure or misalignment",
                "Blocked or restricted cooling flow",
                "Overloaded motor or pump duty beyond design",
                "Low insulation resistance increasing losses",
            ],
            actions: &[
                "Check and lubricate bearings",
                "Inspect cooling fan or coolant lines",
                "Verify load vs. rated capacity",
                "Measure winding temperature and insulation resistance",
            ],
        },
    },
    Entry {
        system: System::PumpMotor,
        symptom: Symptom::Vibration,
        finding: Finding::Causes {
            causes: &[
                "Shaft misalignment or imbalance",
                "Loose foundation bolts or mounting",
                "Cavitation or hydraulic instability",
                "Bearing wear",
            ],
            actions: &[
                "Perform shaft alignment check",
                "Tighten foundation and coupling bolts",
                "Check suction conditions",
                "Inspect and replace worn bearings",
            ],
        },
    },
    Entry {
        system: System::PumpMotor,
        symptom: Symptom::Tripping,
        finding: Finding::Causes {
            causes: &[
                "Overcurrent due to overload or phase imbalance",
                "Motor protection relay activation (e.g., thermal, short circuit)",
                "Electrical insulation failure",
                "Jammed impeller or motor stall",
            ],
            actions: &[
                "Review protection relay settings and logs",
                "Check motor and cable insulation with IR test",
                "Inspect impeller and coupling for blockage",
                "Verify supply voltage and phase balance",
            ],
        },
    },
    Entry {
        system: System::PumpMotor,
        symptom: Symptom::Leakage,
        finding: Finding::Causes {
            causes: &[
                "Seal or gland packing failure",
                "Excessive system pressure or pulsation",
                "Worn shaft sleeve or housing",
                "Corrosion or cracked casing",
            ],
            actions: &[
                "Replace mechanical seals or packing",
                "Check and regulate system pressure",
                "Inspect shaft and housing for damage",
                "Apply corrosion protection or replace damaged parts",
            ],
        },
    },
    Entry {
        system: System::PumpMotor,
        symptom: Symptom::LowOutput,
        finding: Finding::Causes {
            causes: &[
                "Clogged suction filter or strainer",
                "Impeller wear or erosion",
                "Incorrect pump rotation",
                "Air entrainment or vapor lock",
            ],
            actions: &[
                "Clean suction line and filters",
                "Inspect and replace impeller if worn",
                "Verify direction of rotation",
                "Bleed air from the system",
            ],
        },
    },
    Entry {
        system: System::PumpMotor,
        symptom: Symptom::Noise,
        finding: Finding::Causes {
            causes: &[
                "Cavitation in the pump",
                "Bearing damage or lack of lubrication",
                "Loose components or vibration",
                "Electrical hum from motor windings",
            ],
            actions: &[
                "Improve suction conditions to avoid cavitation",
                "Lubricate or replace bearings",
                "Check for mechanical looseness",
                "Measure and assess electrical harmonics",
            ],
        },
    },
    Entry {
        system: System::PumpMotor,
        symptom: Symptom::ElectricalFlash,
        finding: Finding::Causes {
            causes: &[
                "Cable insulation breakdown or loose terminals",
                "Moisture ingress in terminal box",
                "Overvoltage or surge conditions",
                "Faulty motor winding insulation",
            ],
            actions: &[
                "Inspect and re-terminate motor connections",
                "Dry and seal terminal box",
                "Check surge protection devices",
                "Perform dielectric and IR testing",
            ],
        },
    },
    Entry {
        system: System::Boiler,
        symptom: Symptom::Overheating,
        finding: Finding::Causes {
            causes: &[
                "Fouled heat transfer surfaces or tube scaling",
                "Inadequate water flow or pump failure",
                "Incorrect fuel-air ratio causing flame impingement",
                "Blocked flue gas path or malfunctioning dampers",
            ],
            actions: &[
                "Clean boiler tubes and deslag if needed",
                "Check feedwater pump performance and flow rate",
                "Tune combustion system and adjust air/fuel ratio",
                "Inspect and clear flue gas ducts and dampers",
            ],
        },
    },
    Entry {
        system: System::Boiler,
        symptom: Symptom::Vibration,
        finding: Finding::Causes {
            causes: &[
                "Draft fan imbalance or loose mounting",
                "Pulsating combustion or unstable flame",
                "Loose casing or ductwork",
                "Resonance from connected piping",
            ],
            actions: &[
                "Balance and align fans",
                "Stabilize burner operation and check flame detectors",
                "Tighten structural components and duct clamps",
                "Inspect steam lines for proper support",
            ],
        },
    },
    Entry {
        system: System::Boiler,
        symptom: Symptom::Tripping,
        finding: Finding::Causes {
            causes: &[
                "Low drum level or high steam pressure protection",
                "Flame failure or burner fault",
                "Overtemperature in furnace or superheater",
                "Electrical supply fault to controls or auxiliaries",
            ],
            actions: &[
                "Review trip log and interlock history",
                "Check burner management system and sensors",
                "Inspect temperature sensors and protection setpoints",
                "Verify power supply and backup for control panels",
            ],
        },
    },
    Entry {
        system: System::Boiler,
        symptom: Symptom::Leakage,
        finding: Finding::Causes {
            causes: &[
                "Tube rupture or gasket failure",
                "Overpressure or thermal fatigue at weld joints",
                "Corrosion or erosion in water wall/furnace",
                "Valve packing or flange leaks",
            ],
            actions: &[
                "Isolate and inspect leak location",
                "Conduct NDT on suspected tubes or joints",
                "Repair or replace damaged sections",
                "Retighten or repack leaking valves/flanges",
            ],
        },
    },
    Entry {
        system: System::Boiler,
        symptom: Symptom::LowOutput,
        finding: Finding::Causes {
            causes: &[
                "Fouled heat exchange surfaces reducing efficiency",
                "Fuel quality or flow issues",
                "Improper combustion settings",
                "Feedwater system underperformance",
            ],
            actions: &[
                "Conduct soot blowing and tube cleaning",
                "Verify fuel supply and atomization",
                "Re-calibrate air/fuel ratio controls",
                "Check feedwater flow and deaerator performance",
            ],
        },
    },
    Entry {
        system: System::Boiler,
        symptom: Symptom::Noise,
        finding: Finding::Causes {
            causes: &[
                "Water hammer in steam lines",
                "Flame pulsation or unstable combustion",
                "Scale formation causing boiling noise",
            ],
            actions: &[
                "Check condensate removal and trap operation",
                "Tune burner and check flame pattern",
                "Inspect ID/FD fan condition",
                "Clean internal surfaces and monitor boiler chemistry",
            ],
        },
    },
    Entry {
        system: System::Boiler,
        symptom: Symptom::ElectricalFlash,
        finding: Finding::NotApplicable,
    },
    Entry {
        system: System::Switchgear,
        symptom: Symptom::Overheating,
        finding: Finding::Causes {
            causes: &[
                "Loose or corroded busbar or cable connections",
                "Overloaded feeders or poor load distribution",
                "Aging contactors or circuit breakers",
                "Inadequate ventilation or blocked cooling path",
            ],
            actions: &[
                "Perform thermographic scanning of joints and terminals",
                "Balance loads across phases/feeders",
                "Inspect and replace worn contacts or breakers",
                "Clean ventilation paths and verify fan operation (if present)",
            ],
        },
    },
    Entry {
        system: System::Switchgear,
        symptom: Symptom::Vibration,
        finding: Finding::NotApplicable,
    },
    Entry {
        system: System::Switchgear,
        symptom: Symptom::Tripping,
        finding: Finding::Causes {
            causes: &[
                "Overcurrent or short circuit on downstream feeders",
                "Protection relay misoperation or faulty settings",
                "Earth fault or interphase short",
                "Mechanical latch failure in circuit breaker",
            ],
            actions: &[
                "Analyze trip records and relay logs",
                "Verify relay settings and coordination study",
                "Perform insulation resistance and loop tests",
                "Inspect circuit breaker mechanism and test tripping coil",
            ],
        },
    },
    Entry {
        system: System::Switchgear,
        symptom: Symptom::Leakage,
        finding: Finding::Causes {
            causes: &[
                "SF₆ gas leak in gas-insulated switchgear (GIS)",
                "Oil leak in older oil-type breakers",
                "Moisture ingress from door gaskets or conduit entry points",
                "Cable termination or sleeve degradation",
            ],
            actions: &[
                "Perform SF₆ gas pressure and leak test (for GIS)",
                "Inspect seals, gaskets, and cable entry points",
                "Replace degraded components and reseal enclosures",
                "Dry and test affected zones with insulation testing",
            ],
        },
    },
    Entry {
        system: System::Switchgear,
        symptom: Symptom::LowOutput,
        finding: Finding::NotApplicable,
    },
    Entry {
        system: System::Switchgear,
        symptom: Symptom::Noise,
        finding: Finding::Causes {
            causes: &[
                "Loose relays, contactors, or panel covers",
                "Magnetic hum from energized coils",
                "Arcing inside bus compartments",
                "Fan or auxiliary device vibration",
            ],
            actions: &[
                "Tighten internal components and panel fasteners",
                "Check for abnormal coil hum (possible overvoltage or DC offset)",
                "Perform visual inspection for arcing marks",
                "Inspect cooling fans or auxiliary devices",
            ],
        },
    },
    Entry {
        system: System::Switchgear,
        symptom: Symptom::ElectricalFlash,
        finding: Finding::Causes {
            causes: &[
                "Arc flash from loose or corroded connections",
                "Tracking due to contamination or insulation failure",
                "Improper breaker racking or interlock bypass",
                "High fault current or delayed clearing time",
            ],
            actions: &[
                "Conduct detailed visual inspection and thermal scan",
                "Clean and dry insulation surfaces",
                "Verify racking procedure and interlock integrity",
                "Perform arc flash study and ensure PPE compliance",
            ],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use upkeep_eval::{evaluate, EvalError, FactSet, InvalidInput};

    #[test]
    fn every_cell_is_authored_once() {
        assert_eq!(ENTRIES.len(), System::ALL.len() * Symptom::ALL.len());
        let cells: BTreeSet<(System, Symptom)> =
            ENTRIES.iter().map(|e| (e.system, e.symptom)).collect();
        assert_eq!(cells.len(), ENTRIES.len());
    }

    #[test]
    fn not_applicable_cells() {
        let na: Vec<(System, Symptom)> = ENTRIES
            .iter()
            .filter(|e| e.finding == Finding::NotApplicable)
            .map(|e| (e.system, e.symptom))
            .collect();
        assert_eq!(
            na,
            vec![
                (System::SteamTurbine, Symptom::ElectricalFlash),
                (System::Boiler, Symptom::ElectricalFlash),
                (System::Switchgear, Symptom::Vibration),
                (System::Switchgear, Symptom::LowOutput),
            ]
        );
    }

    #[test]
    fn rule_ids_are_slugs() {
        let e = Entry {
            system: System::PumpMotor,
            symptom: Symptom::LowOutput,
            finding: Finding::NotApplicable,
        };
        assert_eq!(e.rule_id(), "pump_motor_low_output");
    }

    #[test]
    fn authored_outcome_lists_causes_and_actions() {
        let rs = ruleset(ENTRIES).unwrap();
        let facts = FactSet::new()
            .with(SYSTEM, "Generator")
            .with(SYMPTOM, "Tripping");
        let d = evaluate(&rs, &facts).unwrap();
        assert_eq!(d.outcome.label, "Generator / Tripping");
        let c = causes(&d.outcome);
        assert_eq!(c.len(), 5);
        assert_eq!(c[4], "External trip");
        assert_eq!(actions(&d.outcome).len(), 4);
    }

    #[test]
    fn partial_table_rejects_missing_cells() {
        let rs = ruleset(&ENTRIES[..7]).unwrap();
        let facts = FactSet::new().with(SYSTEM, "Boiler").with(SYMPTOM, "Noise");
        let err = evaluate(&rs, &facts).unwrap_err();
        assert!(matches!(
            err,
            EvalError::InvalidInput(InvalidInput::Unauthored { .. })
        ));
    }

    #[test]
    fn not_applicable_has_no_lines() {
        let o = Outcome::new(NOT_APPLICABLE, NOT_APPLICABLE_REASON);
        assert!(is_not_applicable(&o));
        assert!(causes(&o).is_empty());
        assert!(actions(&o).is_empty());
    }
}
