use crate::core::scoring::{LABEL_COST_PLAN, LABEL_PROJECT_DESCRIPTION, LABEL_TIMELINE};
use crate::models::{
    DiagnosisCategory, DiagnosisItem, Effort, FundingProgram, ProgramType, ScoringConfig,
};

/// Program-type-specific cautions.
///
/// Loans carry repayment and interest risk, grants carry approval uncertainty
/// plus a co-financing share when the funding rate leaves a relevant own
/// share, and R&D-gated programs carry scope-delineation risk.
pub fn build_risks(program: &FundingProgram, config: &ScoringConfig) -> Vec<String> {
    let mut risks = Vec::new();

    match program.program_type {
        ProgramType::Loan => {
            risks.push("Kredit muss zurückgezahlt werden".to_string());
            risks.push("Zinsen können je nach Bonität variieren".to_string());
        }
        ProgramType::Grant => {
            risks.push("Bewilligung nicht garantiert - Antragsqualität entscheidend".to_string());
            if let Some(rate) = program.funding_rate {
                if rate < config.co_financing_threshold {
                    risks.push(format!(
                        "Eigenanteil von {}% erforderlich",
                        100 - u32::from(rate)
                    ));
                }
            }
        }
        ProgramType::Tax | ProgramType::Guarantee => {}
    }

    if program.requires_rd {
        risks.push("F&E muss klar vom Tagesgeschäft abgegrenzt sein".to_string());
        risks.push("Technisches Risiko/Neuheit muss nachweisbar sein".to_string());
    }

    risks
}

/// One next step per outstanding unclear/missing readiness item, plus the
/// generic eligibility check everyone gets.
pub fn build_next_steps(diagnosis: &[DiagnosisItem]) -> Vec<String> {
    let outstanding = |label: &str| {
        diagnosis.iter().any(|d| {
            d.label == label
                && matches!(
                    d.category,
                    DiagnosisCategory::Missing | DiagnosisCategory::Unclear
                )
        })
    };

    let mut steps = Vec::new();
    if outstanding(LABEL_PROJECT_DESCRIPTION) {
        steps.push("Projektbeschreibung erstellen (1-2 Seiten)".to_string());
    }
    if outstanding(LABEL_COST_PLAN) {
        steps.push("Kostenplan mit Kostenarten aufstellen".to_string());
    }
    if outstanding(LABEL_TIMELINE) {
        steps.push("Projektzeitraum und Meilensteine definieren".to_string());
    }
    steps.push("Förderfähigkeit im Detail prüfen".to_string());

    steps
}

/// Single prioritized recommendation, fixed decision order: hard-missing
/// criteria dominate, then the strong-fit and draft thresholds.
pub fn next_best_action(eligible: bool, score: u8, config: &ScoringConfig) -> String {
    if !eligible {
        "Programm nicht geeignet - andere Option prüfen".to_string()
    } else if score >= config.strong_fit_threshold {
        "Antrag vorbereiten - gute Passform!".to_string()
    } else if score >= config.draft_threshold {
        "Projektbeschreibung konkretisieren".to_string()
    } else {
        "Erst Projekt schärfen, dann erneut prüfen".to_string()
    }
}

/// Effort and timeline estimate for one program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffortEstimate {
    pub effort: Effort,
    pub timeline: &'static str,
}

/// One row of the effort decision table. `None` fields match anything.
struct EffortRule {
    program_type: Option<ProgramType>,
    ceiling_above: Option<i64>,
    estimate: EffortEstimate,
}

impl EffortRule {
    fn matches(&self, program: &FundingProgram) -> bool {
        let type_ok = self
            .program_type
            .map_or(true, |t| t == program.program_type);
        let ceiling_ok = self
            .ceiling_above
            .map_or(true, |min| program.max_amount.map_or(false, |a| a > min));
        type_ok && ceiling_ok
    }
}

/// Estimate application effort from the program type and ceiling bracket.
///
/// Kept as an explicit decision table (first matching row wins, last row is
/// the catch-all) so the brackets can be tuned without touching scoring.
pub fn estimate_effort(program: &FundingProgram, config: &ScoringConfig) -> EffortEstimate {
    let rules = [
        EffortRule {
            program_type: Some(ProgramType::Tax),
            ceiling_above: None,
            estimate: EffortEstimate {
                effort: Effort::Low,
                timeline: "1-2 Wochen",
            },
        },
        EffortRule {
            program_type: Some(ProgramType::Grant),
            ceiling_above: Some(config.high_ceiling_amount),
            estimate: EffortEstimate {
                effort: Effort::High,
                timeline: "4-8 Wochen",
            },
        },
        EffortRule {
            program_type: None,
            ceiling_above: None,
            estimate: EffortEstimate {
                effort: Effort::Medium,
                timeline: "2-4 Wochen",
            },
        },
    ];

    rules
        .iter()
        .find(|rule| rule.matches(program))
        .map(|rule| rule.estimate)
        .unwrap_or(EffortEstimate {
            effort: Effort::Medium,
            timeline: "2-4 Wochen",
        })
}
