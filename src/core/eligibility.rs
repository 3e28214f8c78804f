use crate::models::labels::{size_label, state_label};
use crate::models::{
    CompanyProfile, DiagnosisCategory, DiagnosisItem, FundingProgram, ScoringConfig,
};

/// Outcome of the hard-criteria checks for one company/program pair.
///
/// Ineligibility is an expected result, not an error. The diagnosis trail is
/// produced for every check so the caller can always explain *why*.
#[derive(Debug, Clone)]
pub struct EligibilityReport {
    pub eligible: bool,
    /// Dimension penalties accumulated against the score
    pub penalty: i32,
    pub diagnosis: Vec<DiagnosisItem>,
    pub reasons: Vec<String>,
}

/// Evaluate all hard criteria: size restriction, state restriction and the
/// required activity dimensions. Each check is independent and always emits a
/// diagnosis item; any failed check drops eligibility.
pub fn evaluate(
    company: &CompanyProfile,
    program: &FundingProgram,
    config: &ScoringConfig,
) -> EligibilityReport {
    let mut report = EligibilityReport {
        eligible: true,
        penalty: 0,
        diagnosis: Vec::new(),
        reasons: Vec::new(),
    };

    check_size(company, program, config, &mut report);
    check_state(company, program, config, &mut report);
    check_dimensions(company, program, config, &mut report);

    report
}

fn check_size(
    company: &CompanyProfile,
    program: &FundingProgram,
    config: &ScoringConfig,
    report: &mut EligibilityReport,
) {
    // Empty target set means the program is open to all sizes
    if program.target_sizes.is_empty() {
        return;
    }

    if program.target_sizes.contains(&company.size) {
        report.diagnosis.push(DiagnosisItem {
            category: DiagnosisCategory::Fulfilled,
            label: "Unternehmensgröße".to_string(),
            description: format!("{} passt zu den Förderkriterien", size_label(company.size)),
            impact: 0,
        });
        report.reasons.push("Unternehmensgröße passt".to_string());
    } else {
        report.eligible = false;
        let targets = program
            .target_sizes
            .iter()
            .map(|s| size_label(*s))
            .collect::<Vec<_>>()
            .join(", ");
        report.diagnosis.push(DiagnosisItem {
            category: DiagnosisCategory::Missing,
            label: "Unternehmensgröße".to_string(),
            description: format!("Programm nur für {}", targets),
            impact: -config.hard_criterion_penalty,
        });
    }
}

fn check_state(
    company: &CompanyProfile,
    program: &FundingProgram,
    config: &ScoringConfig,
    report: &mut EligibilityReport,
) {
    if program.target_states.is_empty() {
        report.diagnosis.push(DiagnosisItem {
            category: DiagnosisCategory::Fulfilled,
            label: "Bundesland".to_string(),
            description: "Bundesweites Programm - keine regionale Einschränkung".to_string(),
            impact: 0,
        });
        return;
    }

    if program.target_states.iter().any(|s| s == &company.state) {
        report.diagnosis.push(DiagnosisItem {
            category: DiagnosisCategory::Fulfilled,
            label: "Bundesland".to_string(),
            description: format!("Regionales Programm für {}", state_label(&company.state)),
            impact: 0,
        });
        report
            .reasons
            .push("Regionales Förderprogramm für dein Bundesland".to_string());
    } else {
        report.eligible = false;
        let states = program
            .target_states
            .iter()
            .map(|s| state_label(s))
            .collect::<Vec<_>>()
            .join(", ");
        report.diagnosis.push(DiagnosisItem {
            category: DiagnosisCategory::Missing,
            label: "Bundesland".to_string(),
            description: format!("Nur verfügbar in: {}", states),
            impact: -config.hard_criterion_penalty,
        });
    }
}

fn check_dimensions(
    company: &CompanyProfile,
    program: &FundingProgram,
    config: &ScoringConfig,
    report: &mut EligibilityReport,
) {
    if program.requires_rd {
        if company.has_rd() {
            report.diagnosis.push(DiagnosisItem {
                category: DiagnosisCategory::Fulfilled,
                label: "F&E-Aktivität".to_string(),
                description: "Forschung & Entwicklung vorhanden".to_string(),
                impact: 0,
            });
            report
                .reasons
                .push("F&E-Aktivitäten erfüllen Grundvoraussetzung".to_string());
        } else {
            fail_dimension(
                report,
                config,
                "F&E-Aktivität",
                "Programm erfordert nachweisbare F&E-Tätigkeit",
            );
        }
    }

    if program.requires_digital {
        if company.has_digital() {
            report.diagnosis.push(DiagnosisItem {
                category: DiagnosisCategory::Fulfilled,
                label: "Digitalisierung".to_string(),
                description: "Digitalisierungsvorhaben geplant".to_string(),
                impact: 0,
            });
            report
                .reasons
                .push("Digitalisierungsvorhaben passt zum Programm".to_string());
        } else {
            fail_dimension(
                report,
                config,
                "Digitalisierung",
                "Programm erfordert Digitalisierungsprojekt",
            );
        }
    }

    if program.requires_green {
        if company.has_green() {
            report.diagnosis.push(DiagnosisItem {
                category: DiagnosisCategory::Fulfilled,
                label: "Nachhaltigkeit".to_string(),
                description: "Nachhaltigkeitsmaßnahmen geplant".to_string(),
                impact: 0,
            });
            report
                .reasons
                .push("Nachhaltigkeitsvorhaben erfüllt Kriterien".to_string());
        } else {
            fail_dimension(
                report,
                config,
                "Nachhaltigkeit",
                "Programm erfordert Klimaschutz-/Nachhaltigkeitsprojekt",
            );
        }
    }
}

fn fail_dimension(
    report: &mut EligibilityReport,
    config: &ScoringConfig,
    label: &str,
    description: &str,
) {
    report.eligible = false;
    report.penalty += config.dimension_penalty;
    report.diagnosis.push(DiagnosisItem {
        category: DiagnosisCategory::Missing,
        label: label.to_string(),
        description: description.to_string(),
        impact: -config.dimension_penalty,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanySize;

    fn company(size: CompanySize, state: &str) -> CompanyProfile {
        CompanyProfile {
            id: "c1".to_string(),
            name: "Muster GmbH".to_string(),
            industry: "it".to_string(),
            state: state.to_string(),
            size,
            rd_active: false,
            digital_active: false,
            green_active: false,
            plan_innovation: false,
            plan_digital: false,
            plan_green: false,
            plan_investment: false,
            plan_hiring: false,
            project_description: None,
            cost_plan: None,
            project_timeline: None,
        }
    }

    fn open_program() -> FundingProgram {
        FundingProgram {
            id: "p1".to_string(),
            name: "Testprogramm".to_string(),
            provider: "Bund".to_string(),
            program_type: crate::models::ProgramType::Grant,
            max_amount: None,
            funding_rate: None,
            is_recurring: true,
            deadline: None,
            url: None,
            description: None,
            is_active: true,
            target_sizes: vec![],
            target_states: vec![],
            requires_rd: false,
            requires_digital: false,
            requires_green: false,
        }
    }

    #[test]
    fn test_open_program_is_eligible() {
        let report = evaluate(
            &company(CompanySize::Small, "BY"),
            &open_program(),
            &ScoringConfig::default(),
        );

        assert!(report.eligible);
        assert_eq!(report.penalty, 0);
        // Nationwide program still gets a fulfilled state entry
        assert!(report
            .diagnosis
            .iter()
            .any(|d| d.label == "Bundesland" && d.category == DiagnosisCategory::Fulfilled));
    }

    #[test]
    fn test_size_restriction_disqualifies() {
        let mut program = open_program();
        program.target_sizes = vec![CompanySize::Large];

        let report = evaluate(
            &company(CompanySize::Micro, "NW"),
            &program,
            &ScoringConfig::default(),
        );

        assert!(!report.eligible);
        let missing: Vec<_> = report
            .diagnosis
            .iter()
            .filter(|d| d.category == DiagnosisCategory::Missing)
            .collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].label, "Unternehmensgröße");
        assert_eq!(missing[0].impact, -100);
    }

    #[test]
    fn test_state_restriction_disqualifies() {
        let mut program = open_program();
        program.target_states = vec!["BW".to_string(), "BY".to_string()];

        let report = evaluate(
            &company(CompanySize::Small, "HH"),
            &program,
            &ScoringConfig::default(),
        );

        assert!(!report.eligible);
        assert!(report
            .diagnosis
            .iter()
            .any(|d| d.label == "Bundesland"
                && d.category == DiagnosisCategory::Missing
                && d.description.contains("Baden-Württemberg")));
    }

    #[test]
    fn test_regional_match_adds_reason() {
        let mut program = open_program();
        program.target_states = vec!["BY".to_string()];

        let report = evaluate(
            &company(CompanySize::Small, "BY"),
            &program,
            &ScoringConfig::default(),
        );

        assert!(report.eligible);
        assert!(report
            .reasons
            .iter()
            .any(|r| r.contains("Regionales Förderprogramm")));
    }

    #[test]
    fn test_planned_activity_satisfies_requirement() {
        let mut program = open_program();
        program.requires_digital = true;

        let mut c = company(CompanySize::Small, "BY");
        c.plan_digital = true;

        let report = evaluate(&c, &program, &ScoringConfig::default());
        assert!(report.eligible);
        assert_eq!(report.penalty, 0);
    }

    #[test]
    fn test_unmet_dimension_penalizes_and_disqualifies() {
        let mut program = open_program();
        program.requires_rd = true;
        program.requires_green = true;

        let report = evaluate(
            &company(CompanySize::Small, "BY"),
            &program,
            &ScoringConfig::default(),
        );

        assert!(!report.eligible);
        assert_eq!(report.penalty, 60);
        assert_eq!(
            report
                .diagnosis
                .iter()
                .filter(|d| d.category == DiagnosisCategory::Missing)
                .count(),
            2
        );
    }
}
