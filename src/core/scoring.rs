use crate::core::eligibility::EligibilityReport;
use crate::models::{CompanyProfile, DiagnosisCategory, DiagnosisItem, ScoringConfig};

/// Criterion labels shared between scoring and the next-step builder
pub const LABEL_PROJECT_DESCRIPTION: &str = "Projektbeschreibung";
pub const LABEL_COST_PLAN: &str = "Kostenstruktur";
pub const LABEL_TIMELINE: &str = "Zeitplan";

pub const MAX_SCORE: i32 = 100;

/// Check the application-readiness criteria of a profile.
///
/// Each criterion that is not yet documented is an `unclear` deduction: the
/// company is not disqualified, it just cannot demonstrate the item yet.
/// Documented criteria count as fulfilled with no deduction.
///
/// Returns the accumulated penalty and the diagnosis entries.
pub fn readiness_deductions(
    company: &CompanyProfile,
    config: &ScoringConfig,
) -> (i32, Vec<DiagnosisItem>) {
    let mut penalty = 0;
    let mut diagnosis = Vec::with_capacity(3);

    let checks = [
        (
            company.has_project_description(),
            LABEL_PROJECT_DESCRIPTION,
            "Projektbeschreibung liegt vor",
            "Konkrete Projektbeschreibung noch nicht erfasst",
            config.missing_description_penalty,
        ),
        (
            company.has_cost_plan(),
            LABEL_COST_PLAN,
            "Kostenplanung dokumentiert",
            "Detaillierte Kostenplanung fehlt noch",
            config.missing_cost_plan_penalty,
        ),
        (
            company.has_project_timeline(),
            LABEL_TIMELINE,
            "Projektzeitraum definiert",
            "Projektzeitraum nicht definiert",
            config.missing_timeline_penalty,
        ),
    ];

    for (documented, label, fulfilled_desc, unclear_desc, deduction) in checks {
        if documented {
            diagnosis.push(DiagnosisItem {
                category: DiagnosisCategory::Fulfilled,
                label: label.to_string(),
                description: fulfilled_desc.to_string(),
                impact: 0,
            });
        } else {
            penalty += deduction;
            diagnosis.push(DiagnosisItem {
                category: DiagnosisCategory::Unclear,
                label: label.to_string(),
                description: unclear_desc.to_string(),
                impact: -deduction,
            });
        }
    }

    (penalty, diagnosis)
}

/// Combine the deductions into the final 0-100 score.
///
/// Deductive model: start at 100 and subtract what is unmet or undocumented.
/// Ineligibility dominates; an ineligible pair scores 0 no matter how small
/// the accumulated deductions are.
pub fn final_score(eligibility: &EligibilityReport, readiness_penalty: i32) -> u8 {
    if !eligibility.eligible {
        return 0;
    }

    (MAX_SCORE - eligibility.penalty - readiness_penalty).clamp(0, MAX_SCORE) as u8
}
