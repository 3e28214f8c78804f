use crate::core::{diagnosis, eligibility, scoring};
use crate::models::{CompanyProfile, FundingProgram, MatchResult, ScoringConfig};

/// Result of one matching run over the catalog
#[derive(Debug)]
pub struct MatchRun {
    /// All scored programs, sorted descending by score
    pub results: Vec<MatchResult>,
    pub total_programs: usize,
}

/// Matching orchestrator.
///
/// # Pipeline stages
/// 1. Hard eligibility criteria (size, state, activity dimensions)
/// 2. Deductive scoring from 100 with readiness deductions
/// 3. Explanation building (diagnosis, reasons, risks, next steps)
/// 4. Ranking against the minimum-score threshold
///
/// The whole pipeline is a pure function of its inputs: no I/O, no shared
/// state, identical inputs give identical output. Programs are scored
/// independently of each other.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: ScoringConfig,
}

impl Matcher {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single company/program pair
    pub fn score_program(&self, company: &CompanyProfile, program: &FundingProgram) -> MatchResult {
        let report = eligibility::evaluate(company, program, &self.config);
        let (readiness_penalty, readiness_items) =
            scoring::readiness_deductions(company, &self.config);

        let score = scoring::final_score(&report, readiness_penalty);

        let mut diagnosis_items = report.diagnosis;
        diagnosis_items.extend(readiness_items);

        let risks = diagnosis::build_risks(program, &self.config);
        let next_steps = diagnosis::build_next_steps(&diagnosis_items);
        let next_best_action = diagnosis::next_best_action(report.eligible, score, &self.config);
        let estimate = diagnosis::estimate_effort(program, &self.config);

        MatchResult {
            program_id: program.id.clone(),
            score,
            max_potential_score: scoring::MAX_SCORE as u8,
            eligible: report.eligible,
            diagnosis: diagnosis_items,
            reasons: report.reasons,
            risks,
            next_steps,
            next_best_action,
            estimated_effort: estimate.effort,
            estimated_timeline: estimate.timeline.to_string(),
        }
    }

    /// Score every program in the catalog for one company.
    ///
    /// Results are sorted descending by score; the sort is stable, so equal
    /// scores keep catalog order. Ineligible programs are included with their
    /// full diagnosis so the caller can explain why they were ruled out.
    pub fn compute_matches(
        &self,
        company: &CompanyProfile,
        programs: &[FundingProgram],
    ) -> MatchRun {
        let mut results: Vec<MatchResult> = programs
            .iter()
            .map(|program| self.score_program(company, program))
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));

        MatchRun {
            results,
            total_programs: programs.len(),
        }
    }

    /// Keep only matches worth persisting as the company's active set:
    /// eligible and at or above the minimum score. Order is preserved.
    ///
    /// The caller replaces any previously stored set in one atomic operation;
    /// matches are a derived projection, not source-of-truth data.
    pub fn rank(&self, results: Vec<MatchResult>) -> Vec<MatchResult> {
        results
            .into_iter()
            .filter(|r| r.eligible && r.score >= self.config.min_score)
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanySize, ProgramType};

    fn company() -> CompanyProfile {
        CompanyProfile {
            id: "c1".to_string(),
            name: "Muster GmbH".to_string(),
            industry: "it".to_string(),
            state: "BY".to_string(),
            size: CompanySize::Small,
            rd_active: true,
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

    fn program(id: &str) -> FundingProgram {
        FundingProgram {
            id: id.to_string(),
            name: format!("Programm {}", id),
            provider: "Bund".to_string(),
            program_type: ProgramType::Grant,
            max_amount: Some(50_000),
            funding_rate: Some(50),
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
    fn test_open_program_scores_seventy() {
        // 100 minus the three undocumented readiness items (15 + 10 + 5)
        let matcher = Matcher::with_defaults();
        let result = matcher.score_program(&company(), &program("p1"));

        assert!(result.eligible);
        assert_eq!(result.score, 70);
        assert_eq!(result.max_potential_score, 100);
    }

    #[test]
    fn test_rd_requirement_satisfied_no_deduction() {
        let matcher = Matcher::with_defaults();
        let mut p = program("p1");
        p.requires_rd = true;

        let result = matcher.score_program(&company(), &p);

        assert!(result.eligible);
        assert_eq!(result.score, 70);
        assert!(result
            .reasons
            .iter()
            .any(|r| r.contains("F&E-Aktivitäten")));
    }

    #[test]
    fn test_size_mismatch_scores_zero() {
        let matcher = Matcher::with_defaults();
        let mut p = program("p1");
        p.target_sizes = vec![CompanySize::Large];

        let result = matcher.score_program(&company(), &p);

        assert!(!result.eligible);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_results_sorted_descending() {
        let matcher = Matcher::with_defaults();

        let open = program("open");
        let mut gated = program("gated");
        gated.requires_green = true; // unmet -> ineligible, score 0

        let run = matcher.compute_matches(&company(), &[gated, open]);

        assert_eq!(run.total_programs, 2);
        assert_eq!(run.results[0].program_id, "open");
        assert!(run.results[0].score >= run.results[1].score);
    }

    #[test]
    fn test_stable_order_for_equal_scores() {
        let matcher = Matcher::with_defaults();
        let programs = vec![program("a"), program("b"), program("c")];

        let run = matcher.compute_matches(&company(), &programs);

        let ids: Vec<&str> = run.results.iter().map(|r| r.program_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rank_drops_ineligible_and_low_scores() {
        let matcher = Matcher::with_defaults();

        let open = program("open");
        let mut gated = program("gated");
        gated.requires_rd = true;
        gated.requires_digital = true;
        gated.requires_green = true;

        let run = matcher.compute_matches(&company(), &[open, gated]);
        let ranked = matcher.rank(run.results);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].program_id, "open");
        assert!(ranked.iter().all(|r| r.eligible && r.score >= 40));
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let matcher = Matcher::with_defaults();
        let programs = vec![program("a"), program("b")];

        let first = matcher.compute_matches(&company(), &programs);
        let second = matcher.compute_matches(&company(), &programs);

        let scores = |run: &MatchRun| {
            run.results
                .iter()
                .map(|r| (r.program_id.clone(), r.score, r.eligible))
                .collect::<Vec<_>>()
        };
        assert_eq!(scores(&first), scores(&second));
    }
}
