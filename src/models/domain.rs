use serde::{Deserialize, Serialize};

/// Company size classes, banded by employee count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanySize {
    Micro,
    Small,
    Medium,
    Large,
}

impl CompanySize {
    /// Lenient parser for catalog data. Unknown codes yield `None` so a
    /// malformed program entry never aborts catalog loading.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MICRO" => Some(CompanySize::Micro),
            "SMALL" => Some(CompanySize::Small),
            "MEDIUM" => Some(CompanySize::Medium),
            "LARGE" => Some(CompanySize::Large),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            CompanySize::Micro => "MICRO",
            CompanySize::Small => "SMALL",
            CompanySize::Medium => "MEDIUM",
            CompanySize::Large => "LARGE",
        }
    }
}

/// Funding program types as delivered by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgramType {
    Grant,
    Loan,
    Tax,
    Guarantee,
}

/// Pipeline status of a persisted match. This is user-driven workflow state;
/// the engine only seeds new records with `Discovered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Discovered,
    Shortlisted,
    Preparing,
    Submitted,
    Won,
    Lost,
}

/// Application effort estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Effort {
    Low,
    Medium,
    High,
}

/// Category of a diagnosis entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisCategory {
    Fulfilled,
    Unclear,
    Missing,
}

/// One labeled, score-affecting factor in the match explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisItem {
    pub category: DiagnosisCategory,
    pub label: String,
    pub description: String,
    /// Score delta this entry contributed (0 or negative)
    pub impact: i32,
}

/// Company profile as captured by onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    pub state: String,
    pub size: CompanySize,
    #[serde(rename = "rdActive", default)]
    pub rd_active: bool,
    #[serde(rename = "digitalActive", default)]
    pub digital_active: bool,
    #[serde(rename = "greenActive", default)]
    pub green_active: bool,
    #[serde(rename = "planInnovation", default)]
    pub plan_innovation: bool,
    #[serde(rename = "planDigital", default)]
    pub plan_digital: bool,
    #[serde(rename = "planGreen", default)]
    pub plan_green: bool,
    #[serde(rename = "planInvestment", default)]
    pub plan_investment: bool,
    #[serde(rename = "planHiring", default)]
    pub plan_hiring: bool,
    /// Application readiness. Unset fields are scored as undocumented.
    #[serde(rename = "projectDescription", default)]
    pub project_description: Option<String>,
    #[serde(rename = "costPlan", default)]
    pub cost_plan: Option<String>,
    #[serde(rename = "projectTimeline", default)]
    pub project_timeline: Option<String>,
}

impl CompanyProfile {
    /// R&D counts as present when it is active today or concretely planned
    pub fn has_rd(&self) -> bool {
        self.rd_active || self.plan_innovation
    }

    pub fn has_digital(&self) -> bool {
        self.digital_active || self.plan_digital
    }

    pub fn has_green(&self) -> bool {
        self.green_active || self.plan_green
    }

    pub fn has_project_description(&self) -> bool {
        is_documented(&self.project_description)
    }

    pub fn has_cost_plan(&self) -> bool {
        is_documented(&self.cost_plan)
    }

    pub fn has_project_timeline(&self) -> bool {
        is_documented(&self.project_timeline)
    }
}

fn is_documented(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |s| !s.trim().is_empty())
}

/// Funding program as delivered by the catalog provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingProgram {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub program_type: ProgramType,
    /// Monetary ceiling in EUR, if the program has one
    #[serde(rename = "maxAmount", default)]
    pub max_amount: Option<i64>,
    /// Funding rate in percent of eligible costs
    #[serde(rename = "fundingRate", default)]
    pub funding_rate: Option<u8>,
    #[serde(rename = "isRecurring", default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub deadline: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    /// Empty means no size restriction
    #[serde(rename = "targetSizes", default, deserialize_with = "lenient_sizes")]
    pub target_sizes: Vec<CompanySize>,
    /// Bundesland codes; empty means nationwide
    #[serde(rename = "targetStates", default)]
    pub target_states: Vec<String>,
    #[serde(rename = "requiresRD", default)]
    pub requires_rd: bool,
    #[serde(rename = "requiresDigital", default)]
    pub requires_digital: bool,
    #[serde(rename = "requiresGreen", default)]
    pub requires_green: bool,
}

fn default_true() -> bool {
    true
}

/// Deserialize size codes leniently: unknown codes are dropped instead of
/// failing the whole catalog. A dropped code can never match a company, which
/// keeps the set non-matching for that value.
fn lenient_sizes<'de, D>(deserializer: D) -> Result<Vec<CompanySize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;
    let mut sizes = Vec::with_capacity(raw.len());
    for code in &raw {
        match CompanySize::from_code(code) {
            Some(size) => sizes.push(size),
            None => tracing::warn!("Dropping unknown size code in catalog: {}", code),
        }
    }
    Ok(sizes)
}

/// Scored match for one company/program pair. Computed fresh on every run;
/// consumers replace previously stored results rather than merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "programId")]
    pub program_id: String,
    pub score: u8,
    #[serde(rename = "maxPotentialScore")]
    pub max_potential_score: u8,
    pub eligible: bool,
    pub diagnosis: Vec<DiagnosisItem>,
    pub reasons: Vec<String>,
    pub risks: Vec<String>,
    #[serde(rename = "nextSteps")]
    pub next_steps: Vec<String>,
    #[serde(rename = "nextBestAction")]
    pub next_best_action: String,
    #[serde(rename = "estimatedEffort")]
    pub estimated_effort: Effort,
    #[serde(rename = "estimatedTimeline")]
    pub estimated_timeline: String,
}

/// Scoring deductions and thresholds. Advisory defaults; production values
/// come from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// Deduction recorded for a failed hard size/state criterion
    pub hard_criterion_penalty: i32,
    /// Deduction per unmet activity dimension (R&D, digital, green)
    pub dimension_penalty: i32,
    pub missing_description_penalty: i32,
    pub missing_cost_plan_penalty: i32,
    pub missing_timeline_penalty: i32,
    /// Minimum score for a match to enter the ranked set
    pub min_score: u8,
    /// Score at which an application is worth preparing right away
    pub strong_fit_threshold: u8,
    /// Score at which sharpening the project description is the next step
    pub draft_threshold: u8,
    /// Funding rates below this flag a co-financing risk
    pub co_financing_threshold: u8,
    /// Grant ceilings above this bracket as high-effort applications
    pub high_ceiling_amount: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hard_criterion_penalty: 100,
            dimension_penalty: 30,
            missing_description_penalty: 15,
            missing_cost_plan_penalty: 10,
            missing_timeline_penalty: 5,
            min_score: 40,
            strong_fit_threshold: 80,
            draft_threshold: 60,
            co_financing_threshold: 80,
            high_ceiling_amount: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_code() {
        assert_eq!(CompanySize::from_code("SMALL"), Some(CompanySize::Small));
        assert_eq!(CompanySize::from_code("XXL"), None);
    }

    #[test]
    fn test_unknown_target_size_dropped() {
        let json = r#"{
            "id": "p1",
            "name": "Testprogramm",
            "provider": "Bund",
            "type": "GRANT",
            "targetSizes": ["SMALL", "ENTERPRISE", "MEDIUM"]
        }"#;

        let program: FundingProgram = serde_json::from_str(json).unwrap();
        assert_eq!(
            program.target_sizes,
            vec![CompanySize::Small, CompanySize::Medium]
        );
        assert!(program.is_active);
    }

    #[test]
    fn test_company_flags_default_false() {
        let json = r#"{
            "id": "c1",
            "name": "Muster GmbH",
            "state": "BY",
            "size": "SMALL"
        }"#;

        let company: CompanyProfile = serde_json::from_str(json).unwrap();
        assert!(!company.has_rd());
        assert!(!company.has_digital());
        assert!(!company.has_project_description());
    }

    #[test]
    fn test_blank_readiness_field_counts_as_absent() {
        let json = r#"{
            "id": "c1",
            "name": "Muster GmbH",
            "state": "BY",
            "size": "SMALL",
            "projectDescription": "   "
        }"#;

        let company: CompanyProfile = serde_json::from_str(json).unwrap();
        assert!(!company.has_project_description());
    }
}
