use actix_web::{error, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{
    DiagnosisItem, Effort, FundingProgram, MatchResult, MatchStatus, ProgramType,
};

/// One persistable match row: the engine's result plus the program summary
/// the UI renders and the workflow status the user drives later.
///
/// A fresh row id is stamped on every run; the consumer replaces the
/// company's previous set wholesale instead of merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    #[serde(rename = "companyId")]
    pub company_id: String,
    #[serde(rename = "programId")]
    pub program_id: String,
    #[serde(rename = "programName")]
    pub program_name: String,
    pub provider: String,
    #[serde(rename = "programType")]
    pub program_type: ProgramType,
    #[serde(rename = "maxAmount")]
    pub max_amount: Option<i64>,
    #[serde(rename = "fundingRate")]
    pub funding_rate: Option<u8>,
    pub status: MatchStatus,
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

impl MatchRecord {
    pub fn from_result(company_id: &str, program: &FundingProgram, result: MatchResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id: company_id.to_string(),
            program_id: result.program_id,
            program_name: program.name.clone(),
            provider: program.provider.clone(),
            program_type: program.program_type,
            max_amount: program.max_amount,
            funding_rate: program.funding_rate,
            status: MatchStatus::default(),
            score: result.score,
            max_potential_score: result.max_potential_score,
            eligible: result.eligible,
            diagnosis: result.diagnosis,
            reasons: result.reasons,
            risks: result.risks,
            next_steps: result.next_steps,
            next_best_action: result.next_best_action,
            estimated_effort: result.estimated_effort,
            estimated_timeline: result.estimated_timeline,
        }
    }
}

/// Response for the compute endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeMatchesResponse {
    #[serde(rename = "companyId")]
    pub company_id: String,
    pub matches: Vec<MatchRecord>,
    #[serde(rename = "totalPrograms")]
    pub total_programs: usize,
    #[serde(rename = "computedAt")]
    pub computed_at: chrono::DateTime<chrono::Utc>,
}

/// Active catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramsResponse {
    pub programs: Vec<FundingProgram>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub programs: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error envelope for all non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

impl error::ResponseError for ErrorResponse {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST),
        )
        .json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{CompanySize, ProgramType};

    #[test]
    fn test_record_from_result_seeds_discovered() {
        let program = FundingProgram {
            id: "p1".to_string(),
            name: "Digital Jetzt".to_string(),
            provider: "BMWK".to_string(),
            program_type: ProgramType::Grant,
            max_amount: Some(50_000),
            funding_rate: Some(50),
            is_recurring: false,
            deadline: None,
            url: None,
            description: None,
            is_active: true,
            target_sizes: vec![CompanySize::Small],
            target_states: vec![],
            requires_rd: false,
            requires_digital: true,
            requires_green: false,
        };

        let result = MatchResult {
            program_id: "p1".to_string(),
            score: 70,
            max_potential_score: 100,
            eligible: true,
            diagnosis: vec![],
            reasons: vec![],
            risks: vec![],
            next_steps: vec![],
            next_best_action: "Projektbeschreibung konkretisieren".to_string(),
            estimated_effort: Effort::Medium,
            estimated_timeline: "2-4 Wochen".to_string(),
        };

        let record = MatchRecord::from_result("c1", &program, result);

        assert_eq!(record.status, MatchStatus::Discovered);
        assert_eq!(record.program_name, "Digital Jetzt");
        assert_eq!(record.company_id, "c1");
        assert_eq!(record.score, 70);
    }
}
