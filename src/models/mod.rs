// Model exports
pub mod domain;
pub mod labels;
pub mod requests;
pub mod responses;

pub use domain::{
    CompanyProfile, CompanySize, DiagnosisCategory, DiagnosisItem, Effort, FundingProgram,
    MatchResult, MatchStatus, ProgramType, ScoringConfig,
};
pub use requests::ComputeMatchesRequest;
pub use responses::{
    ComputeMatchesResponse, ErrorResponse, HealthResponse, MatchRecord, ProgramsResponse,
};
