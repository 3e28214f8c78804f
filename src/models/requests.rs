use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{CompanyProfile, CompanySize};

/// Request to compute matches for a company.
///
/// Carries the company profile flat, the way the onboarding flow submits it.
/// Identity fields are validated here at the boundary; the engine itself
/// never rejects input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComputeMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "company_id", rename = "companyId")]
    pub company_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[validate(length(equal = 2))]
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
    #[serde(rename = "projectDescription", default)]
    pub project_description: Option<String>,
    #[serde(rename = "costPlan", default)]
    pub cost_plan: Option<String>,
    #[serde(rename = "projectTimeline", default)]
    pub project_timeline: Option<String>,
    /// Cap on the number of ranked matches returned
    #[serde(default)]
    pub limit: Option<u16>,
}

impl ComputeMatchesRequest {
    pub fn to_profile(&self) -> CompanyProfile {
        CompanyProfile {
            id: self.company_id.clone(),
            name: self.name.clone(),
            industry: self.industry.clone(),
            state: self.state.clone(),
            size: self.size,
            rd_active: self.rd_active,
            digital_active: self.digital_active,
            green_active: self.green_active,
            plan_innovation: self.plan_innovation,
            plan_digital: self.plan_digital,
            plan_green: self.plan_green,
            plan_investment: self.plan_investment,
            plan_hiring: self.plan_hiring,
            project_description: self.project_description.clone(),
            cost_plan: self.cost_plan.clone(),
            project_timeline: self.project_timeline.clone(),
        }
    }
}
