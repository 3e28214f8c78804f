// Core algorithm exports
pub mod diagnosis;
pub mod eligibility;
pub mod matcher;
pub mod scoring;

pub use diagnosis::{build_next_steps, build_risks, estimate_effort, next_best_action};
pub use eligibility::{evaluate, EligibilityReport};
pub use matcher::{MatchRun, Matcher};
pub use scoring::{final_score, readiness_deductions};
