use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    ComputeMatchesRequest, ComputeMatchesResponse, ErrorResponse, HealthResponse, MatchRecord,
    ProgramsResponse,
};
use crate::services::ProgramCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProgramCatalog>,
    pub matcher: Matcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/compute", web::post().to(compute_matches))
        .route("/programs", web::get().to(list_programs));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // An empty catalog means the service cannot produce matches
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        programs: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Compute matches endpoint
///
/// POST /api/v1/matches/compute
///
/// Body: the company profile as submitted by onboarding, plus an optional
/// `limit`. Scores the active catalog, ranks the eligible results and returns
/// the records the caller persists as the company's new match set (replacing
/// the previous one wholesale).
async fn compute_matches(
    state: web::Data<AppState>,
    req: web::Json<ComputeMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for compute_matches: companyId={:?}, errors={}",
            req.company_id,
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    let company = req.to_profile();
    let programs = state.catalog.active_programs();

    tracing::info!(
        "Computing matches for company {} against {} active programs",
        company.id,
        programs.len()
    );

    let run = state.matcher.compute_matches(&company, &programs);
    let total_programs = run.total_programs;
    let mut ranked = state.matcher.rank(run.results);
    ranked.truncate(limit);

    let by_id: HashMap<&str, &crate::models::FundingProgram> =
        programs.iter().map(|p| (p.id.as_str(), p)).collect();

    let matches: Vec<MatchRecord> = ranked
        .into_iter()
        .filter_map(|result| {
            by_id
                .get(result.program_id.as_str())
                .map(|program| MatchRecord::from_result(&company.id, program, result))
        })
        .collect();

    tracing::info!(
        "Returning {} ranked matches for company {} (from {} programs)",
        matches.len(),
        company.id,
        total_programs
    );

    HttpResponse::Ok().json(ComputeMatchesResponse {
        company_id: company.id,
        matches,
        total_programs,
        computed_at: chrono::Utc::now(),
    })
}

/// List the currently active program catalog
///
/// GET /api/v1/programs
async fn list_programs(state: web::Data<AppState>) -> impl Responder {
    let programs = state.catalog.active_programs();
    let count = programs.len();

    HttpResponse::Ok().json(ProgramsResponse { programs, count })
}
