mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, middleware, web, App, HttpServer};
use crate::config::Settings;
use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::routes::matches::AppState;
use crate::services::ProgramCatalog;
use std::sync::Arc;
use tracing::{error, info};

/// Handle JSON payload errors with the structured error envelope
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Fundara Algo matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the program catalog
    let catalog = Arc::new(
        ProgramCatalog::load(&settings.catalog.path).unwrap_or_else(|e| {
            error!(
                "Failed to load program catalog from {}: {}",
                settings.catalog.path, e
            );
            panic!("Catalog error: {}", e);
        }),
    );

    if catalog.is_empty() {
        error!("Program catalog is empty - matches cannot be computed");
    }

    // Initialize matcher with configured deductions and thresholds
    let scoring = settings.scoring_config();
    let matcher = Matcher::new(scoring);

    info!("Matcher initialized with scoring config: {:?}", scoring);

    // Build application state
    let default_limit = settings.matching.default_limit.unwrap_or(20) as usize;
    let max_limit = settings.matching.max_limit.unwrap_or(100) as usize;

    let app_state = AppState {
        catalog,
        matcher,
        default_limit,
        max_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
