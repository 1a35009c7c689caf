//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::dashboard,
    indications::{api_indications, api_indication_detail, indication_page},
    network::{network_page, api_network},
    landscape::landscape_page,
    analytics::api_analytics,
    export::export_csv,
    request::request_analysis,
    health::health,
};

/// Path and purpose of every route, logged at start-up.
pub const ROUTES: &[(&str, &str)] = &[
    ("/",                         "Indication discovery dashboard"),
    ("/indications/{name}",       "Indication deep-dive"),
    ("/network",                  "Target-pathway-indication network"),
    ("/landscape",                "Competitive landscape & methodology"),
    ("/api/indications",          "Filtered indications (JSON)"),
    ("/api/indications/{name}",   "Indication detail (JSON)"),
    ("/api/network",              "Network graph (JSON)"),
    ("/api/analytics",            "Chart series (JSON)"),
    ("/export/indications.csv",   "CSV export of the current view"),
    ("/request-analysis",         "Full analysis request (POST)"),
    ("/health",                   "Health check"),
];

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                    get(dashboard))
        .route("/indications/{name}",  get(indication_page))
        .route("/network",             get(network_page))
        .route("/landscape",           get(landscape_page))
        .route("/request-analysis",    post(request_analysis))

        // API endpoints
        .route("/api/indications",         get(api_indications))
        .route("/api/indications/{name}",  get(api_indication_detail))
        .route("/api/network",             get(api_network))
        .route("/api/analytics",           get(api_analytics))
        .route("/export/indications.csv",  get(export_csv))
        .route("/health",                  get(health))

        // Static files
        .nest_service("/static", ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
