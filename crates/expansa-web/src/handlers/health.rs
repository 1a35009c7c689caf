//! Liveness probe.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::state::SharedState;

/// GET /health
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "target": expansa_data::target().symbol,
        "indications": state.indications.len(),
        "edges": state.edges.len(),
    }))
}
