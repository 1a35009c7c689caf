//! Chart series as JSON.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use expansa_common::ApiError;
use expansa_ranker::{
    analytics::{analytics, Analytics},
    apply_view, SelectionQuery, Summary,
};
use serde::Serialize;

use crate::handlers::parse_selection;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub summary: Summary,
    #[serde(flatten)]
    pub series: Analytics,
}

/// GET /api/analytics: Breakdown and distribution over the filtered rows.
pub async fn api_analytics(
    State(state): State<SharedState>,
    Query(query): Query<SelectionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let selection = parse_selection(&query)?;
    let view = apply_view(&state.indications, &selection);
    Ok(Json(AnalyticsResponse {
        series: analytics(&view.rows),
        summary: view.summary,
    }))
}
