//! Target → pathway → indication network.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use expansa_common::{ApiError, EntityType, ExpansaError};
use expansa_ranker::{network::color_for, network_graph};
use minijinja::context;
use serde::Deserialize;

use crate::handlers::indication_href;
use crate::state::{AppState, SharedState};

#[derive(Debug, Deserialize, Default)]
pub struct NetworkQuery {
    pub indication: Option<String>,
}

/// Resolve the focus to its canonical name; unknown names are a 404.
fn focus(state: &AppState, query: &NetworkQuery) -> Result<Option<String>, ApiError> {
    let Some(wanted) = query.indication.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    state
        .indications
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(wanted))
        .map(|r| Some(r.name.clone()))
        .ok_or_else(|| ExpansaError::IndicationNotFound(wanted.to_string()).into())
}

/// GET /api/network?indication=
pub async fn api_network(
    State(state): State<SharedState>,
    Query(query): Query<NetworkQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let focus = focus(&state, &query)?;
    let graph = network_graph(&state.edges, focus.as_deref());
    tracing::debug!(focus = ?focus, nodes = graph.nodes.len(), links = graph.links.len(), "network graph");
    Ok(Json(graph))
}

/// GET /network: The graph itself is drawn client-side from /api/network.
pub async fn network_page(
    State(state): State<SharedState>,
    Query(query): Query<NetworkQuery>,
) -> Result<Html<String>, ApiError> {
    let focus = focus(&state, &query)?;
    let api_url = match &focus {
        Some(name) => format!("/api/network?indication={}", urlencoding::encode(name)),
        None => "/api/network".to_string(),
    };
    let legend: Vec<_> = [EntityType::Target, EntityType::Pathway, EntityType::Indication]
        .into_iter()
        .map(|t| context! { label => t.as_str(), color => color_for(t) })
        .collect();

    let body = state.render(
        "network.html",
        context! {
            active => "network",
            target => expansa_data::target(),
            focus => &focus,
            focus_href => focus.as_deref().map(indication_href),
            api_url => api_url,
            legend => legend,
        },
    )?;
    Ok(Html(body))
}
