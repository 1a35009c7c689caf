//! Indication list API and the per-indication detail page.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    Json,
};
use expansa_common::{ApiError, ExpansaError};
use expansa_data::Dossier;
use expansa_ranker::{apply_view, indication_detail, IndicationDetail, SelectionQuery};
use minijinja::context;
use serde::Serialize;

use crate::handlers::{indication_href, parse_selection, request};
use crate::state::{AppState, SharedState};

fn detail_for(state: &AppState, name: &str) -> Result<IndicationDetail, ApiError> {
    indication_detail(&state.indications, &state.edges, expansa_data::dossier, name)
        .ok_or_else(|| ExpansaError::IndicationNotFound(name.to_string()).into())
}

/// GET /api/indications: Filtered rows plus counters.
pub async fn api_indications(
    State(state): State<SharedState>,
    Query(query): Query<SelectionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let selection = parse_selection(&query)?;
    Ok(Json(apply_view(&state.indications, &selection)))
}

/// GET /api/indications/{name}
pub async fn api_indication_detail(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(detail_for(&state, &name)?))
}

// === Page view models ===

#[derive(Debug, Serialize)]
struct FindingView<'a> {
    source: &'static str,
    finding: &'a str,
    confidence: &'static str,
    level: u8,
}

#[derive(Debug, Serialize)]
struct CompetitorView<'a> {
    company: &'a str,
    drug: &'a str,
    phase: &'static str,
    rank: u8,
    status: &'a str,
}

#[derive(Debug, Serialize)]
struct DossierView<'a> {
    unmet_need: &'a str,
    market_size: &'a str,
    rationale: &'a [String],
    findings: Vec<FindingView<'a>>,
    competitors: Vec<CompetitorView<'a>>,
    recommended_actions: &'a [String],
    key_biomarkers: &'a [String],
}

impl<'a> From<&'a Dossier> for DossierView<'a> {
    fn from(d: &'a Dossier) -> Self {
        Self {
            unmet_need: &d.unmet_need,
            market_size: &d.market_size,
            rationale: &d.rationale,
            findings: d
                .key_evidence
                .iter()
                .map(|k| FindingView {
                    source: k.source.label(),
                    finding: &k.finding,
                    confidence: k.confidence.label(),
                    level: k.confidence.level(),
                })
                .collect(),
            competitors: d
                .competitive_context
                .iter()
                .map(|c| CompetitorView {
                    company: &c.company,
                    drug: &c.drug,
                    phase: c.phase.label(),
                    rank: c.phase.rank(),
                    status: &c.status,
                })
                .collect(),
            recommended_actions: &d.recommended_actions,
            key_biomarkers: &d.key_biomarkers,
        }
    }
}

#[derive(Debug, Serialize)]
struct DossierLink<'a> {
    name: &'a str,
    href: String,
    current: bool,
}

/// GET /indications/{name}
pub async fn indication_page(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Html<String>, ApiError> {
    let detail = detail_for(&state, &name)?;
    let row = &detail.indication;
    tracing::debug!(indication = %row.name, pathways = detail.pathways.len(), "detail view");

    let dossier_links: Vec<DossierLink> = expansa_data::dossiers()
        .iter()
        .map(|d| DossierLink {
            name: &d.indication,
            href: indication_href(&d.indication),
            current: d.indication == row.name,
        })
        .collect();

    let body = state.render(
        "detail.html",
        context! {
            active => "deep_dive",
            target => expansa_data::target(),
            name => &row.name,
            therapeutic_area => &row.therapeutic_area,
            tier_label => row.tier.label(),
            status_label => row.clinical_status.label(),
            validation_label => row.validation.label(),
            validation_blurb => row.validation.blurb(),
            score => format!("{:.1}", row.score),
            evidence_count => row.evidence.count(),
            evidence => &detail.evidence,
            pathways => &detail.pathways,
            profile => &detail.evidence_profile,
            dossier => detail.dossier.as_ref().map(DossierView::from),
            dossier_links => dossier_links,
            network_href => format!("/network?indication={}", urlencoding::encode(&row.name)),
            request_indication => &row.name,
            roles => request::ROLES,
            interests => request::INTERESTS,
        },
    )?;
    Ok(Html(body))
}
