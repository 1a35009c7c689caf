//! Competitive landscape and methodology page.

use axum::{extract::State, response::Html};
use expansa_common::{ApiError, EvidenceSource, Validation};
use expansa_ranker::landscape::competitive_landscape;
use minijinja::context;

use crate::state::SharedState;

/// GET /landscape
pub async fn landscape_page(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let companies = competitive_landscape(expansa_data::programmes());

    let sources: Vec<_> = EvidenceSource::ALL
        .into_iter()
        .map(|s| context! {
            label => s.label(),
            description => s.description(),
            data_sources => s.data_sources(),
        })
        .collect();
    let validation: Vec<_> = Validation::ALL
        .into_iter()
        .map(|v| context! { label => v.label(), blurb => v.blurb() })
        .collect();

    let t = &state.thresholds;
    let tiers = vec![
        context! { label => "Tier 1", rule => format!("score ≥ {:.1}", t.tier1_min) },
        context! { label => "Tier 2", rule => format!("{:.1} ≤ score < {:.1}", t.tier2_min, t.tier1_min) },
        context! { label => "Tier 3", rule => format!("score < {:.1}", t.tier2_min) },
    ];

    let body = state.render(
        "landscape.html",
        context! {
            active => "landscape",
            target => expansa_data::target(),
            companies => companies,
            sources => sources,
            validation => validation,
            tiers => tiers,
        },
    )?;
    Ok(Html(body))
}
