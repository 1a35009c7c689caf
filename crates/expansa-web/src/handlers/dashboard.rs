//! Discovery dashboard: filter form, counters, ranked table and charts.

use axum::{
    extract::{Query, State},
    response::Html,
};
use expansa_common::{ApiError, ClinicalStatus, EvidenceSource, ExpansaError, Tier};
use expansa_ranker::{
    analytics::{area_breakdown, evidence_matrix, score_distribution, therapeutic_areas},
    apply_view, indication_detail, SelectionQuery, SelectionState, SortOrder,
};
use minijinja::context;
use serde::Serialize;

use crate::handlers::{indication_href, parse_selection, query_string, RowView};
use crate::state::{AppState, SharedState};

/// `<option>` entry for a filter dropdown.
#[derive(Debug, Serialize)]
struct Choice {
    value: String,
    label: String,
    selected: bool,
}

fn choice(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Choice {
    Choice { value: value.into(), label: label.into(), selected }
}

/// Horizontal or vertical bar scaled against the largest value.
#[derive(Debug, Serialize)]
struct Bar {
    label: String,
    count: usize,
    pct: u32,
}

fn bars(items: impl IntoIterator<Item = (String, usize)>) -> Vec<Bar> {
    let items: Vec<(String, usize)> = items.into_iter().collect();
    let widest = items.iter().map(|(_, c)| *c).max().unwrap_or(0);
    items
        .into_iter()
        .map(|(label, count)| Bar {
            label,
            count,
            pct: if widest == 0 { 0 } else { (count * 100 / widest) as u32 },
        })
        .collect()
}

/// Evidence grid line; the name opens the preview panel.
#[derive(Debug, Serialize)]
struct MatrixRow {
    name: String,
    preview_href: String,
    cells: Vec<bool>,
}

fn preview_href(filters: &SelectionState, name: &str) -> String {
    let mut picked = filters.clone();
    picked.selected = Some(name.to_string());
    format!("/{}", query_string(&picked))
}

/// Summary of the picked indication shown above the table.
#[derive(Debug, Serialize)]
struct Preview {
    name: String,
    href: String,
    close_href: String,
    therapeutic_area: String,
    tier_label: &'static str,
    status_label: &'static str,
    validation_label: &'static str,
    score: String,
    evidence: Vec<&'static str>,
    pathways: Vec<String>,
    has_dossier: bool,
}

fn preview(state: &AppState, name: &str, filters: &SelectionState) -> Result<Preview, ApiError> {
    let detail = indication_detail(&state.indications, &state.edges, expansa_data::dossier, name)
        .ok_or_else(|| ApiError::from(ExpansaError::IndicationNotFound(name.to_string())))?;
    let row = &detail.indication;
    Ok(Preview {
        name: row.name.clone(),
        href: indication_href(&row.name),
        close_href: format!("/{}", query_string(filters)),
        therapeutic_area: row.therapeutic_area.clone(),
        tier_label: row.tier.label(),
        status_label: row.clinical_status.label(),
        validation_label: row.validation.label(),
        score: format!("{:.1}", row.score),
        evidence: detail.evidence.iter().filter(|e| e.present).map(|e| e.label).collect(),
        has_dossier: detail.dossier.is_some(),
        pathways: detail.pathways,
    })
}

/// GET /
pub async fn dashboard(
    State(state): State<SharedState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>, ApiError> {
    let selection = parse_selection(&query)?;
    let filters = selection.without_selected();
    let panel = selection
        .selected
        .as_deref()
        .map(|name| preview(&state, name, &filters))
        .transpose()?;
    let view = apply_view(&state.indications, &selection);

    let tier_choices: Vec<Choice> = Tier::ALL
        .iter()
        .map(|t| choice(t.number().to_string(), t.label(), selection.tier == Some(*t)))
        .collect();
    let status_choices: Vec<Choice> = ClinicalStatus::ALL
        .iter()
        .map(|s| choice(s.as_str(), s.label(), selection.clinical_status == Some(*s)))
        .collect();
    let area_choices: Vec<Choice> = therapeutic_areas(&state.indications)
        .into_iter()
        .map(|a| {
            let selected = selection
                .therapeutic_area
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(&a));
            choice(a.clone(), a, selected)
        })
        .collect();
    let sort_choices: Vec<Choice> = SortOrder::ALL
        .iter()
        .map(|o| choice(o.as_str(), o.label(), selection.sort == *o))
        .collect();

    let rows: Vec<RowView> = view.rows.iter().map(RowView::from).collect();
    let matrix: Vec<MatrixRow> = evidence_matrix(&view.rows)
        .into_iter()
        .map(|line| MatrixRow {
            preview_href: preview_href(&filters, &line.name),
            name: line.name,
            cells: line.flags,
        })
        .collect();
    let summary = &view.summary;

    let body = state.render(
        "dashboard.html",
        context! {
            active => "discovery",
            target => expansa_data::target(),
            rows => rows,
            summary => summary,
            top_score => summary.top_score.map(|s| format!("{s:.1}")),
            mean_score => summary.mean_score.map(|s| format!("{s:.1}")),
            total_rows => state.indications.len(),
            min_score => selection.min_score,
            tier_choices => tier_choices,
            status_choices => status_choices,
            area_choices => area_choices,
            sort_choices => sort_choices,
            area_bars => bars(area_breakdown(&view.rows).into_iter().map(|a| (a.therapeutic_area, a.count))),
            score_bars => bars(score_distribution(&view.rows).into_iter().map(|b| (b.label, b.count))),
            evidence_columns => EvidenceSource::ALL.iter().map(|s| s.label()).collect::<Vec<_>>(),
            matrix => matrix,
            preview => panel,
            selected => selection.selected.as_deref(),
            query => query_string(&filters),
        },
    )?;
    Ok(Html(body))
}
