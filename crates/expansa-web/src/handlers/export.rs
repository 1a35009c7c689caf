//! CSV download of the current table.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use expansa_common::ApiError;
use expansa_ranker::{apply_view, export::to_csv, SelectionQuery};

use crate::handlers::parse_selection;
use crate::state::SharedState;

/// GET /export/indications.csv: Same filters and order as the dashboard.
pub async fn export_csv(
    State(state): State<SharedState>,
    Query(query): Query<SelectionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let selection = parse_selection(&query)?;
    let view = apply_view(&state.indications, &selection);
    let body = to_csv(&view.rows)?;

    let filename = format!(
        "{}_indications_{}.csv",
        expansa_data::target().symbol.to_lowercase(),
        chrono::Utc::now().format("%Y%m%d"),
    );
    tracing::info!(rows = view.rows.len(), %filename, "CSV export");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    ))
}
