//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod indications;
pub mod network;
pub mod landscape;
pub mod analytics;
pub mod export;
pub mod request;
pub mod health;

use expansa_common::{ApiError, Indication};
use expansa_ranker::{SelectionQuery, SelectionState};
use serde::Serialize;

/// Parse the query string into a selection, or a 400.
pub fn parse_selection(query: &SelectionQuery) -> Result<SelectionState, ApiError> {
    SelectionState::from_query(query).map_err(ApiError::from)
}

pub fn indication_href(name: &str) -> String {
    format!("/indications/{}", urlencoding::encode(name))
}

/// `?k=v&...` for the current filters, empty when nothing is set.
pub fn query_string(selection: &SelectionState) -> String {
    let pairs = selection.to_query_pairs();
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    format!("?{}", encoded.join("&"))
}

/// Table row with display strings precomputed.
#[derive(Debug, Serialize)]
pub struct RowView {
    pub name: String,
    pub href: String,
    pub therapeutic_area: String,
    pub tier: u8,
    pub tier_label: &'static str,
    pub score: String,
    /// Score as a percentage of the 0–10 scale, for the bar width.
    pub score_pct: u32,
    pub status: &'static str,
    pub status_label: &'static str,
    pub validation: &'static str,
    pub evidence_count: usize,
}

impl From<&Indication> for RowView {
    fn from(r: &Indication) -> Self {
        Self {
            name: r.name.clone(),
            href: indication_href(&r.name),
            therapeutic_area: r.therapeutic_area.clone(),
            tier: r.tier.number(),
            tier_label: r.tier.label(),
            score: format!("{:.1}", r.score),
            score_pct: (r.score.clamp(0.0, 10.0) * 10.0).round() as u32,
            status: r.clinical_status.as_str(),
            status_label: r.clinical_status.label(),
            validation: r.validation.label(),
            evidence_count: r.evidence.count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expansa_common::Tier;

    #[test]
    fn test_href_encodes_apostrophes_and_spaces() {
        assert_eq!(indication_href("Crohn's Disease"), "/indications/Crohn%27s%20Disease");
    }

    #[test]
    fn test_query_string() {
        assert_eq!(query_string(&SelectionState::default()), "");
        let sel = SelectionState {
            tier: Some(Tier::One),
            therapeutic_area: Some("Neuro & Co".into()),
            ..SelectionState::default()
        };
        assert_eq!(query_string(&sel), "?tier=1&area=Neuro%20%26%20Co");
    }
}
