//! CSV export of the current view.

use expansa_common::{EvidenceSource, Indication, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Indication")]
    name: &'a str,
    #[serde(rename = "Therapeutic Area")]
    therapeutic_area: &'a str,
    #[serde(rename = "Tier")]
    tier: u8,
    #[serde(rename = "Score")]
    score: String,
    #[serde(rename = "Clinical Status")]
    clinical_status: &'static str,
    #[serde(rename = "Validation")]
    validation: &'static str,
    #[serde(rename = "Evidence Count")]
    evidence_count: usize,
    #[serde(rename = "Evidence Sources")]
    evidence_sources: String,
}

impl<'a> From<&'a Indication> for ExportRow<'a> {
    fn from(r: &'a Indication) -> Self {
        Self {
            name: &r.name,
            therapeutic_area: &r.therapeutic_area,
            tier: r.tier.number(),
            score: format!("{:.1}", r.score),
            clinical_status: r.clinical_status.label(),
            validation: r.validation.label(),
            evidence_count: r.evidence.count(),
            evidence_sources: r
                .evidence
                .present()
                .into_iter()
                .map(EvidenceSource::label)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Rows as CSV with a header line, in the order given.
pub fn to_csv(rows: &[Indication]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for r in rows {
        writer.serialize(ExportRow::from(r))?;
    }
    if rows.is_empty() {
        writer.write_record(HEADER)?;
    }
    writer
        .into_inner()
        .map_err(|e| expansa_common::ExpansaError::Io(e.into_error()))
}

const HEADER: [&str; 8] = [
    "Indication",
    "Therapeutic Area",
    "Tier",
    "Score",
    "Clinical Status",
    "Validation",
    "Evidence Count",
    "Evidence Sources",
];
