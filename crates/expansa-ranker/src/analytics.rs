//! Chart series for the discovery dashboard.

use expansa_common::{EvidenceSource, Indication};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaCount {
    pub therapeutic_area: String,
    pub count: usize,
    pub mean_score: f64,
}

/// Integer-score histogram bucket covering `[lower, lower + 1)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBucket {
    pub lower: u8,
    pub label: String,
    pub count: usize,
}

/// One line of the indication x evidence-source grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceRow {
    pub name: String,
    /// Presence per source, in `EvidenceSource::ALL` order.
    pub flags: Vec<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analytics {
    pub areas: Vec<AreaCount>,
    pub distribution: Vec<ScoreBucket>,
    pub evidence_sources: Vec<&'static str>,
    pub evidence_matrix: Vec<EvidenceRow>,
}

pub fn analytics(rows: &[Indication]) -> Analytics {
    Analytics {
        areas: area_breakdown(rows),
        distribution: score_distribution(rows),
        evidence_sources: EvidenceSource::ALL.iter().map(|s| s.label()).collect(),
        evidence_matrix: evidence_matrix(rows),
    }
}

/// Count per therapeutic area, largest first, ties by name.
pub fn area_breakdown(rows: &[Indication]) -> Vec<AreaCount> {
    let mut grouped: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for r in rows {
        let entry = grouped.entry(r.therapeutic_area.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += r.score;
    }
    let mut out: Vec<AreaCount> = grouped
        .into_iter()
        .map(|(area, (count, total))| AreaCount {
            therapeutic_area: area.to_string(),
            count,
            mean_score: total / count as f64,
        })
        .collect();
    // BTreeMap already gives name order; a stable sort keeps it for ties.
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Ten buckets, 0–1 through 9–10. A score of 10 lands in the last bucket.
pub fn score_distribution(rows: &[Indication]) -> Vec<ScoreBucket> {
    let mut counts = [0usize; 10];
    for r in rows {
        let idx = r.score.clamp(0.0, 10.0).floor() as usize;
        counts[idx.min(9)] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| ScoreBucket {
            lower: i as u8,
            label: format!("{}-{}", i, i + 1),
            count,
        })
        .collect()
}

/// Which sources back each row. Row order follows the input.
pub fn evidence_matrix(rows: &[Indication]) -> Vec<EvidenceRow> {
    rows.iter()
        .map(|r| EvidenceRow {
            name: r.name.clone(),
            flags: EvidenceSource::ALL.iter().map(|s| r.evidence.has(*s)).collect(),
        })
        .collect()
}

/// Distinct therapeutic areas, alphabetical. Feeds the filter dropdown.
pub fn therapeutic_areas(rows: &[Indication]) -> Vec<String> {
    let mut areas: Vec<String> = rows.iter().map(|r| r.therapeutic_area.clone()).collect();
    areas.sort();
    areas.dedup();
    areas
}
