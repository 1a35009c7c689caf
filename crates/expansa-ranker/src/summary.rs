//! Counters over a filtered subset.

use expansa_common::{ClinicalStatus, Indication, Tier, Validation};
use serde::Serialize;

/// One counter. `key` is what the filter form sends back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub key: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    /// Always three entries, tier 1 first.
    pub by_tier: Vec<Bucket>,
    /// Always one entry per clinical status, most advanced first.
    pub by_status: Vec<Bucket>,
    pub by_validation: Vec<Bucket>,
    pub top_score: Option<f64>,
    pub mean_score: Option<f64>,
}

impl Summary {
    pub fn tier_count(&self, tier: Tier) -> usize {
        count_for(&self.by_tier, &tier.number().to_string())
    }

    pub fn status_count(&self, status: ClinicalStatus) -> usize {
        count_for(&self.by_status, status.as_str())
    }

    pub fn validation_count(&self, validation: Validation) -> usize {
        count_for(&self.by_validation, validation.label())
    }
}

fn count_for(buckets: &[Bucket], key: &str) -> usize {
    buckets.iter().find(|b| b.key == key).map_or(0, |b| b.count)
}

pub fn summarize(rows: &[Indication]) -> Summary {
    let by_tier = Tier::ALL
        .iter()
        .map(|&t| Bucket {
            key: t.number().to_string(),
            label: t.label().to_string(),
            count: rows.iter().filter(|r| r.tier == t).count(),
        })
        .collect();

    let by_status = ClinicalStatus::ALL
        .iter()
        .map(|&s| Bucket {
            key: s.as_str().to_string(),
            label: s.label().to_string(),
            count: rows.iter().filter(|r| r.clinical_status == s).count(),
        })
        .collect();

    let by_validation = Validation::ALL
        .iter()
        .map(|&v| Bucket {
            key: v.label().to_string(),
            label: v.label().to_string(),
            count: rows.iter().filter(|r| r.validation == v).count(),
        })
        .collect();

    let top_score = rows.iter().map(|r| r.score).max_by(f64::total_cmp);
    let mean_score = if rows.is_empty() {
        None
    } else {
        Some(rows.iter().map(|r| r.score).sum::<f64>() / rows.len() as f64)
    };

    Summary {
        total: rows.len(),
        by_tier,
        by_status,
        by_validation,
        top_score,
        mean_score,
    }
}
