//! Score → tier threshold rule.
//!
//! The dataset stores its tier column explicitly. This rule is only used to
//! cross-check it; a disagreement is reported, never corrected.

use expansa_common::{Indication, Tier};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierThresholds {
    /// Scores at or above this are tier 1.
    pub tier1_min: f64,
    /// Scores at or above this (and below `tier1_min`) are tier 2.
    pub tier2_min: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { tier1_min: 7.5, tier2_min: 5.0 }
    }
}

impl TierThresholds {
    pub fn new(tier1_min: f64, tier2_min: f64) -> Self {
        Self { tier1_min, tier2_min }
    }

    pub fn tier_for(&self, score: f64) -> Tier {
        if score >= self.tier1_min {
            Tier::One
        } else if score >= self.tier2_min {
            Tier::Two
        } else {
            Tier::Three
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierMismatch {
    pub name: String,
    pub score: f64,
    pub stored: Tier,
    pub expected: Tier,
}

/// Rows whose stored tier disagrees with the threshold rule.
pub fn check_tiers(rows: &[Indication], thresholds: &TierThresholds) -> Vec<TierMismatch> {
    rows.iter()
        .filter_map(|r| {
            let expected = thresholds.tier_for(r.score);
            (expected != r.tier).then(|| TierMismatch {
                name: r.name.clone(),
                score: r.score,
                stored: r.tier,
                expected,
            })
        })
        .collect()
}
