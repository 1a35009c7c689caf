//! Indication table.
//!
//! Tiers follow the default thresholds (tier 1 at 7.5 and above, tier 2 at
//! 5.0 and above). The tier column is written out rather than derived.

use expansa_common::{ClinicalStatus, EvidenceFlags, Indication, Tier, Validation};
use std::sync::OnceLock;

use ClinicalStatus::{NoActivity, Phase1, Phase2, Preclinical};
use Validation::{Limited, Partial, Validated};

/// Evidence bits ordered: literature, clinical trials, adverse events, gene
/// expression, GWAS, interactome, pathway similarity, structure similarity.
fn flags(bits: [u8; 8]) -> EvidenceFlags {
    EvidenceFlags::from_array(bits.map(|b| b == 1))
}

fn row(
    name: &str,
    area: &str,
    tier: Tier,
    score: f64,
    clinical_status: ClinicalStatus,
    validation: Validation,
    bits: [u8; 8],
) -> Indication {
    Indication {
        name: name.to_string(),
        therapeutic_area: area.to_string(),
        tier,
        score,
        clinical_status,
        validation,
        evidence: flags(bits),
    }
}

fn build() -> Vec<Indication> {
    use Tier::{One, Three, Two};
    vec![
        // Tier 1
        row("Amyotrophic Lateral Sclerosis", "Neurology",        One, 8.9, Phase2, Validated, [1, 1, 0, 1, 1, 1, 1, 1]),
        row("Ulcerative Colitis",            "Gastroenterology", One, 8.6, Phase2, Validated, [1, 1, 1, 1, 1, 1, 1, 0]),
        row("Rheumatoid Arthritis",          "Immunology",       One, 8.2, Phase2, Validated, [1, 1, 1, 1, 0, 1, 1, 1]),
        row("Multiple Sclerosis",            "Neurology",        One, 7.9, Phase2, Validated, [1, 1, 1, 1, 0, 1, 1, 0]),
        row("Alzheimer's Disease",           "Neurology",        One, 7.6, Phase1, Validated, [1, 1, 0, 1, 1, 1, 1, 0]),
        row("Psoriasis",                     "Dermatology",      One, 7.5, Phase2, Partial,   [1, 1, 0, 1, 1, 0, 1, 1]),
        // Tier 2
        row("Crohn's Disease",                    "Gastroenterology", Two, 7.1, Preclinical, Partial, [1, 0, 0, 1, 1, 1, 1, 0]),
        row("Systemic Lupus Erythematosus",       "Immunology",       Two, 6.8, Preclinical, Partial, [1, 0, 1, 1, 1, 1, 0, 0]),
        row("Parkinson's Disease",                "Neurology",        Two, 6.5, Preclinical, Partial, [1, 0, 0, 1, 1, 1, 1, 0]),
        row("COVID-19 Acute Lung Injury",         "Respiratory",      Two, 6.3, Phase1,      Partial, [1, 1, 0, 1, 0, 1, 0, 0]),
        row("Ischaemic Stroke",                   "Neurology",        Two, 6.2, Phase1,      Partial, [1, 1, 0, 1, 0, 0, 1, 0]),
        row("Non-alcoholic Steatohepatitis",      "Hepatology",       Two, 6.0, Preclinical, Limited, [1, 0, 0, 1, 0, 1, 1, 0]),
        row("Hidradenitis Suppurativa",           "Dermatology",      Two, 5.9, Preclinical, Partial, [1, 0, 1, 1, 0, 0, 1, 0]),
        row("Acute Kidney Injury",                "Nephrology",       Two, 5.7, Phase1,      Limited, [1, 1, 0, 1, 0, 1, 1, 0]),
        row("Myocardial Infarction",              "Cardiovascular",   Two, 5.5, Preclinical, Limited, [1, 0, 0, 1, 0, 0, 1, 1]),
        row("Huntington's Disease",               "Neurology",        Two, 5.4, Preclinical, Limited, [1, 0, 0, 1, 0, 1, 1, 0]),
        row("Sepsis",                             "Immunology",       Two, 5.2, Preclinical, Partial, [1, 0, 1, 1, 0, 1, 0, 0]),
        row("Traumatic Brain Injury",             "Neurology",        Two, 5.0, Preclinical, Limited, [1, 0, 0, 1, 0, 0, 1, 0]),
        // Tier 3
        row("Acute Pancreatitis",                 "Gastroenterology", Three, 4.8, Preclinical, Partial, [1, 0, 0, 1, 0, 0, 1, 0]),
        row("Glaucoma",                           "Ophthalmology",    Three, 4.6, Preclinical, Limited, [1, 0, 0, 1, 0, 0, 1, 0]),
        row("Pancreatic Cancer",                  "Oncology",         Three, 4.4, Phase1,      Limited, [1, 1, 0, 1, 0, 0, 0, 0]),
        row("Retinal Degeneration",               "Ophthalmology",    Three, 4.3, NoActivity,  Limited, [1, 0, 0, 1, 0, 0, 1, 0]),
        row("Atherosclerosis",                    "Cardiovascular",   Three, 4.1, NoActivity,  Limited, [0, 0, 0, 1, 1, 0, 1, 0]),
        row("Idiopathic Pulmonary Fibrosis",      "Respiratory",      Three, 3.9, NoActivity,  Limited, [0, 0, 0, 1, 0, 1, 1, 0]),
        row("Chronic Obstructive Pulmonary Disease", "Respiratory",   Three, 3.5, NoActivity,  Limited, [0, 0, 1, 1, 0, 0, 1, 0]),
        row("Melanoma",                           "Oncology",         Three, 3.2, NoActivity,  Limited, [0, 0, 0, 1, 0, 1, 0, 0]),
        row("Osteoarthritis",                     "Musculoskeletal",  Three, 3.0, NoActivity,  Limited, [0, 0, 1, 1, 0, 0, 0, 0]),
        row("Type 2 Diabetes",                    "Metabolic",        Three, 2.8, NoActivity,  Limited, [0, 0, 0, 0, 1, 1, 0, 0]),
    ]
}

/// The fixed indication table, ordered by score (high to low).
pub fn indications() -> &'static [Indication] {
    static TABLE: OnceLock<Vec<Indication>> = OnceLock::new();
    TABLE.get_or_init(build)
}

/// Exact-name lookup (case-insensitive).
pub fn indication(name: &str) -> Option<&'static Indication> {
    indications().iter().find(|i| i.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_non_empty_and_names_unique() {
        let rows = indications();
        assert!(rows.len() >= 24, "expected a few dozen rows, got {}", rows.len());
        let names: HashSet<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), rows.len());
    }

    #[test]
    fn test_every_row_is_well_formed() {
        for r in indications() {
            assert!(!r.therapeutic_area.is_empty(), "{} has no area", r.name);
            assert!((0.0..=10.0).contains(&r.score), "{} score out of range", r.name);
            assert!(r.evidence.count() >= 1, "{} has no evidence source", r.name);
        }
    }

    #[test]
    fn test_ordered_by_score_descending() {
        let rows = indications();
        assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_higher_tier_never_outscores_lower_tier() {
        let rows = indications();
        for a in rows {
            for b in rows {
                if a.tier < b.tier {
                    assert!(a.score > b.score, "{} ({:?}) vs {} ({:?})", a.name, a.tier, b.name, b.tier);
                }
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(indication("psoriasis").is_some());
        assert!(indication("Gout").is_none());
    }
}
