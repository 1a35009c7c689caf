//! Industry RIPK1 inhibitor programmes.

use expansa_common::DevelopmentPhase;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize)]
pub struct Programme {
    pub company: String,
    pub drug: String,
    pub highest_phase: DevelopmentPhase,
    pub indications: Vec<String>,
}

fn programme(company: &str, drug: &str, highest_phase: DevelopmentPhase, indications: &[&str]) -> Programme {
    Programme {
        company: company.to_string(),
        drug: drug.to_string(),
        highest_phase,
        indications: indications.iter().map(|s| s.to_string()).collect(),
    }
}

fn build() -> Vec<Programme> {
    use DevelopmentPhase::{Phase1, Phase2, Preclinical};
    vec![
        programme("Denali/Sanofi", "SAR443820 (DNL788)", Phase2, &[
            "Amyotrophic Lateral Sclerosis", "Multiple Sclerosis", "Alzheimer's Disease",
        ]),
        programme("Denali/Sanofi", "SAR443122 (DNL758)", Phase2, &[
            "Ulcerative Colitis", "Cutaneous Lupus Erythematosus", "COVID-19 Acute Lung Injury",
        ]),
        programme("GSK", "GSK2982772", Phase2, &[
            "Ulcerative Colitis", "Rheumatoid Arthritis", "Psoriasis",
        ]),
        programme("GSK", "GSK3145095", Phase1, &["Pancreatic Cancer"]),
        programme("Rigel/Lilly", "R552 (ocadusertib)", Phase2, &["Rheumatoid Arthritis"]),
        programme("Sironax", "SIR1-365", Phase1, &["COVID-19 Acute Lung Injury", "Ischaemic Stroke"]),
        programme("Genentech", "GDC-8264", Phase1, &["Acute Kidney Injury", "Graft-versus-Host Disease"]),
        programme("Academic consortia", "Necrostatin-1s analogues", Preclinical, &[
            "Traumatic Brain Injury", "Retinal Degeneration", "Glaucoma", "Acute Pancreatitis",
        ]),
    ]
}

pub fn programmes() -> &'static [Programme] {
    static TABLE: OnceLock<Vec<Programme>> = OnceLock::new();
    TABLE.get_or_init(build)
}
