//! Shared fixtures for expansa tests.
//!
//! The sample dataset is deliberately small: exactly three tier-1 rows, one
//! indication with no edges, and every clinical status represented.

use expansa_common::{
    ClinicalStatus, EntityType, EvidenceFlags, Indication, RelationshipEdge, Tier, Validation,
};

/// Builder for a single indication row with sensible defaults.
#[derive(Debug, Clone)]
pub struct IndicationBuilder {
    row: Indication,
}

impl IndicationBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            row: Indication {
                name: name.to_string(),
                therapeutic_area: "Immunology".to_string(),
                tier: Tier::Two,
                score: 6.0,
                clinical_status: ClinicalStatus::Preclinical,
                validation: Validation::Partial,
                evidence: EvidenceFlags::from_array([true, false, false, true, false, false, false, false]),
            },
        }
    }

    pub fn area(mut self, area: &str) -> Self {
        self.row.therapeutic_area = area.to_string();
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.row.tier = tier;
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.row.score = score;
        self
    }

    pub fn status(mut self, status: ClinicalStatus) -> Self {
        self.row.clinical_status = status;
        self
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.row.validation = validation;
        self
    }

    pub fn evidence(mut self, flags: [bool; 8]) -> Self {
        self.row.evidence = EvidenceFlags::from_array(flags);
        self
    }

    pub fn build(self) -> Indication {
        self.row
    }
}

/// Seven rows, three of them tier 1.
pub fn sample_indications() -> Vec<Indication> {
    use ClinicalStatus::*;
    use Tier::*;
    vec![
        IndicationBuilder::new("Alpha Syndrome").area("Neurology").tier(One).score(9.1)
            .status(Phase2).validation(Validation::Validated).build(),
        IndicationBuilder::new("Beta Colitis").area("Gastroenterology").tier(One).score(8.0)
            .status(Phase2).validation(Validation::Validated).build(),
        IndicationBuilder::new("Gamma Arthritis").area("Immunology").tier(One).score(7.5)
            .status(Phase1).build(),
        IndicationBuilder::new("Delta Lupus").area("Immunology").tier(Two).score(6.4)
            .status(Preclinical).build(),
        IndicationBuilder::new("Epsilon Palsy").area("Neurology").tier(Two).score(5.0)
            .status(Phase1).validation(Validation::Limited).build(),
        IndicationBuilder::new("Zeta Fibrosis").area("Respiratory").tier(Three).score(3.9)
            .status(NoActivity).validation(Validation::Limited).build(),
        IndicationBuilder::new("Eta Orphan").area("Metabolic").tier(Three).score(2.2)
            .status(NoActivity).validation(Validation::Limited).build(),
    ]
}

/// Edges for the sample dataset. `Eta Orphan` has none.
pub fn sample_edges() -> Vec<RelationshipEdge> {
    let target = |p: &str| RelationshipEdge::new("TGT1", EntityType::Target, p, EntityType::Pathway);
    let link = |p: &str, i: &str| RelationshipEdge::new(p, EntityType::Pathway, i, EntityType::Indication);
    vec![
        target("Necroptosis"),
        target("Inflammation"),
        link("Necroptosis", "Alpha Syndrome"),
        link("Necroptosis", "Beta Colitis"),
        link("Inflammation", "Beta Colitis"),
        link("Inflammation", "Gamma Arthritis"),
        link("Inflammation", "Delta Lupus"),
        link("Necroptosis", "Epsilon Palsy"),
        link("Inflammation", "Zeta Fibrosis"),
    ]
}

/// Name of the sample indication that no edge reaches.
pub const UNLINKED: &str = "Eta Orphan";
