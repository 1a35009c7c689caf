/// Core entity types for the indication expansion dataset.
/// These are the in-memory rows the dashboard filters and renders.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Ordinal priority bucket. `One` is the highest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    pub fn number(self) -> u8 {
        match self {
            Tier::One   => 1,
            Tier::Two   => 2,
            Tier::Three => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::One   => "Tier 1",
            Tier::Two   => "Tier 2",
            Tier::Three => "Tier 3",
        }
    }

    /// Parse a query-string value such as `1` or `tier2`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        let digits = s.strip_prefix("tier").unwrap_or(&s).trim();
        match digits {
            "1" => Some(Tier::One),
            "2" => Some(Tier::Two),
            "3" => Some(Tier::Three),
            _   => None,
        }
    }
}

impl From<Tier> for u8 {
    fn from(t: Tier) -> u8 {
        t.number()
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            1 => Ok(Tier::One),
            2 => Ok(Tier::Two),
            3 => Ok(Tier::Three),
            other => Err(format!("tier must be 1, 2 or 3 (got {other})")),
        }
    }
}

// ---------------------------------------------------------------------------
// Clinical status
// ---------------------------------------------------------------------------

/// Most advanced clinical activity of any RIPK1 programme in the indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalStatus {
    Phase2,
    Phase1,
    Preclinical,
    NoActivity,
}

impl ClinicalStatus {
    pub const ALL: [ClinicalStatus; 4] = [
        ClinicalStatus::Phase2,
        ClinicalStatus::Phase1,
        ClinicalStatus::Preclinical,
        ClinicalStatus::NoActivity,
    ];

    /// Key used in query strings and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ClinicalStatus::Phase2      => "phase2",
            ClinicalStatus::Phase1      => "phase1",
            ClinicalStatus::Preclinical => "preclinical",
            ClinicalStatus::NoActivity  => "no_activity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClinicalStatus::Phase2      => "Phase 2",
            ClinicalStatus::Phase1      => "Phase 1",
            ClinicalStatus::Preclinical => "Preclinical",
            ClinicalStatus::NoActivity  => "No Activity",
        }
    }

    /// Accepts either the key (`phase2`) or the display label (`Phase 2`).
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL.into_iter().find(|status| {
            status.as_str().eq_ignore_ascii_case(wanted) || status.label().eq_ignore_ascii_case(wanted)
        })
    }
}

// ---------------------------------------------------------------------------
// Validation status
// ---------------------------------------------------------------------------

/// How well the indication is supported by published evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    Validated,
    Partial,
    Limited,
}

impl Validation {
    pub const ALL: [Validation; 3] = [Validation::Validated, Validation::Partial, Validation::Limited];

    pub fn label(self) -> &'static str {
        match self {
            Validation::Validated => "Validated",
            Validation::Partial   => "Partial",
            Validation::Limited   => "Limited",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Validation::Validated => "Strong clinical or preclinical evidence",
            Validation::Partial   => "Emerging evidence; requires validation",
            Validation::Limited   => "Data-driven signal; not yet validated",
        }
    }
}

// ---------------------------------------------------------------------------
// Evidence sources
// ---------------------------------------------------------------------------

/// The eight data types whose presence forms an indication's scoring rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    Literature,
    ClinicalTrials,
    AdverseEvents,
    GeneExpression,
    Gwas,
    Interactome,
    PathwaySimilarity,
    StructureSimilarity,
}

impl EvidenceSource {
    pub const ALL: [EvidenceSource; 8] = [
        EvidenceSource::Literature,
        EvidenceSource::ClinicalTrials,
        EvidenceSource::AdverseEvents,
        EvidenceSource::GeneExpression,
        EvidenceSource::Gwas,
        EvidenceSource::Interactome,
        EvidenceSource::PathwaySimilarity,
        EvidenceSource::StructureSimilarity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EvidenceSource::Literature          => "Literature",
            EvidenceSource::ClinicalTrials      => "Clinical Trials",
            EvidenceSource::AdverseEvents       => "Adverse Events",
            EvidenceSource::GeneExpression      => "Gene Expression",
            EvidenceSource::Gwas                => "GWAS",
            EvidenceSource::Interactome         => "Interactome",
            EvidenceSource::PathwaySimilarity   => "Pathway Similarity",
            EvidenceSource::StructureSimilarity => "Structure Similarity",
        }
    }

    /// Methodology text shown on the landscape page.
    pub fn description(self) -> &'static str {
        match self {
            EvidenceSource::Literature =>
                "Systematic extraction of target-disease associations from published literature using NLP.",
            EvidenceSource::ClinicalTrials =>
                "Clinical trial data for related compounds and mechanisms, including completed, ongoing and terminated studies.",
            EvidenceSource::AdverseEvents =>
                "Adverse event databases mined for therapeutic signals (repositioning from side effects).",
            EvidenceSource::GeneExpression =>
                "Disease-specific expression signatures where target modulation may be beneficial.",
            EvidenceSource::Gwas =>
                "Genome-wide association evidence linking the target or its pathway to disease risk.",
            EvidenceSource::Interactome =>
                "Network proximity between the target's protein interactions and disease genes.",
            EvidenceSource::PathwaySimilarity =>
                "Overlap between the target's pathway membership and disease-associated pathways.",
            EvidenceSource::StructureSimilarity =>
                "Indications of structurally similar compounds with known therapeutic use.",
        }
    }

    pub fn data_sources(self) -> &'static str {
        match self {
            EvidenceSource::Literature          => "PubMed, PMC, patent literature",
            EvidenceSource::ClinicalTrials      => "ClinicalTrials.gov, EudraCT",
            EvidenceSource::AdverseEvents       => "FAERS, VigiBase",
            EvidenceSource::GeneExpression      => "GEO, ArrayExpress, TCGA",
            EvidenceSource::Gwas                => "GWAS Catalog, UK Biobank, FinnGen",
            EvidenceSource::Interactome         => "STRING, BioGRID",
            EvidenceSource::PathwaySimilarity   => "Reactome, KEGG, WikiPathways",
            EvidenceSource::StructureSimilarity => "ChEMBL, GOSTAR",
        }
    }
}

/// Presence flags for the eight evidence sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceFlags {
    pub literature: bool,
    pub clinical_trials: bool,
    pub adverse_events: bool,
    pub gene_expression: bool,
    pub gwas: bool,
    pub interactome: bool,
    pub pathway_similarity: bool,
    pub structure_similarity: bool,
}

impl EvidenceFlags {
    /// Build from an array ordered like [`EvidenceSource::ALL`].
    pub fn from_array(flags: [bool; 8]) -> Self {
        let [literature, clinical_trials, adverse_events, gene_expression, gwas, interactome, pathway_similarity, structure_similarity] = flags;
        Self {
            literature,
            clinical_trials,
            adverse_events,
            gene_expression,
            gwas,
            interactome,
            pathway_similarity,
            structure_similarity,
        }
    }

    /// Convert to array for iteration, ordered like [`EvidenceSource::ALL`].
    pub fn as_array(&self) -> [bool; 8] {
        [
            self.literature,
            self.clinical_trials,
            self.adverse_events,
            self.gene_expression,
            self.gwas,
            self.interactome,
            self.pathway_similarity,
            self.structure_similarity,
        ]
    }

    pub fn has(&self, source: EvidenceSource) -> bool {
        match source {
            EvidenceSource::Literature          => self.literature,
            EvidenceSource::ClinicalTrials      => self.clinical_trials,
            EvidenceSource::AdverseEvents       => self.adverse_events,
            EvidenceSource::GeneExpression      => self.gene_expression,
            EvidenceSource::Gwas                => self.gwas,
            EvidenceSource::Interactome         => self.interactome,
            EvidenceSource::PathwaySimilarity   => self.pathway_similarity,
            EvidenceSource::StructureSimilarity => self.structure_similarity,
        }
    }

    /// Sources flagged present, in canonical order.
    pub fn present(&self) -> Vec<EvidenceSource> {
        EvidenceSource::ALL.into_iter().filter(|s| self.has(*s)).collect()
    }

    pub fn count(&self) -> usize {
        self.as_array().iter().filter(|f| **f).count()
    }
}

// ---------------------------------------------------------------------------
// Indication
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indication {
    pub name: String,
    pub therapeutic_area: String,
    pub tier: Tier,
    /// Overall evidence score on a 0–10 scale.
    pub score: f64,
    pub clinical_status: ClinicalStatus,
    pub validation: Validation,
    pub evidence: EvidenceFlags,
}

// ---------------------------------------------------------------------------
// Relationship edges (Target -> Pathway -> Indication)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Target,
    Pathway,
    Indication,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Target     => "target",
            EntityType::Pathway    => "pathway",
            EntityType::Indication => "indication",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    pub source: String,
    pub target: String,
    pub source_type: EntityType,
    pub target_type: EntityType,
}

impl RelationshipEdge {
    pub fn new(
        source: impl Into<String>,
        source_type: EntityType,
        target: impl Into<String>,
        target_type: EntityType,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_type,
            target_type,
        }
    }

    /// Does this edge end at the given indication?
    pub fn reaches_indication(&self, name: &str) -> bool {
        self.target_type == EntityType::Indication && self.target == name
    }
}

// ---------------------------------------------------------------------------
// Target profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub symbol: String,
    pub full_name: String,
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Dossier support types
// ---------------------------------------------------------------------------

/// Confidence attached to a single dossier finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Ordinal used by the evidence profile (Low = 1 .. High = 3).
    pub fn level(self) -> u8 {
        match self {
            Confidence::Low    => 1,
            Confidence::Medium => 2,
            Confidence::High   => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::Low    => "Low",
            Confidence::Medium => "Medium",
            Confidence::High   => "High",
        }
    }
}

/// Development phase of a competitor programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentPhase {
    NotPursued,
    Preclinical,
    Phase1,
    Phase2,
}

impl DevelopmentPhase {
    pub fn label(self) -> &'static str {
        match self {
            DevelopmentPhase::NotPursued  => "Not pursued",
            DevelopmentPhase::Preclinical => "Preclinical",
            DevelopmentPhase::Phase1      => "Phase 1",
            DevelopmentPhase::Phase2      => "Phase 2",
        }
    }

    /// Ordering weight for the landscape view (higher = more advanced).
    pub fn rank(self) -> u8 {
        match self {
            DevelopmentPhase::NotPursued  => 0,
            DevelopmentPhase::Preclinical => 1,
            DevelopmentPhase::Phase1      => 2,
            DevelopmentPhase::Phase2      => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serializes_as_number() {
        let json = serde_json::to_string(&Tier::Two).unwrap();
        assert_eq!(json, "2");
        let back: Tier = serde_json::from_str("3").unwrap();
        assert_eq!(back, Tier::Three);
        assert!(serde_json::from_str::<Tier>("4").is_err());
    }

    #[test]
    fn test_tier_parse_accepts_prefix() {
        assert_eq!(Tier::parse("1"), Some(Tier::One));
        assert_eq!(Tier::parse("Tier2"), Some(Tier::Two));
        assert_eq!(Tier::parse(" 3 "), Some(Tier::Three));
        assert_eq!(Tier::parse("0"), None);
        assert_eq!(Tier::parse("all"), None);
    }

    #[test]
    fn test_clinical_status_parse_key_or_label() {
        assert_eq!(ClinicalStatus::parse("phase2"), Some(ClinicalStatus::Phase2));
        assert_eq!(ClinicalStatus::parse("Phase 1"), Some(ClinicalStatus::Phase1));
        assert_eq!(ClinicalStatus::parse("no activity"), Some(ClinicalStatus::NoActivity));
        assert_eq!(ClinicalStatus::parse("phase3"), None);
    }

    #[test]
    fn test_evidence_flags_round_trip_array() {
        let arr = [true, false, true, false, false, true, false, true];
        let flags = EvidenceFlags::from_array(arr);
        assert_eq!(flags.as_array(), arr);
        assert_eq!(flags.count(), 4);
        assert_eq!(
            flags.present(),
            vec![
                EvidenceSource::Literature,
                EvidenceSource::AdverseEvents,
                EvidenceSource::Interactome,
                EvidenceSource::StructureSimilarity,
            ]
        );
    }

    #[test]
    fn test_edge_reaches_indication_only_on_indication_nodes() {
        let e = RelationshipEdge::new("Necroptosis", EntityType::Pathway, "Psoriasis", EntityType::Indication);
        assert!(e.reaches_indication("Psoriasis"));
        assert!(!e.reaches_indication("Necroptosis"));

        let t = RelationshipEdge::new("RIPK1", EntityType::Target, "Psoriasis", EntityType::Pathway);
        assert!(!t.reaches_indication("Psoriasis"));
    }

    #[test]
    fn test_phase_rank_orders_advanced_first() {
        assert!(DevelopmentPhase::Phase2.rank() > DevelopmentPhase::Phase1.rank());
        assert!(DevelopmentPhase::Phase1.rank() > DevelopmentPhase::Preclinical.rank());
        assert_eq!(Confidence::High.level(), 3);
    }
}
