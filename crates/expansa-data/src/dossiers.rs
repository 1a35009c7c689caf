//! Deep-dive dossiers for the top validated indications (synthetic content).

use expansa_common::{Confidence, DevelopmentPhase, EvidenceSource};
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize)]
pub struct KeyEvidence {
    pub source: EvidenceSource,
    pub finding: String,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitorEntry {
    pub company: String,
    pub drug: String,
    pub phase: DevelopmentPhase,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dossier {
    pub indication: String,
    pub unmet_need: String,
    pub market_size: String,
    /// One paragraph per entry.
    pub rationale: Vec<String>,
    pub key_evidence: Vec<KeyEvidence>,
    pub competitive_context: Vec<CompetitorEntry>,
    pub recommended_actions: Vec<String>,
    pub key_biomarkers: Vec<String>,
}

fn ev(source: EvidenceSource, finding: &str, confidence: Confidence) -> KeyEvidence {
    KeyEvidence { source, finding: finding.to_string(), confidence }
}

fn comp(company: &str, drug: &str, phase: DevelopmentPhase, status: &str) -> CompetitorEntry {
    CompetitorEntry {
        company: company.to_string(),
        drug: drug.to_string(),
        phase,
        status: status.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build() -> Vec<Dossier> {
    use Confidence::{High, Low, Medium};
    use DevelopmentPhase::{NotPursued, Phase1, Phase2, Preclinical};
    use EvidenceSource::*;

    vec![
        Dossier {
            indication: "Amyotrophic Lateral Sclerosis".into(),
            unmet_need: "High".into(),
            market_size: "$2.1B by 2028".into(),
            rationale: strings(&[
                "RIPK1-mediated necroptosis is implicated in motor neuron death in ALS. RIPK1 activation is observed in post-mortem spinal cord, and necroptosis markers (pMLKL, pRIPK3) are elevated in sporadic and familial disease.",
                "Optineurin and TBK1 loss-of-function mutations, both linked to familial ALS, enhance RIPK1-dependent cell death.",
                "In SOD1-G93A mice, RIPK1 inhibition delays onset, extends survival by roughly 15% and reduces motor neuron loss and neuroinflammation.",
            ]),
            key_evidence: vec![
                ev(Literature, "127 publications linking RIPK1/necroptosis to ALS pathology (2018-2024)", High),
                ev(GeneExpression, "RIPK1 upregulated 2.3-fold in ALS patient motor cortex (GSE124439)", High),
                ev(ClinicalTrials, "DNL747 completed Phase 1b in ALS patients", High),
                ev(Gwas, "RIPK1 pathway genes enriched in ALS risk loci (p<0.001)", Medium),
                ev(Interactome, "RIPK1 interacts with TDP-43 and FUS aggregation pathways", Medium),
            ],
            competitive_context: vec![
                comp("Denali/Sanofi", "SAR443820 (DNL788)", Phase2, "Active"),
                comp("GSK", "GSK2982772", Phase1, "Completed"),
            ],
            recommended_actions: strings(&[
                "Commission literature review on RIPK1-TDP43 interaction mechanisms",
                "Analyse existing ALS biomarker datasets for necroptosis signatures",
                "Evaluate competitive differentiation strategy vs. SAR443820",
                "Explore combination potential with anti-SOD1 therapies",
            ]),
            key_biomarkers: strings(&["pRIPK1", "pMLKL", "Neurofilament Light (NfL)", "Chitinase-3-like protein 1"]),
        },
        Dossier {
            indication: "Multiple Sclerosis".into(),
            unmet_need: "Medium-High".into(),
            market_size: "$28.5B by 2028".into(),
            rationale: strings(&[
                "RIPK1 contributes to MS through neuroinflammation and oligodendrocyte death. Oligodendrocyte necroptosis drives demyelination independently of T-cell infiltration.",
                "TNF-induced RIPK1 activation in oligodendrocytes and microglial RIPK1 signalling both promote progression.",
                "In EAE models, RIPK1 kinase-dead mice show a 60% reduction in disease severity, and inhibitors reduce demyelination and axonal damage.",
            ]),
            key_evidence: vec![
                ev(Literature, "89 publications on RIPK1/necroptosis in MS (2019-2024)", High),
                ev(GeneExpression, "MLKL elevated in active MS lesions vs. normal-appearing white matter", High),
                ev(PathwaySimilarity, "Necroptosis pathway enriched in progressive MS transcriptomes", High),
                ev(ClinicalTrials, "SAR443820 Phase 2 in MS ongoing", Medium),
                ev(AdverseEvents, "TNF inhibitors worsen MS; RIPK1 inhibition may provide an alternative", Medium),
            ],
            competitive_context: vec![
                comp("Denali/Sanofi", "SAR443820 (DNL788)", Phase2, "Active"),
                comp("GSK", "GSK2982772", Preclinical, "Planned"),
            ],
            recommended_actions: strings(&[
                "Focus on progressive MS as a differentiated indication",
                "Evaluate oligodendrocyte-specific biomarkers for patient selection",
                "Assess combination strategy with B-cell depleting therapies",
                "Commission analysis of failed TNF inhibitor trials in MS",
            ]),
            key_biomarkers: strings(&["pMLKL in CSF", "Myelin Basic Protein", "GFAP", "Oligodendrocyte-derived exosomes"]),
        },
        Dossier {
            indication: "Alzheimer's Disease".into(),
            unmet_need: "Very High".into(),
            market_size: "$13.7B by 2028".into(),
            rationale: strings(&[
                "Microglial RIPK1 is activated in AD brains, particularly around amyloid plaques, and MEG3 lncRNA activates RIPK1-dependent necroptosis in neurons.",
                "RIPK1 mediates amyloid-induced microglial activation and cytokine release; tau pathology tracks necroptotic markers.",
                "RIPK1 inhibition reduces neuroinflammation and amyloid and tau burden, and improves cognition in mouse models.",
            ]),
            key_evidence: vec![
                ev(Literature, "156 publications linking RIPK1 to AD pathology (2017-2024)", High),
                ev(GeneExpression, "RIPK1 elevated 1.8-fold in AD hippocampus (Mayo RNA-seq)", High),
                ev(PathwaySimilarity, "Necroptosis genes correlate with Braak staging (r=0.67)", High),
                ev(Interactome, "RIPK1 pathway intersects with TREM2 microglial activation", Medium),
                ev(Gwas, "No direct GWAS hits, but pathway enrichment observed", Low),
            ],
            competitive_context: vec![
                comp("Denali/Sanofi", "SAR443820 (DNL788)", Phase1, "AD indication in planning"),
                comp("Multiple", "Various", NotPursued, "No dedicated AD programmes announced"),
            ],
            recommended_actions: strings(&[
                "Evaluate as add-on to anti-amyloid therapies",
                "Design biomarker strategy around neuroinflammation (sTREM2, YKL-40)",
                "Consider early AD / MCI population for clinical differentiation",
                "Assess blood-brain barrier penetration requirements",
            ]),
            key_biomarkers: strings(&["sTREM2", "YKL-40", "GFAP", "pTau-217", "NfL"]),
        },
        Dossier {
            indication: "Ulcerative Colitis".into(),
            unmet_need: "Medium".into(),
            market_size: "$8.9B by 2028".into(),
            rationale: strings(&[
                "Intestinal epithelial cell necroptosis drives barrier dysfunction and bacterial translocation; RIPK1 activation in colonocytes correlates with disease activity.",
                "A20/TNFAIP3 risk variants enhance RIPK1 activity.",
                "GSK2982772 reduced symptoms in Phase 2a with histological improvement maintained over 12 weeks.",
            ]),
            key_evidence: vec![
                ev(ClinicalTrials, "GSK2982772 Phase 2a results in UC (NCT02903966)", High),
                ev(Literature, "72 publications on RIPK1 in IBD (2018-2024)", High),
                ev(GeneExpression, "RIPK3/MLKL elevated in active UC mucosa", High),
                ev(PathwaySimilarity, "Necroptosis signature correlates with Mayo score", High),
                ev(Gwas, "A20/TNFAIP3 IBD risk locus regulates RIPK1", High),
            ],
            competitive_context: vec![
                comp("GSK", "GSK2982772", Phase2, "Active"),
                comp("Denali/Sanofi", "SAR443820 (DNL788)", NotPursued, "Focused on CNS"),
            ],
            recommended_actions: strings(&[
                "Analyse GSK2982772 Phase 2a data for differentiation opportunities",
                "Evaluate positioning vs. JAK inhibitors and S1P modulators",
                "Consider biologic-refractory population as target indication",
                "Assess combination potential with anti-TNF or anti-IL-23",
            ]),
            key_biomarkers: strings(&["Faecal calprotectin", "CRP", "Mucosal pMLKL", "Intestinal permeability markers"]),
        },
        Dossier {
            indication: "Rheumatoid Arthritis".into(),
            unmet_need: "Medium".into(),
            market_size: "$34.2B by 2028".into(),
            rationale: strings(&[
                "Synovial fibroblast RIPK1 promotes inflammatory cytokine production, and macrophage necroptosis releases DAMPs that amplify joint inflammation.",
                "The TNF-RIPK1 axis is central to RA pathology, which explains TNF inhibitor efficacy.",
                "RIPK1 inhibition may address TNF-independent inflammation and anti-TNF failures with a better safety profile than JAK inhibitors.",
            ]),
            key_evidence: vec![
                ev(ClinicalTrials, "GSK2982772 Phase 2a in RA completed (NCT02858492)", High),
                ev(Literature, "94 publications on RIPK1 in RA (2016-2024)", High),
                ev(GeneExpression, "RIPK1 pathway genes elevated in RA synovium", High),
                ev(StructureSimilarity, "RIPK1 inhibitors distinct from JAK inhibitor scaffold", Medium),
                ev(AdverseEvents, "JAK inhibitors carry CV/VTE warnings; RIPK1 may be safer", Medium),
            ],
            competitive_context: vec![
                comp("GSK", "GSK2982772", Phase2, "Completed"),
                comp("Rigel/Lilly", "R552 (ocadusertib)", Phase2, "Active"),
            ],
            recommended_actions: strings(&[
                "Position for anti-TNF refractory patients",
                "Conduct head-to-head biomarker analysis vs. JAK inhibitors",
                "Evaluate safety differentiation vs. tofacitinib/upadacitinib",
                "Consider combination with methotrexate as registration strategy",
            ]),
            key_biomarkers: strings(&["CRP", "ESR", "RF", "Anti-CCP", "Synovial pRIPK1"]),
        },
    ]
}

/// All dossiers in display order.
pub fn dossiers() -> &'static [Dossier] {
    static TABLE: OnceLock<Vec<Dossier>> = OnceLock::new();
    TABLE.get_or_init(build)
}

pub fn dossier(indication: &str) -> Option<&'static Dossier> {
    dossiers().iter().find(|d| d.indication.eq_ignore_ascii_case(indication))
}
