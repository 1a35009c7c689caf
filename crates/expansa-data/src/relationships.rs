//! Target → Pathway → Indication edges for the network view.

use expansa_common::{EntityType, RelationshipEdge};
use std::sync::OnceLock;

const TARGET: &str = "RIPK1";

/// Pathway name and the indications it links to.
const PATHWAYS: &[(&str, &[&str])] = &[
    ("Necroptosis", &[
        "Amyotrophic Lateral Sclerosis",
        "Multiple Sclerosis",
        "Alzheimer's Disease",
        "Ulcerative Colitis",
        "Rheumatoid Arthritis",
        "Psoriasis",
        "Crohn's Disease",
        "Parkinson's Disease",
        "Huntington's Disease",
        "Ischaemic Stroke",
        "Acute Kidney Injury",
        "Myocardial Infarction",
        "Traumatic Brain Injury",
        "Glaucoma",
        "Retinal Degeneration",
        "Acute Pancreatitis",
    ]),
    ("TNF Signalling", &[
        "Ulcerative Colitis",
        "Rheumatoid Arthritis",
        "Psoriasis",
        "Crohn's Disease",
        "Multiple Sclerosis",
        "Amyotrophic Lateral Sclerosis",
        "Hidradenitis Suppurativa",
        "Systemic Lupus Erythematosus",
        "Sepsis",
    ]),
    ("Neuroinflammation", &[
        "Amyotrophic Lateral Sclerosis",
        "Multiple Sclerosis",
        "Alzheimer's Disease",
        "Parkinson's Disease",
        "Traumatic Brain Injury",
        "Ischaemic Stroke",
    ]),
    ("Intestinal Inflammation", &[
        "Ulcerative Colitis",
        "Crohn's Disease",
    ]),
    ("Inflammasome Activation", &[
        "Systemic Lupus Erythematosus",
        "Non-alcoholic Steatohepatitis",
        "Atherosclerosis",
        "COVID-19 Acute Lung Injury",
        "Sepsis",
    ]),
    ("Apoptosis", &[
        "Pancreatic Cancer",
        "Idiopathic Pulmonary Fibrosis",
    ]),
    ("NF-kB Signalling", &[
        "Psoriasis",
        "Hidradenitis Suppurativa",
        "Chronic Obstructive Pulmonary Disease",
    ]),
];

fn build() -> Vec<RelationshipEdge> {
    let mut edges = Vec::new();
    for (pathway, _) in PATHWAYS {
        edges.push(RelationshipEdge::new(TARGET, EntityType::Target, *pathway, EntityType::Pathway));
    }
    for (pathway, indications) in PATHWAYS {
        for indication in indications.iter() {
            edges.push(RelationshipEdge::new(*pathway, EntityType::Pathway, *indication, EntityType::Indication));
        }
    }
    edges
}

/// The fixed edge table: every target→pathway edge, then pathway→indication edges.
pub fn relationships() -> &'static [RelationshipEdge] {
    static TABLE: OnceLock<Vec<RelationshipEdge>> = OnceLock::new();
    TABLE.get_or_init(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indications::indication;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_edges_follow_the_chain() {
        for e in relationships() {
            let pair = (e.source_type, e.target_type);
            assert!(
                pair == (EntityType::Target, EntityType::Pathway)
                    || pair == (EntityType::Pathway, EntityType::Indication),
                "unexpected edge {:?}", e
            );
        }
    }

    #[test]
    fn test_every_edge_indication_exists_in_table() {
        for e in relationships().iter().filter(|e| e.target_type == EntityType::Indication) {
            assert!(indication(&e.target).is_some(), "edge to unknown indication {}", e.target);
        }
    }

    #[test]
    fn test_every_pathway_hangs_off_the_target() {
        let from_target: HashSet<&str> = relationships()
            .iter()
            .filter(|e| e.source_type == EntityType::Target)
            .map(|e| e.target.as_str())
            .collect();
        let used: HashSet<&str> = relationships()
            .iter()
            .filter(|e| e.source_type == EntityType::Pathway)
            .map(|e| e.source.as_str())
            .collect();
        assert_eq!(from_target, used);
    }

    #[test]
    fn test_some_indications_have_no_edges() {
        let linked: HashSet<&str> = relationships().iter().map(|e| e.target.as_str()).collect();
        assert!(!linked.contains("Type 2 Diabetes"));
        assert!(!linked.contains("Osteoarthritis"));
    }

    #[test]
    fn test_no_duplicate_edges() {
        let edges = relationships();
        let unique: HashSet<(&str, &str)> = edges.iter().map(|e| (e.source.as_str(), e.target.as_str())).collect();
        assert_eq!(unique.len(), edges.len());
    }
}
