//! Detail panel for one indication.

use expansa_common::{EvidenceSource, Indication, RelationshipEdge};
use expansa_data::Dossier;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EvidenceView {
    pub source: EvidenceSource,
    pub label: &'static str,
    pub present: bool,
}

/// One axis of the evidence radar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub source: EvidenceSource,
    pub label: &'static str,
    /// 1 (low or unreported) to 3 (high).
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicationDetail {
    pub indication: Indication,
    /// All eight sources with their presence flag, canonical order.
    pub evidence: Vec<EvidenceView>,
    /// Pathways with an edge into this indication. Empty when unlinked.
    pub pathways: Vec<String>,
    pub dossier: Option<Dossier>,
    /// Empty unless a dossier exists.
    pub evidence_profile: Vec<ProfilePoint>,
}

/// Look up `name` (case-insensitive) and assemble its detail view.
pub fn indication_detail(
    rows: &[Indication],
    edges: &[RelationshipEdge],
    dossier: impl Fn(&str) -> Option<&'static Dossier>,
    name: &str,
) -> Option<IndicationDetail> {
    let row = rows.iter().find(|r| r.name.eq_ignore_ascii_case(name.trim()))?;

    let mut pathways: Vec<String> = Vec::new();
    for e in edges.iter().filter(|e| e.reaches_indication(&row.name)) {
        if !pathways.contains(&e.source) {
            pathways.push(e.source.clone());
        }
    }

    let evidence = EvidenceSource::ALL
        .into_iter()
        .map(|source| EvidenceView { source, label: source.label(), present: row.evidence.has(source) })
        .collect();

    let dossier = dossier(&row.name);
    let evidence_profile = dossier.map(evidence_profile).unwrap_or_default();

    Some(IndicationDetail {
        indication: row.clone(),
        evidence,
        pathways,
        dossier: dossier.cloned(),
        evidence_profile,
    })
}

/// Radar axes: one per evidence source, highest confidence reported in the
/// dossier, 1 when the dossier says nothing about that source.
pub fn evidence_profile(dossier: &Dossier) -> Vec<ProfilePoint> {
    EvidenceSource::ALL
        .into_iter()
        .map(|source| {
            let level = dossier
                .key_evidence
                .iter()
                .filter(|k| k.source == source)
                .map(|k| k.confidence.level())
                .max()
                .unwrap_or(1);
            ProfilePoint { source, label: source.label(), level }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use expansa_test_utils::{sample_edges, sample_indications, UNLINKED};
    use pretty_assertions::assert_eq;

    fn no_dossier(_: &str) -> Option<&'static Dossier> {
        None
    }

    fn builtin(name: &str) -> Option<IndicationDetail> {
        indication_detail(
            expansa_data::indications(),
            expansa_data::relationships(),
            expansa_data::dossier,
            name,
        )
    }

    #[test]
    fn test_detail_collects_pathways() {
        let d = indication_detail(&sample_indications(), &sample_edges(), no_dossier, "Beta Colitis").unwrap();
        assert_eq!(d.indication.name, "Beta Colitis");
        assert_eq!(d.pathways, vec!["Necroptosis", "Inflammation"]);
        assert_eq!(d.evidence.len(), 8);
        assert!(d.dossier.is_none());
        assert!(d.evidence_profile.is_empty());
    }

    #[test]
    fn test_unlinked_indication_has_empty_pathways() {
        let d = indication_detail(&sample_indications(), &sample_edges(), no_dossier, UNLINKED).unwrap();
        assert!(d.pathways.is_empty());
    }

    #[test]
    fn test_unknown_indication_is_none() {
        assert!(indication_detail(&sample_indications(), &sample_edges(), no_dossier, "Nope").is_none());
    }

    #[test]
    fn test_lookup_ignores_case() {
        let d = indication_detail(&sample_indications(), &sample_edges(), no_dossier, "alpha syndrome").unwrap();
        assert_eq!(d.indication.name, "Alpha Syndrome");
        assert_eq!(d.pathways, vec!["Necroptosis"]);
    }

    #[test]
    fn test_evidence_flags_carried_through() {
        let d = indication_detail(&sample_indications(), &sample_edges(), no_dossier, "Delta Lupus").unwrap();
        let present: Vec<&str> = d.evidence.iter().filter(|e| e.present).map(|e| e.label).collect();
        assert_eq!(present, vec!["Literature", "Gene Expression"]);
        assert_eq!(d.indication.evidence.present(), vec![EvidenceSource::Literature, EvidenceSource::GeneExpression]);
    }

    #[test]
    fn test_builtin_detail_attaches_dossier_and_profile() {
        let d = builtin("Amyotrophic Lateral Sclerosis").unwrap();
        assert!(d.dossier.is_some());
        assert_eq!(d.evidence_profile.len(), 8);
        let level = |s: EvidenceSource| d.evidence_profile.iter().find(|p| p.source == s).unwrap().level;
        assert_eq!(level(EvidenceSource::Literature), 3);
        assert_eq!(level(EvidenceSource::Gwas), 2);
        // Not mentioned in the ALS dossier.
        assert_eq!(level(EvidenceSource::AdverseEvents), 1);
    }

    #[test]
    fn test_builtin_unlinked_indication() {
        let d = builtin("Type 2 Diabetes").unwrap();
        assert!(d.pathways.is_empty());
        assert!(d.dossier.is_none());
    }
}
