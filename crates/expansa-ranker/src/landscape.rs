//! Competitive landscape grouped by company.

use expansa_common::DevelopmentPhase;
use expansa_data::Programme;
use serde::Serialize;

/// Indications listed per company before eliding the rest.
pub const MAX_LISTED_INDICATIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    pub company: String,
    pub drugs: String,
    pub highest_phase: DevelopmentPhase,
    pub phase_label: &'static str,
    pub indications: String,
}

fn push_unique(into: &mut Vec<String>, value: &str) {
    if !into.iter().any(|v| v == value) {
        into.push(value.to_string());
    }
}

/// One row per company, most advanced first. Ties keep first-seen order.
pub fn competitive_landscape(programmes: &[Programme]) -> Vec<CompanySummary> {
    // (company, drugs, highest phase, indications), in first-seen order
    let mut groups: Vec<(String, Vec<String>, DevelopmentPhase, Vec<String>)> = Vec::new();
    for p in programmes {
        let idx = match groups.iter().position(|g| g.0 == p.company) {
            Some(i) => i,
            None => {
                groups.push((p.company.clone(), Vec::new(), p.highest_phase, Vec::new()));
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        push_unique(&mut group.1, &p.drug);
        if p.highest_phase.rank() > group.2.rank() {
            group.2 = p.highest_phase;
        }
        for ind in &p.indications {
            push_unique(&mut group.3, ind);
        }
    }

    let mut out: Vec<CompanySummary> = groups
        .into_iter()
        .map(|(company, drugs, phase, indications)| {
            let mut listed = indications
                .iter()
                .take(MAX_LISTED_INDICATIONS)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if indications.len() > MAX_LISTED_INDICATIONS {
                listed.push_str("...");
            }
            CompanySummary {
                company,
                drugs: drugs.join(", "),
                highest_phase: phase,
                phase_label: phase.label(),
                indications: listed,
            }
        })
        .collect();
    out.sort_by(|a, b| b.highest_phase.rank().cmp(&a.highest_phase.rank()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn programme(company: &str, drug: &str, phase: DevelopmentPhase, indications: &[&str]) -> Programme {
        Programme {
            company: company.into(),
            drug: drug.into(),
            highest_phase: phase,
            indications: indications.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_grouping_and_ordering() {
        use DevelopmentPhase::*;
        let rows = competitive_landscape(&[
            programme("Lab", "L-1", Preclinical, &["A"]),
            programme("Acme", "X-1", Phase1, &["A", "B"]),
            programme("Acme", "X-2", Phase2, &["B", "C", "D"]),
            programme("Beta", "B-7", Phase1, &["E"]),
        ]);
        let got: Vec<(&str, &str)> = rows.iter().map(|r| (r.company.as_str(), r.phase_label)).collect();
        assert_eq!(got, vec![("Acme", "Phase 2"), ("Beta", "Phase 1"), ("Lab", "Preclinical")]);
        assert_eq!(rows[0].drugs, "X-1, X-2");
        assert_eq!(rows[0].indications, "A, B, C...");
        assert_eq!(rows[1].indications, "E");
    }

    #[test]
    fn test_builtin_landscape() {
        let rows = competitive_landscape(expansa_data::programmes());
        assert!(rows.windows(2).all(|w| w[0].highest_phase.rank() >= w[1].highest_phase.rank()));
        let companies: Vec<&str> = rows.iter().map(|r| r.company.as_str()).collect();
        let mut unique = companies.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), companies.len());
    }
}
