//! Filter + sort + summarize: the single recomputation run per interaction.

use crate::selection::{SelectionState, SortOrder};
use crate::summary::{summarize, Summary};
use expansa_common::Indication;
use serde::Serialize;
use std::cmp::Ordering;

/// Rows matching every active filter, in input order.
pub fn filter_indications(rows: &[Indication], selection: &SelectionState) -> Vec<Indication> {
    rows.iter().filter(|r| selection.matches(r)).cloned().collect()
}

/// Stable sort in place.
pub fn sort_indications(rows: &mut [Indication], order: SortOrder) {
    let by_score_desc = |a: &Indication, b: &Indication| b.score.total_cmp(&a.score);
    match order {
        SortOrder::ScoreDesc => rows.sort_by(by_score_desc),
        SortOrder::ScoreAsc => rows.sort_by(|a, b| a.score.total_cmp(&b.score)),
        SortOrder::NameAsc => rows.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOrder::TherapeuticArea => rows.sort_by(|a, b| {
            compare_names(&a.therapeutic_area, &b.therapeutic_area).then_with(|| by_score_desc(a, b))
        }),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, Serialize)]
pub struct FilteredView {
    pub selection: SelectionState,
    pub rows: Vec<Indication>,
    pub summary: Summary,
}

pub fn apply_view(rows: &[Indication], selection: &SelectionState) -> FilteredView {
    let mut filtered = filter_indications(rows, selection);
    sort_indications(&mut filtered, selection.sort);
    let summary = summarize(&filtered);
    tracing::debug!(
        tier = ?selection.tier,
        area = ?selection.therapeutic_area,
        status = ?selection.clinical_status,
        min_score = selection.min_score,
        rows = filtered.len(),
        "view recomputed"
    );
    FilteredView {
        selection: selection.clone(),
        rows: filtered,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expansa_common::{ClinicalStatus, Tier};
    use expansa_test_utils::sample_indications;
    use pretty_assertions::assert_eq;

    fn names(rows: &[Indication]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    /// Every tier/area/status combination (including "all") at a few thresholds.
    fn every_selection(rows: &[Indication]) -> Vec<SelectionState> {
        let mut areas: Vec<Option<String>> = rows.iter().map(|r| Some(r.therapeutic_area.clone())).collect();
        areas.sort();
        areas.dedup();
        areas.push(None);

        let tiers = Tier::ALL.iter().copied().map(Some).chain([None]);
        let mut out = Vec::new();
        for tier in tiers {
            for area in &areas {
                for status in ClinicalStatus::ALL.iter().copied().map(Some).chain([None]) {
                    for min_score in [0.0, 5.0, 7.5, 9.5] {
                        out.push(SelectionState {
                            tier,
                            therapeutic_area: area.clone(),
                            clinical_status: status,
                            min_score,
                            ..SelectionState::default()
                        });
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_every_row_satisfies_every_active_filter() {
        let rows = sample_indications();
        for sel in every_selection(&rows) {
            let out = filter_indications(&rows, &sel);
            assert!(out.len() <= rows.len());
            for r in &out {
                if let Some(t) = sel.tier {
                    assert_eq!(r.tier, t);
                }
                if let Some(a) = &sel.therapeutic_area {
                    assert_eq!(&r.therapeutic_area, a);
                }
                if let Some(s) = sel.clinical_status {
                    assert_eq!(r.clinical_status, s);
                }
                assert!(r.score >= sel.min_score);
            }
            // Nothing that matches was dropped.
            let expected = rows.iter().filter(|r| sel.matches(r)).count();
            assert_eq!(out.len(), expected, "{sel:?}");
        }
    }

    #[test]
    fn test_all_filters_at_minimum_score_is_identity() {
        let rows = sample_indications();
        let min = rows.iter().map(|r| r.score).min_by(f64::total_cmp).unwrap();
        let sel = SelectionState { min_score: min, ..SelectionState::default() };
        assert_eq!(filter_indications(&rows, &sel), rows);
    }

    #[test]
    fn test_counters_sum_to_filtered_count_for_every_selection() {
        let rows = sample_indications();
        for sel in every_selection(&rows) {
            let view = apply_view(&rows, &sel);
            let s = &view.summary;
            assert_eq!(s.total, view.rows.len());
            assert_eq!(s.by_tier.iter().map(|b| b.count).sum::<usize>(), s.total, "{sel:?}");
            assert_eq!(s.by_status.iter().map(|b| b.count).sum::<usize>(), s.total, "{sel:?}");
        }
    }

    #[test]
    fn test_tier_one_filter_on_sample() {
        let rows = sample_indications();
        let sel = SelectionState { tier: Some(Tier::One), ..SelectionState::default() };
        let view = apply_view(&rows, &sel);
        assert_eq!(view.rows.len(), 3);
        assert!(view.rows.iter().all(|r| r.tier == Tier::One));
        assert_eq!(view.summary.tier_count(Tier::One), 3);
        assert_eq!(view.summary.tier_count(Tier::Two), 0);
    }

    #[test]
    fn test_raising_threshold_never_readmits_rows() {
        let rows = sample_indications();
        let mut last_excluded = 0;
        let mut threshold = 0.0;
        while threshold <= 10.0 {
            let sel = SelectionState { min_score: threshold, ..SelectionState::default() };
            let excluded = rows.len() - filter_indications(&rows, &sel).len();
            assert!(excluded >= last_excluded, "threshold {threshold}");
            last_excluded = excluded;
            threshold += 0.25;
        }
        assert_eq!(last_excluded, rows.len());
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let rows = sample_indications();
        let sel = SelectionState {
            tier: Some(Tier::Three),
            clinical_status: Some(ClinicalStatus::Phase2),
            ..SelectionState::default()
        };
        let view = apply_view(&rows, &sel);
        assert!(view.rows.is_empty());
        assert_eq!(view.summary.total, 0);
    }

    #[test]
    fn test_area_filter_is_case_insensitive() {
        let rows = sample_indications();
        let sel = SelectionState { therapeutic_area: Some("neurology".into()), ..SelectionState::default() };
        assert_eq!(names(&filter_indications(&rows, &sel)), vec!["Alpha Syndrome", "Epsilon Palsy"]);
    }

    #[test]
    fn test_sort_orders() {
        let mut rows = sample_indications();
        sort_indications(&mut rows, SortOrder::ScoreAsc);
        assert_eq!(rows.first().unwrap().name, "Eta Orphan");

        sort_indications(&mut rows, SortOrder::NameAsc);
        assert_eq!(
            names(&rows),
            vec![
                "Alpha Syndrome", "Beta Colitis", "Delta Lupus", "Epsilon Palsy",
                "Eta Orphan", "Gamma Arthritis", "Zeta Fibrosis",
            ]
        );

        sort_indications(&mut rows, SortOrder::TherapeuticArea);
        assert_eq!(
            names(&rows),
            vec![
                "Beta Colitis", "Gamma Arthritis", "Delta Lupus", "Eta Orphan",
                "Alpha Syndrome", "Epsilon Palsy", "Zeta Fibrosis",
            ]
        );

        sort_indications(&mut rows, SortOrder::ScoreDesc);
        assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_sort_is_stable_on_equal_scores() {
        let mut rows = sample_indications();
        for r in rows.iter_mut() {
            r.score = 5.0;
        }
        let before = names(&rows).into_iter().map(String::from).collect::<Vec<_>>();
        sort_indications(&mut rows, SortOrder::ScoreDesc);
        assert_eq!(names(&rows), before.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_builtin_dataset_default_view() {
        let view = apply_view(expansa_data::indications(), &SelectionState::default());
        assert_eq!(view.rows.len(), expansa_data::indications().len());
        assert!(view.summary.tier_count(Tier::One) > 0);
    }
}
