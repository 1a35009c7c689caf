//! Selection state: the current filter widgets plus the selected indication.

use expansa_common::{ClinicalStatus, ExpansaError, Indication, Result, Tier};
use serde::{Deserialize, Serialize};

/// Sentinel meaning "no filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    ScoreDesc,
    ScoreAsc,
    NameAsc,
    /// Area A–Z, then score high to low within an area.
    TherapeuticArea,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::ScoreDesc,
        SortOrder::ScoreAsc,
        SortOrder::NameAsc,
        SortOrder::TherapeuticArea,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::ScoreDesc       => "score_desc",
            SortOrder::ScoreAsc        => "score_asc",
            SortOrder::NameAsc         => "name",
            SortOrder::TherapeuticArea => "area",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::ScoreDesc       => "Score (High to Low)",
            SortOrder::ScoreAsc        => "Score (Low to High)",
            SortOrder::NameAsc         => "Indication Name (A-Z)",
            SortOrder::TherapeuticArea => "Therapeutic Area",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|o| o.as_str().eq_ignore_ascii_case(s))
    }
}

/// Raw query-string parameters as the browser sends them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionQuery {
    pub tier: Option<String>,
    pub area: Option<String>,
    pub status: Option<String>,
    pub min_score: Option<String>,
    pub sort: Option<String>,
    pub indication: Option<String>,
}

/// Parsed selection. `None` on a filter means "all".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pub tier: Option<Tier>,
    pub therapeutic_area: Option<String>,
    pub clinical_status: Option<ClinicalStatus>,
    pub min_score: f64,
    pub sort: SortOrder,
    pub selected: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            tier: None,
            therapeutic_area: None,
            clinical_status: None,
            min_score: 0.0,
            sort: SortOrder::default(),
            selected: None,
        }
    }
}

/// Empty, missing or `all` collapse to `None`.
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

impl SelectionState {
    pub fn from_query(q: &SelectionQuery) -> Result<Self> {
        let tier = active(&q.tier)
            .map(|v| Tier::parse(v).ok_or_else(|| {
                ExpansaError::InvalidSelection(format!("tier must be 1, 2, 3 or all (got '{v}')"))
            }))
            .transpose()?;

        let clinical_status = active(&q.status)
            .map(|v| ClinicalStatus::parse(v).ok_or_else(|| {
                ExpansaError::InvalidSelection(format!("unknown clinical status '{v}'"))
            }))
            .transpose()?;

        let min_score = match q.min_score.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            None => 0.0,
            Some(v) => {
                let parsed: f64 = v.parse().map_err(|_| {
                    ExpansaError::InvalidSelection(format!("min_score must be a number (got '{v}')"))
                })?;
                if !parsed.is_finite() {
                    return Err(ExpansaError::InvalidSelection("min_score must be finite".into()));
                }
                parsed
            }
        };

        let sort = match q.sort.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            None => SortOrder::default(),
            Some(v) => SortOrder::parse(v).ok_or_else(|| {
                ExpansaError::InvalidSelection(format!("unknown sort order '{v}'"))
            })?,
        };

        Ok(Self {
            tier,
            therapeutic_area: active(&q.area).map(str::to_string),
            clinical_status,
            min_score,
            sort,
            selected: q.indication.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string),
        })
    }

    /// Does the row satisfy every active predicate?
    pub fn matches(&self, row: &Indication) -> bool {
        self.tier.map_or(true, |t| row.tier == t)
            && self
                .therapeutic_area
                .as_deref()
                .map_or(true, |a| row.therapeutic_area.eq_ignore_ascii_case(a))
            && self.clinical_status.map_or(true, |s| row.clinical_status == s)
            && row.score >= self.min_score
    }

    /// The same filters and sort with no indication picked.
    pub fn without_selected(&self) -> Self {
        Self { selected: None, ..self.clone() }
    }

    /// Query-string pairs that reproduce this selection.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.tier {
            pairs.push(("tier", t.number().to_string()));
        }
        if let Some(a) = &self.therapeutic_area {
            pairs.push(("area", a.clone()));
        }
        if let Some(s) = self.clinical_status {
            pairs.push(("status", s.as_str().to_string()));
        }
        if self.min_score != 0.0 {
            pairs.push(("min_score", self.min_score.to_string()));
        }
        if self.sort != SortOrder::default() {
            pairs.push(("sort", self.sort.as_str().to_string()));
        }
        if let Some(name) = &self.selected {
            pairs.push(("indication", name.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query(pairs: &[(&str, &str)]) -> SelectionQuery {
        let mut q = SelectionQuery::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "tier" => q.tier = v,
                "area" => q.area = v,
                "status" => q.status = v,
                "min_score" => q.min_score = v,
                "sort" => q.sort = v,
                "indication" => q.indication = v,
                other => panic!("unknown key {other}"),
            }
        }
        q
    }

    #[test]
    fn test_empty_query_is_default() {
        let s = SelectionState::from_query(&SelectionQuery::default()).unwrap();
        assert_eq!(s, SelectionState::default());
    }

    #[test]
    fn test_all_sentinel_is_no_op() {
        let s = SelectionState::from_query(&query(&[
            ("tier", "all"), ("area", "All"), ("status", "ALL"), ("min_score", ""),
        ]))
        .unwrap();
        assert_eq!(s, SelectionState::default());
    }

    #[test]
    fn test_full_query_parses() {
        let s = SelectionState::from_query(&query(&[
            ("tier", "1"),
            ("area", "Neurology"),
            ("status", "phase2"),
            ("min_score", "7.5"),
            ("sort", "name"),
            ("indication", "Multiple Sclerosis"),
        ]))
        .unwrap();
        assert_eq!(s.tier, Some(Tier::One));
        assert_eq!(s.therapeutic_area.as_deref(), Some("Neurology"));
        assert_eq!(s.clinical_status, Some(ClinicalStatus::Phase2));
        assert_eq!(s.min_score, 7.5);
        assert_eq!(s.sort, SortOrder::NameAsc);
        assert_eq!(s.selected.as_deref(), Some("Multiple Sclerosis"));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        for pairs in [
            vec![("tier", "4")],
            vec![("status", "phase9")],
            vec![("min_score", "lots")],
            vec![("min_score", "NaN")],
            vec![("sort", "random")],
        ] {
            let err = SelectionState::from_query(&query(&pairs)).unwrap_err();
            assert!(matches!(err, ExpansaError::InvalidSelection(_)), "{pairs:?} gave {err:?}");
        }
    }

    #[test]
    fn test_query_pairs_round_trip() {
        let s = SelectionState {
            tier: Some(Tier::Two),
            therapeutic_area: Some("Immunology".into()),
            clinical_status: Some(ClinicalStatus::Preclinical),
            min_score: 5.5,
            sort: SortOrder::TherapeuticArea,
            selected: Some("Crohn's Disease".into()),
        };
        let pairs = s.to_query_pairs();
        let mut q = SelectionQuery::default();
        for (k, v) in pairs {
            match k {
                "tier" => q.tier = Some(v),
                "area" => q.area = Some(v),
                "status" => q.status = Some(v),
                "min_score" => q.min_score = Some(v),
                "sort" => q.sort = Some(v),
                "indication" => q.indication = Some(v),
                _ => unreachable!(),
            }
        }
        assert_eq!(SelectionState::from_query(&q).unwrap(), s);
    }

    #[test]
    fn test_without_selected_keeps_filters() {
        let s = SelectionState {
            tier: Some(Tier::One),
            selected: Some("Psoriasis".into()),
            ..SelectionState::default()
        };
        let cleared = s.without_selected();
        assert_eq!(cleared.tier, Some(Tier::One));
        assert!(cleared.selected.is_none());
        assert_eq!(cleared.to_query_pairs(), vec![("tier", "1".to_string())]);
    }

    #[test]
    fn test_default_selection_has_no_pairs() {
        assert!(SelectionState::default().to_query_pairs().is_empty());
    }
}
