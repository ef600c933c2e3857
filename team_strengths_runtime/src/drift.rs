//! Drift detection: determinism verification and roster comparison.
//!
//! Compares two snapshots of the same team, typically before and after
//! a membership change, through their computed reports.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use team_strengths_engine::catalog::ReferenceCatalog;
use team_strengths_engine::domain::TeamMember;

use crate::report;

/// Verify determinism by building the same roster's report twice and
/// asserting identical hashes. Panics on failure.
pub fn verify_determinism(members: &[TeamMember], catalog: &ReferenceCatalog) {
    let hash1 = report::rebuild_hash(members, catalog);
    let hash2 = report::rebuild_hash(members, catalog);

    if hash1 != hash2 {
        panic!(
            "DETERMINISM FAILURE: two builds produced different hashes.\n\
             Run 1: {}\n\
             Run 2: {}",
            hash1, hash2
        );
    }
}

/// Structured comparison of two rosters of the same team.
pub fn compare_rosters(
    before: &[TeamMember],
    after: &[TeamMember],
    catalog: &ReferenceCatalog,
) -> DriftReport {
    let ids_before: BTreeSet<&str> = before.iter().map(|m| m.id.as_str()).collect();
    let ids_after: BTreeSet<&str> = after.iter().map(|m| m.id.as_str()).collect();

    let added: Vec<String> = ids_after
        .difference(&ids_before)
        .map(|s| s.to_string())
        .collect();
    let removed: Vec<String> = ids_before
        .difference(&ids_after)
        .map(|s| s.to_string())
        .collect();

    let (report_a, hash_a) = report::rebuild_report(before, catalog);
    let (report_b, hash_b) = report::rebuild_report(after, catalog);

    // Deltas over every domain seen on either side, canonical or not.
    let counts_a = &report_a.composition.domains_count;
    let counts_b = &report_b.composition.domains_count;
    let domains: BTreeSet<&String> = counts_a.keys().chain(counts_b.keys()).collect();
    let mut domain_deltas = BTreeMap::new();
    for domain in domains {
        let a = i64::from(counts_a.get(domain).copied().unwrap_or(0));
        let b = i64::from(counts_b.get(domain).copied().unwrap_or(0));
        if a != b {
            domain_deltas.insert(domain.clone(), b - a);
        }
    }

    let gaps_a = &report_a.domain_analysis.gaps;
    let gaps_b = &report_b.domain_analysis.gaps;
    let gaps_opened: Vec<String> = gaps_b
        .iter()
        .filter(|g| !gaps_a.contains(g))
        .cloned()
        .collect();
    let gaps_closed: Vec<String> = gaps_a
        .iter()
        .filter(|g| !gaps_b.contains(g))
        .cloned()
        .collect();

    DriftReport {
        member_count_before: before.len(),
        member_count_after: after.len(),
        added_members: added,
        removed_members: removed,
        domain_deltas,
        gaps_opened,
        gaps_closed,
        dominant_before: report_a.domain_analysis.dominant_domain.clone(),
        dominant_after: report_b.domain_analysis.dominant_domain.clone(),
        synergy_pairs_before: report_a.complementarity.pairs.len(),
        synergy_pairs_after: report_b.complementarity.pairs.len(),
        hash_before: hash_a,
        hash_after: hash_b,
    }
}

/// Structured drift report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftReport {
    pub member_count_before: usize,
    pub member_count_after: usize,
    pub added_members: Vec<String>,
    pub removed_members: Vec<String>,
    /// Per-domain change in member count; unchanged domains are omitted.
    pub domain_deltas: BTreeMap<String, i64>,
    pub gaps_opened: Vec<String>,
    pub gaps_closed: Vec<String>,
    pub dominant_before: Option<String>,
    pub dominant_after: Option<String>,
    pub synergy_pairs_before: usize,
    pub synergy_pairs_after: usize,
    pub hash_before: String,
    pub hash_after: String,
}

impl DriftReport {
    /// True when both snapshots produce the same report.
    pub fn is_unchanged(&self) -> bool {
        self.hash_before == self.hash_after
    }

    pub fn dominant_changed(&self) -> bool {
        self.dominant_before != self.dominant_after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn before() -> Vec<TeamMember> {
        vec![
            TeamMember::new("1", "Juan", &["Coach"], Some("Motivating")),
            TeamMember::new("2", "Ana", &["Commander"], Some("Thinking")),
        ]
    }

    #[test]
    fn test_identical_rosters_have_no_drift() {
        let catalog = ReferenceCatalog::high5();
        let drift = compare_rosters(&before(), &before(), &catalog);
        assert!(drift.is_unchanged());
        assert!(drift.domain_deltas.is_empty());
        assert!(drift.added_members.is_empty());
        assert!(!drift.dominant_changed());
    }

    #[test]
    fn test_adding_member_closes_gap() {
        let catalog = ReferenceCatalog::high5();
        let mut after = before();
        after.push(TeamMember::new("3", "Luis", &["Deliverer"], Some("Doing")));
        let drift = compare_rosters(&before(), &after, &catalog);
        assert_eq!(drift.added_members, vec!["3"]);
        assert!(drift.removed_members.is_empty());
        assert_eq!(drift.domain_deltas.get("Doing"), Some(&1));
        assert_eq!(drift.gaps_closed, vec!["Doing"]);
        assert!(drift.gaps_opened.is_empty());
        assert_eq!(drift.synergy_pairs_before, 1);
        assert_eq!(drift.synergy_pairs_after, 3);
        assert!(drift.dominant_changed());
        assert_eq!(drift.dominant_after.as_deref(), Some("Doing"));
    }

    #[test]
    fn test_removing_member_opens_gap() {
        let catalog = ReferenceCatalog::high5();
        let after = vec![before().remove(0)];
        let drift = compare_rosters(&before(), &after, &catalog);
        assert_eq!(drift.removed_members, vec!["2"]);
        assert_eq!(drift.domain_deltas.get("Thinking"), Some(&-1));
        assert_eq!(drift.gaps_opened, vec!["Thinking"]);
        assert!(!drift.is_unchanged());
    }

    #[test]
    fn test_verify_determinism_passes() {
        verify_determinism(&before(), &ReferenceCatalog::high5());
        verify_determinism(&[], &ReferenceCatalog::high5());
    }
}
