//! Composition analysis.
//!
//! Pure aggregation over the roster. Only keys that occur at least once
//! are materialized; ordered maps keep serialization deterministic.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::ReferenceCatalog;
use crate::domain::{StrengthAttribution, TeamComposition, TeamMember};

/// Tally strength and domain frequencies.
///
/// Each member adds one to their primary domain (members without one are
/// skipped) and one per entry of their strengths list, duplicates
/// included.
pub fn analyze_composition(members: &[TeamMember]) -> TeamComposition {
    let mut strengths_count: BTreeMap<String, u32> = BTreeMap::new();
    let mut domains_count: BTreeMap<String, u32> = BTreeMap::new();

    for member in members {
        if let Some(domain) = member.primary_domain() {
            *domains_count.entry(domain.to_string()).or_insert(0) += 1;
        }
        for strength in &member.strengths {
            *strengths_count.entry(strength.clone()).or_insert(0) += 1;
        }
    }

    TeamComposition {
        strengths_count,
        domains_count,
    }
}

/// Distinct strength names on the roster, sorted.
pub fn team_strengths(members: &[TeamMember]) -> Vec<String> {
    let set: BTreeSet<&str> = members
        .iter()
        .flat_map(|m| m.strengths.iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Attribute every strength occurrence to its catalog domain.
pub fn analyze_strength_domains(
    members: &[TeamMember],
    catalog: &ReferenceCatalog,
) -> StrengthAttribution {
    let mut domains_count: BTreeMap<String, u32> = BTreeMap::new();
    let mut unknown: BTreeSet<&str> = BTreeSet::new();

    for strength in members.iter().flat_map(|m| m.strengths.iter()) {
        match catalog.domain_of(strength) {
            Some(domain) => *domains_count.entry(domain.to_string()).or_insert(0) += 1,
            None => {
                unknown.insert(strength.as_str());
            }
        }
    }

    StrengthAttribution {
        domains_count,
        unknown_strengths: unknown.into_iter().map(str::to_string).collect(),
    }
}
