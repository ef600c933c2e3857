//! Complementarity analysis.
//!
//! Pairwise scan over the roster. Pairs are visited as `(i, j)` with
//! `i < j` in roster order, so the same roster always yields the same
//! pairs in the same order.

use crate::catalog::ReferenceCatalog;
use crate::domain::{TeamComplementarity, TeamMember};

/// Number of unordered member pairs in a roster of `n`.
pub fn candidate_pairs(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    n * (n - 1) / 2
}

/// Find every member pair whose domains form a catalogued synergy.
///
/// Members without a domain, or with a domain the synergy table does not
/// know, never match.
pub fn analyze_complementarity(
    members: &[TeamMember],
    catalog: &ReferenceCatalog,
) -> TeamComplementarity {
    let mut pairs = Vec::new();
    let mut synergies = Vec::new();

    for (i, a) in members.iter().enumerate() {
        let Some(domain_a) = a.primary_domain() else {
            continue;
        };
        for b in &members[i + 1..] {
            let Some(domain_b) = b.primary_domain() else {
                continue;
            };
            if let Some(rationale) = catalog.synergy(domain_a, domain_b) {
                synergies.push(describe_synergy(a, domain_a, b, domain_b, rationale));
                pairs.push((a.clone(), b.clone()));
            }
        }
    }

    TeamComplementarity { pairs, synergies }
}

fn describe_synergy(
    a: &TeamMember,
    domain_a: &str,
    b: &TeamMember,
    domain_b: &str,
    rationale: &str,
) -> String {
    format!(
        "{} ({}) and {} ({}): {}",
        a.name, domain_a, b.name, domain_b, rationale
    )
}
