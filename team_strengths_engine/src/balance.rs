//! Domain balance analysis.
//!
//! Only canonical domains take part: ratios, dominance and gaps are all
//! computed over the catalog's domain list, in catalog order. Members
//! tagged with a domain outside that list contribute nothing here.

use std::collections::BTreeMap;

use crate::arithmetic::ratio;
use crate::catalog::ReferenceCatalog;
use crate::domain::{DomainMismatch, TeamDomainAnalysis, TeamMember};

/// Member count per canonical domain, in canonical order.
pub fn canonical_domain_counts<'c>(
    members: &[TeamMember],
    catalog: &'c ReferenceCatalog,
) -> Vec<(&'c str, u32)> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for domain in members.iter().filter_map(TeamMember::primary_domain) {
        *counts.entry(domain).or_insert(0) += 1;
    }
    catalog
        .domains()
        .iter()
        .map(|d| (d.as_str(), counts.get(d.as_str()).copied().unwrap_or(0)))
        .collect()
}

/// Representation ratios, dominant domain and gaps.
///
/// `balance[d] = count(d) / total` where `total` is the number of members
/// in canonical domains; all zeros when nobody is. Members tagged with a
/// domain outside the catalog are left out of `total` as well as the
/// ratios, so the ratios sum to 1 whenever any canonical member exists.
/// The dominant domain is
/// the first canonical domain holding the maximum count, and is absent
/// when that maximum is 0.
pub fn analyze_domain_balance(
    members: &[TeamMember],
    catalog: &ReferenceCatalog,
) -> TeamDomainAnalysis {
    let counts = canonical_domain_counts(members, catalog);
    let total: u32 = counts.iter().map(|(_, c)| *c).sum();

    let mut balance = BTreeMap::new();
    let mut dominant: Option<(&str, u32)> = None;
    let mut gaps = Vec::new();

    for &(domain, count) in &counts {
        balance.insert(domain.to_string(), ratio(count, total));
        if count == 0 {
            gaps.push(domain.to_string());
        } else if dominant.map_or(true, |(_, best)| count > best) {
            dominant = Some((domain, count));
        }
    }

    TeamDomainAnalysis {
        balance,
        dominant_domain: dominant.map(|(d, _)| d.to_string()),
        gaps,
    }
}

/// Domain holding the plurality of a member's catalogued strengths.
/// Ties resolve to canonical order. `None` if no strength is catalogued.
pub fn implied_domain<'c>(member: &TeamMember, catalog: &'c ReferenceCatalog) -> Option<&'c str> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for strength in &member.strengths {
        if let Some(domain) = catalog.domain_of(strength) {
            *counts.entry(domain).or_insert(0) += 1;
        }
    }

    let mut best: Option<(&'c str, u32)> = None;
    for domain in catalog.domains() {
        let count = counts.get(domain.as_str()).copied().unwrap_or(0);
        if count > 0 && best.map_or(true, |(_, b)| count > b) {
            best = Some((domain.as_str(), count));
        }
    }
    best.map(|(d, _)| d)
}

/// Members whose tagged domain differs from the domain implied by their
/// strengths. Members without a tag or without catalogued strengths are
/// skipped. Roster order is preserved.
pub fn find_domain_mismatches(
    members: &[TeamMember],
    catalog: &ReferenceCatalog,
) -> Vec<DomainMismatch> {
    members
        .iter()
        .filter_map(|member| {
            let tagged = member.primary_domain()?;
            let implied = implied_domain(member, catalog)?;
            if tagged == implied {
                return None;
            }
            Some(DomainMismatch {
                member_id: member.id.clone(),
                member_name: member.name.clone(),
                tagged_domain: tagged.to_string(),
                implied_domain: implied.to_string(),
            })
        })
        .collect()
}
