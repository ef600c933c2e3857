//! Report invariant checks.
//!
//! Consistency rules every report built from a roster must satisfy.
//! `validate_report` panics on the first failure; `try_validate_report`
//! returns it instead.

use std::collections::BTreeSet;

use crate::catalog::ReferenceCatalog;
use crate::domain::{TeamMember, TeamReport};

/// Balance ratios must sum to 1 within this tolerance.
pub const BALANCE_TOLERANCE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run every check. Panics on the first failure.
pub fn validate_report(members: &[TeamMember], catalog: &ReferenceCatalog, report: &TeamReport) {
    if let Err(msg) = try_validate_report(members, catalog, report) {
        panic!("Invariant violation: {}", msg);
    }
}

/// Non-panicking variant of `validate_report`.
pub fn try_validate_report(
    members: &[TeamMember],
    catalog: &ReferenceCatalog,
    report: &TeamReport,
) -> Result<(), String> {
    check_member_count(members, report)?;
    check_domain_totals(members, report)?;
    check_strength_totals(members, report)?;
    check_balance_keys(catalog, report)?;
    check_balance_normalized(report)?;
    check_gaps_match_zero_counts(catalog, report)?;
    check_dominant_is_maximal(report)?;
    check_pair_parity(report)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual checks
// ---------------------------------------------------------------------------

fn check_member_count(members: &[TeamMember], report: &TeamReport) -> Result<(), String> {
    if report.member_count != members.len() {
        return Err(format!(
            "[INVARIANT:member_count] report counts {} members, roster has {}",
            report.member_count,
            members.len()
        ));
    }
    Ok(())
}

/// Domain counts sum to the number of members carrying a domain.
fn check_domain_totals(members: &[TeamMember], report: &TeamReport) -> Result<(), String> {
    let expected = members.iter().filter(|m| m.primary_domain().is_some()).count() as u64;
    let actual: u64 = report.composition.domains_count.values().map(|c| u64::from(*c)).sum();
    if expected != actual {
        return Err(format!(
            "[INVARIANT:domain_totals] domain counts sum to {}, expected {}",
            actual, expected
        ));
    }
    Ok(())
}

/// Strength counts sum to the total length of all strengths lists.
fn check_strength_totals(members: &[TeamMember], report: &TeamReport) -> Result<(), String> {
    let expected: u64 = members.iter().map(|m| m.strengths.len() as u64).sum();
    let actual: u64 = report.composition.strengths_count.values().map(|c| u64::from(*c)).sum();
    if expected != actual {
        return Err(format!(
            "[INVARIANT:strength_totals] strength counts sum to {}, expected {}",
            actual, expected
        ));
    }
    Ok(())
}

/// Balance has exactly one entry per canonical domain.
fn check_balance_keys(catalog: &ReferenceCatalog, report: &TeamReport) -> Result<(), String> {
    let keys: BTreeSet<&str> = report.domain_analysis.balance.keys().map(String::as_str).collect();
    let canonical: BTreeSet<&str> = catalog.domains().iter().map(String::as_str).collect();
    if keys != canonical {
        return Err(format!(
            "[INVARIANT:balance_keys] balance covers {:?}, canonical domains are {:?}",
            keys, canonical
        ));
    }
    Ok(())
}

/// Balance sums to 1 when any canonical domain is represented, else to 0.
fn check_balance_normalized(report: &TeamReport) -> Result<(), String> {
    let analysis = &report.domain_analysis;
    let sum: f64 = analysis.balance.values().sum();
    let expected = if analysis.dominant_domain.is_some() { 1.0 } else { 0.0 };
    if (sum - expected).abs() > BALANCE_TOLERANCE {
        return Err(format!(
            "[INVARIANT:balance_normalized] balance sums to {}, expected {}",
            sum, expected
        ));
    }
    Ok(())
}

/// A canonical domain is a gap iff nobody is tagged with it.
fn check_gaps_match_zero_counts(catalog: &ReferenceCatalog, report: &TeamReport) -> Result<(), String> {
    let counts = &report.composition.domains_count;
    for domain in catalog.domains() {
        let zero = counts.get(domain).copied().unwrap_or(0) == 0;
        let gap = report.domain_analysis.gaps.contains(domain);
        if zero != gap {
            return Err(format!(
                "[INVARIANT:gaps] domain {:?} has count zero={} but gap={}",
                domain, zero, gap
            ));
        }
    }
    Ok(())
}

fn check_dominant_is_maximal(report: &TeamReport) -> Result<(), String> {
    let Some(dominant) = &report.domain_analysis.dominant_domain else {
        return Ok(());
    };
    let counts = &report.composition.domains_count;
    let dominant_count = counts.get(dominant).copied().unwrap_or(0);
    let over = report
        .domain_analysis
        .balance
        .keys()
        .find(|d| counts.get(*d).copied().unwrap_or(0) > dominant_count);
    if dominant_count == 0 || over.is_some() {
        return Err(format!(
            "[INVARIANT:dominant_domain] {:?} is not the most represented domain",
            dominant
        ));
    }
    Ok(())
}

fn check_pair_parity(report: &TeamReport) -> Result<(), String> {
    let c = &report.complementarity;
    if c.pairs.len() != c.synergies.len() {
        return Err(format!(
            "[INVARIANT:pair_parity] {} pairs but {} synergy descriptions",
            c.pairs.len(),
            c.synergies.len()
        ));
    }
    Ok(())
}
