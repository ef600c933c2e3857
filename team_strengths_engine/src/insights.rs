//! Insight generation.
//!
//! Text is assembled from fixed templates over the computed statistics.
//! No randomness, no timestamps: the same roster always produces the
//! same strings in the same order.

use std::collections::{BTreeMap, BTreeSet};

use crate::balance::analyze_domain_balance;
use crate::catalog::ReferenceCatalog;
use crate::complementarity::analyze_complementarity;
use crate::domain::{TeamComplementarity, TeamDomainAnalysis, TeamInsights, TeamMember};

/// Tips emitted for every non-empty roster.
pub const KAIZEN_TIPS: [&str; 2] = [
    "Revisit this analysis as team composition changes.",
    "Close each cycle with a short retrospective on how members used their top strengths.",
];

pub const NO_SYNERGY_ALERT: &str =
    "No natural synergies were detected between team members; pair people across domains deliberately.";

/// Compute balance and complementarity, then derive insights.
pub fn generate_insights(members: &[TeamMember], catalog: &ReferenceCatalog) -> TeamInsights {
    let balance = analyze_domain_balance(members, catalog);
    let complementarity = analyze_complementarity(members, catalog);
    insights_from(members, &balance, &complementarity)
}

/// Derive insights for `members` from already computed analyses of the
/// same roster.
pub fn insights_from(
    members: &[TeamMember],
    balance: &TeamDomainAnalysis,
    complementarity: &TeamComplementarity,
) -> TeamInsights {
    let member_count = members.len();
    if member_count == 0 {
        return TeamInsights::default();
    }

    // -- recommendations --
    let mut recommendations = Vec::new();
    if let Some(domain) = &balance.dominant_domain {
        recommendations.push(format!(
            "Leverage the team's {domain} strengths: {domain} is the most represented domain, \
             so route work that depends on it to those members and let them mentor the rest of the team."
        ));
    }
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for synergy in &complementarity.synergies {
        if seen.insert(synergy.as_str()) {
            recommendations.push(format!("Encourage collaboration between {synergy}"));
        }
    }

    // -- alerts --
    let mut alerts: Vec<String> = balance
        .gaps
        .iter()
        .map(|domain| {
            format!(
                "No member represents the {domain} domain; the team may overlook what \
                 {domain} strengths contribute. Consider development or hiring to cover it."
            )
        })
        .collect();
    if member_count >= 2 && complementarity.pairs.is_empty() {
        alerts.push(NO_SYNERGY_ALERT.to_string());
    }

    // -- kaizen tips --
    let mut kaizen_tips: Vec<String> = KAIZEN_TIPS.iter().map(|t| t.to_string()).collect();
    if let Some((strength, count)) = most_shared_strength(members) {
        kaizen_tips.push(format!(
            "{count} members share {strength}; have them swap techniques for applying it."
        ));
    }

    TeamInsights {
        recommendations,
        alerts,
        kaizen_tips,
    }
}

/// Strength held by the most distinct members, if by more than one.
/// A strength listed twice by the same member counts once for that
/// member. Ties go to the alphabetically first name.
fn most_shared_strength(members: &[TeamMember]) -> Option<(&str, usize)> {
    let mut holders: BTreeMap<&str, BTreeSet<usize>> = BTreeMap::new();
    for (index, member) in members.iter().enumerate() {
        for strength in &member.strengths {
            holders.entry(strength.as_str()).or_default().insert(index);
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (strength, who) in holders {
        let count = who.len();
        if count > 1 && best.map_or(true, |(_, b)| count > b) {
            best = Some((strength, count));
        }
    }
    best
}
