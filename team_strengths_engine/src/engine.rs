//! Analyzer entry points.
//!
//! `TeamAnalyzer` borrows one catalog for its lifetime and exposes the
//! analyses as methods. It holds no other state, so a single analyzer
//! can serve any number of rosters, concurrently if shared by reference.

use crate::balance::{analyze_domain_balance, find_domain_mismatches};
use crate::catalog::ReferenceCatalog;
use crate::complementarity::analyze_complementarity;
use crate::composition::{analyze_composition, analyze_strength_domains, team_strengths};
use crate::domain::{
    DomainMismatch, StrengthAttribution, TeamComplementarity, TeamComposition,
    TeamDomainAnalysis, TeamInsights, TeamMember, TeamReport,
};
use crate::insights::{generate_insights, insights_from};

#[derive(Debug, Clone, Copy)]
pub struct TeamAnalyzer<'c> {
    catalog: &'c ReferenceCatalog,
}

impl<'c> TeamAnalyzer<'c> {
    pub fn new(catalog: &'c ReferenceCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c ReferenceCatalog {
        self.catalog
    }

    pub fn analyze_composition(&self, members: &[TeamMember]) -> TeamComposition {
        analyze_composition(members)
    }

    pub fn analyze_domain_balance(&self, members: &[TeamMember]) -> TeamDomainAnalysis {
        analyze_domain_balance(members, self.catalog)
    }

    pub fn analyze_complementarity(&self, members: &[TeamMember]) -> TeamComplementarity {
        analyze_complementarity(members, self.catalog)
    }

    pub fn generate_insights(&self, members: &[TeamMember]) -> TeamInsights {
        generate_insights(members, self.catalog)
    }

    pub fn team_strengths(&self, members: &[TeamMember]) -> Vec<String> {
        team_strengths(members)
    }

    pub fn analyze_strength_domains(&self, members: &[TeamMember]) -> StrengthAttribution {
        analyze_strength_domains(members, self.catalog)
    }

    pub fn find_domain_mismatches(&self, members: &[TeamMember]) -> Vec<DomainMismatch> {
        find_domain_mismatches(members, self.catalog)
    }

    pub fn build_report(&self, members: &[TeamMember]) -> TeamReport {
        build_report(members, self.catalog)
    }
}

/// Run every analysis over one roster snapshot.
///
/// Insights are derived from the same balance and complementarity
/// values stored in the report, so they match what
/// `generate_insights` would return for the roster.
pub fn build_report(members: &[TeamMember], catalog: &ReferenceCatalog) -> TeamReport {
    let composition = analyze_composition(members);
    let domain_analysis = analyze_domain_balance(members, catalog);
    let complementarity = analyze_complementarity(members, catalog);
    let insights = insights_from(members, &domain_analysis, &complementarity);

    TeamReport {
        member_count: members.len(),
        team_strengths: team_strengths(members),
        composition,
        domain_analysis,
        complementarity,
        insights,
        strength_attribution: analyze_strength_domains(members, catalog),
        domain_mismatches: find_domain_mismatches(members, catalog),
    }
}
