//! Analytics service: the request-handling wrappers.
//!
//! Each handler resolves the team roster through the injected
//! `RosterSource`, runs one engine analysis against the shared catalog
//! and returns the typed result or a JSON payload.
//!
//! No per-request state is kept. The catalog sits behind an `Arc` and
//! is never mutated, so one service can be shared across threads
//! without locking.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use team_strengths_engine::catalog::ReferenceCatalog;
use team_strengths_engine::complementarity::candidate_pairs;
use team_strengths_engine::domain::{
    TeamComplementarity, TeamComposition, TeamDomainAnalysis, TeamInsights, TeamMember, TeamReport,
};
use team_strengths_engine::engine::TeamAnalyzer;

use crate::error::RuntimeError;
use crate::roster_source::{RosterSource, TeamId};

/// Analyses a handler can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Strengths,
    Composition,
    DomainAnalysis,
    Complementarity,
    Insights,
    Report,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 6] = [
        AnalysisKind::Strengths,
        AnalysisKind::Composition,
        AnalysisKind::DomainAnalysis,
        AnalysisKind::Complementarity,
        AnalysisKind::Insights,
        AnalysisKind::Report,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Strengths => "strengths",
            AnalysisKind::Composition => "composition",
            AnalysisKind::DomainAnalysis => "domains",
            AnalysisKind::Complementarity => "complementarity",
            AnalysisKind::Insights => "insights",
            AnalysisKind::Report => "report",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| RuntimeError::UnknownAnalysis(s.to_string()))
    }
}

pub struct AnalyticsService<S> {
    catalog: Arc<ReferenceCatalog>,
    source: S,
}

impl<S: RosterSource> AnalyticsService<S> {
    pub fn new(catalog: Arc<ReferenceCatalog>, source: S) -> Self {
        Self { catalog, source }
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    fn analyzer(&self) -> TeamAnalyzer<'_> {
        TeamAnalyzer::new(&self.catalog)
    }

    /// Resolve and log the roster for one request.
    pub fn team_members(&self, team_id: &str) -> Result<Vec<TeamMember>, RuntimeError> {
        let id = TeamId::parse(team_id)?;
        let members = self.source.team_members(&id)?;
        debug!(
            team = %id,
            members = members.len(),
            candidate_pairs = candidate_pairs(members.len()),
            "resolved roster"
        );
        Ok(members)
    }

    pub fn team_strengths(&self, team_id: &str) -> Result<Vec<String>, RuntimeError> {
        let members = self.team_members(team_id)?;
        Ok(self.analyzer().team_strengths(&members))
    }

    pub fn team_composition(&self, team_id: &str) -> Result<TeamComposition, RuntimeError> {
        let members = self.team_members(team_id)?;
        Ok(self.analyzer().analyze_composition(&members))
    }

    pub fn team_domain_analysis(&self, team_id: &str) -> Result<TeamDomainAnalysis, RuntimeError> {
        let members = self.team_members(team_id)?;
        let analysis = self.analyzer().analyze_domain_balance(&members);
        debug!(team = team_id, dominant = ?analysis.dominant_domain, gaps = analysis.gaps.len(), "domain analysis");
        Ok(analysis)
    }

    pub fn team_complementarity(&self, team_id: &str) -> Result<TeamComplementarity, RuntimeError> {
        let members = self.team_members(team_id)?;
        let result = self.analyzer().analyze_complementarity(&members);
        debug!(team = team_id, pairs = result.pairs.len(), "complementarity");
        Ok(result)
    }

    pub fn team_insights(&self, team_id: &str) -> Result<TeamInsights, RuntimeError> {
        let members = self.team_members(team_id)?;
        Ok(self.analyzer().generate_insights(&members))
    }

    pub fn team_report(&self, team_id: &str) -> Result<TeamReport, RuntimeError> {
        let members = self.team_members(team_id)?;
        Ok(self.analyzer().build_report(&members))
    }

    /// Run one analysis and serialize the result as the response payload.
    pub fn handle(&self, kind: AnalysisKind, team_id: &str) -> Result<Value, RuntimeError> {
        let payload = match kind {
            AnalysisKind::Strengths => serde_json::to_value(self.team_strengths(team_id)?)?,
            AnalysisKind::Composition => serde_json::to_value(self.team_composition(team_id)?)?,
            AnalysisKind::DomainAnalysis => serde_json::to_value(self.team_domain_analysis(team_id)?)?,
            AnalysisKind::Complementarity => serde_json::to_value(self.team_complementarity(team_id)?)?,
            AnalysisKind::Insights => serde_json::to_value(self.team_insights(team_id)?)?,
            AnalysisKind::Report => serde_json::to_value(self.team_report(team_id)?)?,
        };
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster_source::InMemoryRosterSource;

    fn service() -> AnalyticsService<InMemoryRosterSource> {
        let source = InMemoryRosterSource::new().with_team(
            TeamId::parse("test-team").unwrap(),
            vec![
                TeamMember::new("1", "Juan", &["Coach", "Deliverer"], Some("Motivating")),
                TeamMember::new("2", "Ana", &["Commander", "Brainstormer"], Some("Thinking")),
                TeamMember::new("3", "Luis", &["Empathizer", "Deliverer"], Some("Feeling")),
            ],
        );
        AnalyticsService::new(Arc::new(ReferenceCatalog::high5()), source)
    }

    #[test]
    fn test_analysis_kind_parses_its_own_names() {
        for kind in AnalysisKind::ALL {
            assert_eq!(kind.as_str().parse::<AnalysisKind>().unwrap(), kind);
        }
        assert!(matches!(
            "nonsense".parse::<AnalysisKind>(),
            Err(RuntimeError::UnknownAnalysis(_))
        ));
    }

    #[test]
    fn test_team_strengths_handler() {
        let strengths = service().team_strengths("test-team").unwrap();
        assert_eq!(
            strengths,
            vec!["Brainstormer", "Coach", "Commander", "Deliverer", "Empathizer"]
        );
    }

    #[test]
    fn test_handlers_return_payloads() {
        let svc = service();
        let composition = svc.handle(AnalysisKind::Composition, "test-team").unwrap();
        assert_eq!(composition["strengthsCount"]["Deliverer"], 2);
        let domains = svc.handle(AnalysisKind::DomainAnalysis, "test-team").unwrap();
        assert_eq!(domains["dominantDomain"], "Feeling");
        let pairs = svc.handle(AnalysisKind::Complementarity, "test-team").unwrap();
        assert_eq!(pairs["pairs"].as_array().unwrap().len(), 3);
        let insights = svc.handle(AnalysisKind::Insights, "test-team").unwrap();
        assert!(!insights["kaizenTips"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_team_yields_empty_shapes() {
        let svc = service();
        let insights = svc.team_insights("nobody").unwrap();
        assert_eq!(insights, TeamInsights::default());
        let analysis = svc.team_domain_analysis("nobody").unwrap();
        assert_eq!(analysis.gaps.len(), 4);
    }

    #[test]
    fn test_invalid_team_id_is_rejected() {
        assert!(matches!(
            service().team_composition("../secrets"),
            Err(RuntimeError::InvalidTeamId(_))
        ));
    }
}
