//! Core data types.
//!
//! Pure data. No analysis logic lives here.
//! Field names serialize in camelCase, matching the payloads the web
//! layer consumes.

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

// ── Input ──────────────────────────────────────────────────────────

/// One roster entry as supplied by the data-access layer.
///
/// `Deserialize` is implemented in `roster.rs` on top of the lenient
/// `TeamMember::from_value`, so every decoding path accepts the same
/// loosely shaped records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub strengths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl TeamMember {
    pub fn new(id: &str, name: &str, strengths: &[&str], domain: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            domain: domain.map(str::to_string),
        }
    }

    /// The member's primary domain. An empty string counts as absent.
    pub fn primary_domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }
}

// ── Analysis results ───────────────────────────────────────────────

/// Raw strength and domain frequencies across a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamComposition {
    pub strengths_count: BTreeMap<String, u32>,
    pub domains_count: BTreeMap<String, u32>,
}

/// Representation of each canonical domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDomainAnalysis {
    pub balance: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_domain: Option<String>,
    pub gaps: Vec<String>,
}

/// Member pairs whose domains form a known synergy.
/// `synergies[i]` describes `pairs[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamComplementarity {
    pub pairs: Vec<(TeamMember, TeamMember)>,
    pub synergies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInsights {
    pub recommendations: Vec<String>,
    pub alerts: Vec<String>,
    pub kaizen_tips: Vec<String>,
}

/// Domain counts where every strength occurrence is attributed to the
/// catalog domain it belongs to, rather than to the member's tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthAttribution {
    pub domains_count: BTreeMap<String, u32>,
    /// Distinct strength names absent from the catalog, sorted.
    pub unknown_strengths: Vec<String>,
}

/// A member whose tagged domain disagrees with the domain most of their
/// strengths belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMismatch {
    pub member_id: String,
    pub member_name: String,
    pub tagged_domain: String,
    pub implied_domain: String,
}

/// Every analysis for one roster snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport {
    pub member_count: usize,
    pub team_strengths: Vec<String>,
    pub composition: TeamComposition,
    pub domain_analysis: TeamDomainAnalysis,
    pub complementarity: TeamComplementarity,
    pub insights: TeamInsights,
    pub strength_attribution: StrengthAttribution,
    pub domain_mismatches: Vec<DomainMismatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_domain_treats_empty_as_absent() {
        let m = TeamMember::new("1", "Juan", &[], Some(""));
        assert_eq!(m.primary_domain(), None);
        let m = TeamMember::new("1", "Juan", &[], Some("Doing"));
        assert_eq!(m.primary_domain(), Some("Doing"));
    }

    #[test]
    fn test_member_deserializes_with_missing_fields() {
        let m: TeamMember = serde_json::from_str(r#"{"id":"7","name":"Eva"}"#).unwrap();
        assert!(m.strengths.is_empty());
        assert_eq!(m.domain, None);
    }

    #[test]
    fn test_outputs_use_camel_case() {
        let insights = TeamInsights {
            kaizen_tips: vec!["tip".to_string()],
            ..Default::default()
        };
        let v = serde_json::to_value(&insights).unwrap();
        assert_eq!(v["kaizenTips"][0], "tip");

        let analysis = TeamDomainAnalysis::default();
        let v = serde_json::to_value(&analysis).unwrap();
        assert!(v.get("dominantDomain").is_none());
        assert!(v["gaps"].as_array().unwrap().is_empty());
    }
}
