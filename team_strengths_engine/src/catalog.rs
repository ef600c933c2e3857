//! Reference catalog construction.
//!
//! The catalog is the only static data the analyses consult: the
//! canonical domain order, the strength-to-domain table and the
//! domain-pair synergy table. It is built once and then only read.

use std::collections::{BTreeMap, BTreeSet};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Rejected catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must list at least one domain")]
    NoDomains,

    #[error("domain names must not be empty")]
    EmptyDomainName,

    #[error("domain {0:?} is listed more than once")]
    DuplicateDomain(String),

    #[error("strength {strength:?} maps to unknown domain {domain:?}")]
    UnknownStrengthDomain { strength: String, domain: String },

    #[error("synergy references unknown domain {0:?}")]
    UnknownSynergyDomain(String),

    #[error("synergy between {0:?} and {1:?} is defined more than once")]
    DuplicateSynergy(String, String),
}

/// Unordered domain pair. The lesser name is always stored first, so
/// `(A, B)` and `(B, A)` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainPair {
    first: String,
    second: String,
}

impl DomainPair {
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// One synergy row in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynergyEntry {
    pub domains: [String; 2],
    pub rationale: String,
}

/// On-disk / serialized form of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub domains: Vec<String>,
    #[serde(default)]
    pub strengths: BTreeMap<String, String>,
    #[serde(default)]
    pub synergies: Vec<SynergyEntry>,
}

/// Validated, read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCatalog {
    domains: Vec<String>,
    strengths: BTreeMap<String, String>,
    synergies: BTreeMap<DomainPair, String>,
}

impl ReferenceCatalog {
    /// Validate a configuration and build the catalog from it.
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        if config.domains.is_empty() {
            return Err(CatalogError::NoDomains);
        }

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for domain in &config.domains {
            if domain.is_empty() {
                return Err(CatalogError::EmptyDomainName);
            }
            if !seen.insert(domain.as_str()) {
                return Err(CatalogError::DuplicateDomain(domain.clone()));
            }
        }

        for (strength, domain) in &config.strengths {
            if !seen.contains(domain.as_str()) {
                return Err(CatalogError::UnknownStrengthDomain {
                    strength: strength.clone(),
                    domain: domain.clone(),
                });
            }
        }

        let mut synergies = BTreeMap::new();
        for entry in config.synergies {
            let [a, b] = entry.domains;
            for d in [&a, &b] {
                if !seen.contains(d.as_str()) {
                    return Err(CatalogError::UnknownSynergyDomain(d.clone()));
                }
            }
            let key = DomainPair::new(&a, &b);
            if synergies.insert(key, entry.rationale).is_some() {
                return Err(CatalogError::DuplicateSynergy(a, b));
            }
        }

        Ok(Self {
            domains: config.domains,
            strengths: config.strengths,
            synergies,
        })
    }

    /// The built-in HIGH5 catalog.
    pub fn high5() -> Self {
        Self::from_config(high5_config()).expect("built-in HIGH5 catalog is valid")
    }

    /// Canonical domain order.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn is_canonical(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }

    /// Domain a strength belongs to, if catalogued.
    pub fn domain_of(&self, strength: &str) -> Option<&str> {
        self.strengths.get(strength).map(String::as_str)
    }

    /// Synergy rationale for two domains. Argument order does not matter.
    pub fn synergy(&self, a: &str, b: &str) -> Option<&str> {
        self.synergies.get(&DomainPair::new(a, b)).map(String::as_str)
    }

    pub fn strength_count(&self) -> usize {
        self.strengths.len()
    }

    pub fn synergy_count(&self) -> usize {
        self.synergies.len()
    }

    /// Serialize back to configuration form. Synergies come out in key order.
    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig {
            domains: self.domains.clone(),
            strengths: self.strengths.clone(),
            synergies: self
                .synergies
                .iter()
                .map(|(pair, rationale)| SynergyEntry {
                    domains: [pair.first().to_string(), pair.second().to_string()],
                    rationale: rationale.clone(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in HIGH5 data
// ---------------------------------------------------------------------------

const HIGH5_DOMAINS: [&str; 4] = ["Doing", "Feeling", "Motivating", "Thinking"];

const HIGH5_STRENGTHS: [(&str, &str); 20] = [
    ("Analyst", "Doing"),
    ("Deliverer", "Doing"),
    ("Focus Expert", "Doing"),
    ("Problem Solver", "Doing"),
    ("Time Keeper", "Doing"),
    ("Believer", "Feeling"),
    ("Chameleon", "Feeling"),
    ("Coach", "Feeling"),
    ("Empathizer", "Feeling"),
    ("Optimist", "Feeling"),
    ("Catalyst", "Motivating"),
    ("Commander", "Motivating"),
    ("Self-believer", "Motivating"),
    ("Storyteller", "Motivating"),
    ("Winner", "Motivating"),
    ("Brainstormer", "Thinking"),
    ("Peace Keeper", "Thinking"),
    ("Philomath", "Thinking"),
    ("Strategist", "Thinking"),
    ("Thinker", "Thinking"),
];

const HIGH5_SYNERGIES: [(&str, &str, &str); 6] = [
    (
        "Doing",
        "Feeling",
        "dependable execution grounded in care for people keeps delivery sustainable",
    ),
    (
        "Doing",
        "Motivating",
        "drive and persuasion turn into results when matched with disciplined follow-through",
    ),
    (
        "Doing",
        "Thinking",
        "ideas and analysis become shipped work when paired with reliable execution",
    ),
    (
        "Feeling",
        "Motivating",
        "energy to lead combined with empathy brings people along willingly",
    ),
    (
        "Feeling",
        "Thinking",
        "analytical depth paired with emotional awareness keeps decisions grounded in people",
    ),
    (
        "Motivating",
        "Thinking",
        "direct leadership paired with analytical rigor balances decisiveness with data",
    ),
];

/// Configuration for the built-in HIGH5 catalog.
pub fn high5_config() -> CatalogConfig {
    CatalogConfig {
        domains: HIGH5_DOMAINS.iter().map(|d| d.to_string()).collect(),
        strengths: HIGH5_STRENGTHS
            .iter()
            .map(|(s, d)| (s.to_string(), d.to_string()))
            .collect(),
        synergies: HIGH5_SYNERGIES
            .iter()
            .map(|(a, b, r)| SynergyEntry {
                domains: [a.to_string(), b.to_string()],
                rationale: r.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(domains: &[&str]) -> CatalogConfig {
        CatalogConfig {
            domains: domains.iter().map(|d| d.to_string()).collect(),
            strengths: BTreeMap::new(),
            synergies: Vec::new(),
        }
    }

    #[test]
    fn test_high5_catalog_is_complete() {
        let catalog = ReferenceCatalog::high5();
        assert_eq!(catalog.domains(), &["Doing", "Feeling", "Motivating", "Thinking"]);
        assert_eq!(catalog.strength_count(), 20);
        assert_eq!(catalog.synergy_count(), 6);
        assert_eq!(catalog.domain_of("Coach"), Some("Feeling"));
        assert_eq!(catalog.domain_of("Peace Keeper"), Some("Thinking"));
        assert_eq!(catalog.domain_of("Juggler"), None);
    }

    #[test]
    fn test_every_high5_domain_holds_five_strengths() {
        let catalog = ReferenceCatalog::high5();
        for domain in catalog.domains() {
            let n = HIGH5_STRENGTHS.iter().filter(|(_, d)| *d == domain.as_str()).count();
            assert_eq!(n, 5, "domain {}", domain);
        }
    }

    #[test]
    fn test_synergy_lookup_is_order_independent() {
        let catalog = ReferenceCatalog::high5();
        let ab = catalog.synergy("Motivating", "Thinking");
        let ba = catalog.synergy("Thinking", "Motivating");
        assert!(ab.is_some());
        assert_eq!(ab, ba);
        assert_eq!(catalog.synergy("Doing", "Doing"), None);
        assert_eq!(catalog.synergy("Doing", "Unknown"), None);
    }

    #[test]
    fn test_rejects_empty_domain_list() {
        assert_eq!(
            ReferenceCatalog::from_config(config(&[])),
            Err(CatalogError::NoDomains)
        );
    }

    #[test]
    fn test_rejects_duplicate_and_empty_domains() {
        assert_eq!(
            ReferenceCatalog::from_config(config(&["A", "B", "A"])),
            Err(CatalogError::DuplicateDomain("A".to_string()))
        );
        assert_eq!(
            ReferenceCatalog::from_config(config(&["A", ""])),
            Err(CatalogError::EmptyDomainName)
        );
    }

    #[test]
    fn test_rejects_strength_in_unknown_domain() {
        let mut cfg = config(&["A"]);
        cfg.strengths.insert("S".to_string(), "B".to_string());
        assert!(matches!(
            ReferenceCatalog::from_config(cfg),
            Err(CatalogError::UnknownStrengthDomain { .. })
        ));
    }

    #[test]
    fn test_rejects_mirrored_duplicate_synergy() {
        let mut cfg = config(&["A", "B"]);
        cfg.synergies.push(SynergyEntry {
            domains: ["A".to_string(), "B".to_string()],
            rationale: "one".to_string(),
        });
        cfg.synergies.push(SynergyEntry {
            domains: ["B".to_string(), "A".to_string()],
            rationale: "two".to_string(),
        });
        assert_eq!(
            ReferenceCatalog::from_config(cfg),
            Err(CatalogError::DuplicateSynergy("B".to_string(), "A".to_string()))
        );
    }

    #[test]
    fn test_rejects_synergy_with_unknown_domain() {
        let mut cfg = config(&["A"]);
        cfg.synergies.push(SynergyEntry {
            domains: ["A".to_string(), "Z".to_string()],
            rationale: "x".to_string(),
        });
        assert_eq!(
            ReferenceCatalog::from_config(cfg),
            Err(CatalogError::UnknownSynergyDomain("Z".to_string()))
        );
    }

    #[test]
    fn test_same_domain_synergy_is_allowed() {
        let mut cfg = config(&["A"]);
        cfg.synergies.push(SynergyEntry {
            domains: ["A".to_string(), "A".to_string()],
            rationale: "mirror".to_string(),
        });
        let catalog = ReferenceCatalog::from_config(cfg).unwrap();
        assert_eq!(catalog.synergy("A", "A"), Some("mirror"));
    }

    #[test]
    fn test_to_config_round_trips() {
        let catalog = ReferenceCatalog::high5();
        let rebuilt = ReferenceCatalog::from_config(catalog.to_config()).unwrap();
        assert_eq!(rebuilt, catalog);
    }
}
