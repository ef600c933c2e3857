//! Canonical report hashing.
//!
//! Deterministic canonical serialization + SHA-256 hashing of a
//! `TeamReport`. Produces byte-identical output across platforms.
//!
//! Rules:
//!   - Fixed field order, UTF-8 JSON, no whitespace
//!   - Ratios encoded as integer basis points, never as floats
//!   - Map keys in ascending byte order
//!   - Pairs encoded by member id only

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::arithmetic::to_bp;
use crate::domain::TeamReport;
use crate::ENGINE_VERSION;

/// Canonical serialization of a report to UTF-8 JSON bytes.
pub fn canonical_serialize(report: &TeamReport) -> Vec<u8> {
    build_canonical_value(report).to_string().into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn canonical_hash(report: &TeamReport) -> String {
    let digest = Sha256::digest(canonical_serialize(report));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn counts_value(counts: &BTreeMap<String, u32>) -> Value {
    let mut map = Map::new();
    for (k, v) in counts {
        map.insert(k.clone(), Value::from(*v));
    }
    Value::Object(map)
}

fn strings_value(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

/// Field order: engine_version, member_count, team_strengths,
/// composition, domain_analysis, complementarity, insights,
/// strength_attribution, domain_mismatches.
fn build_canonical_value(report: &TeamReport) -> Value {
    // -- composition ---
    let mut composition = Map::new();
    composition.insert(
        "strengths_count".to_string(),
        counts_value(&report.composition.strengths_count),
    );
    composition.insert(
        "domains_count".to_string(),
        counts_value(&report.composition.domains_count),
    );

    // -- domain analysis (basis points) ---
    let analysis = &report.domain_analysis;
    let mut balance_bp = Map::new();
    for (domain, ratio) in &analysis.balance {
        balance_bp.insert(domain.clone(), Value::from(to_bp(*ratio)));
    }
    let mut domain_analysis = Map::new();
    domain_analysis.insert("balance_bp".to_string(), Value::Object(balance_bp));
    domain_analysis.insert(
        "dominant_domain".to_string(),
        analysis
            .dominant_domain
            .clone()
            .map(Value::String)
            .unwrap_or(Value::Null),
    );
    domain_analysis.insert("gaps".to_string(), strings_value(&analysis.gaps));

    // -- complementarity ---
    let pairs: Vec<Value> = report
        .complementarity
        .pairs
        .iter()
        .map(|(a, b)| Value::Array(vec![Value::String(a.id.clone()), Value::String(b.id.clone())]))
        .collect();
    let mut complementarity = Map::new();
    complementarity.insert("pairs".to_string(), Value::Array(pairs));
    complementarity.insert(
        "synergies".to_string(),
        strings_value(&report.complementarity.synergies),
    );

    // -- insights ---
    let mut insights = Map::new();
    insights.insert(
        "recommendations".to_string(),
        strings_value(&report.insights.recommendations),
    );
    insights.insert("alerts".to_string(), strings_value(&report.insights.alerts));
    insights.insert(
        "kaizen_tips".to_string(),
        strings_value(&report.insights.kaizen_tips),
    );

    // -- strength attribution ---
    let mut attribution = Map::new();
    attribution.insert(
        "domains_count".to_string(),
        counts_value(&report.strength_attribution.domains_count),
    );
    attribution.insert(
        "unknown_strengths".to_string(),
        strings_value(&report.strength_attribution.unknown_strengths),
    );

    // -- mismatches ---
    let mismatches: Vec<Value> = report
        .domain_mismatches
        .iter()
        .map(|m| {
            let mut map = Map::new();
            map.insert("member_id".to_string(), Value::String(m.member_id.clone()));
            map.insert("tagged_domain".to_string(), Value::String(m.tagged_domain.clone()));
            map.insert("implied_domain".to_string(), Value::String(m.implied_domain.clone()));
            Value::Object(map)
        })
        .collect();

    // -- top-level (strict field order) ---
    let mut root = Map::new();
    root.insert("engine_version".to_string(), Value::from(ENGINE_VERSION));
    root.insert("member_count".to_string(), Value::from(report.member_count as u64));
    root.insert("team_strengths".to_string(), strings_value(&report.team_strengths));
    root.insert("composition".to_string(), Value::Object(composition));
    root.insert("domain_analysis".to_string(), Value::Object(domain_analysis));
    root.insert("complementarity".to_string(), Value::Object(complementarity));
    root.insert("insights".to_string(), Value::Object(insights));
    root.insert("strength_attribution".to_string(), Value::Object(attribution));
    root.insert("domain_mismatches".to_string(), Value::Array(mismatches));

    Value::Object(root)
}
