//! Report building: run the engine over a roster snapshot and digest
//! the result.
//!
//! Delegates all analysis to the engine. No caching: every call
//! recomputes from the roster it is given.

use serde_json::Value;

use team_strengths_engine::catalog::ReferenceCatalog;
use team_strengths_engine::domain::{TeamMember, TeamReport};
use team_strengths_engine::engine::build_report;
use team_strengths_engine::hashing::canonical_hash;

use crate::error::RuntimeError;

/// Build the full report for a roster and return it with its canonical
/// hash.
pub fn rebuild_report(members: &[TeamMember], catalog: &ReferenceCatalog) -> (TeamReport, String) {
    let report = build_report(members, catalog);
    let hash = canonical_hash(&report);
    (report, hash)
}

/// Build the report and return only the canonical hash.
pub fn rebuild_hash(members: &[TeamMember], catalog: &ReferenceCatalog) -> String {
    let (_, hash) = rebuild_report(members, catalog);
    hash
}

/// Response envelope: the report payload plus its digest.
pub fn report_payload(report: &TeamReport, hash: &str) -> Result<Value, RuntimeError> {
    Ok(serde_json::json!({
        "report": serde_json::to_value(report)?,
        "hash": hash,
    }))
}
