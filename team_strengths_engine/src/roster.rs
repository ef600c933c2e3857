//! Roster parsing.
//!
//! Records coming from the data-access layer are loosely shaped. A
//! missing or null `domain` means "not counted", a missing or null
//! `strengths` means an empty list, and non-string strength entries are
//! dropped. Only a roster that is not a list at all is rejected.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::domain::TeamMember;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("roster must be a JSON array or an object with a \"members\" array")]
    NotAList,
}

impl TeamMember {
    /// Lenient conversion from a loosely shaped JSON record.
    pub fn from_value(v: &Value) -> Self {
        Self {
            id: scalar_string(v.get("id")),
            name: scalar_string(v.get("name")),
            strengths: v
                .get("strengths")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            domain: v
                .get("domain")
                .and_then(Value::as_str)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }
    }
}

impl<'de> Deserialize<'de> for TeamMember {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        if !v.is_object() {
            return Err(de::Error::custom("team member must be a JSON object"));
        }
        Ok(TeamMember::from_value(&v))
    }
}

/// Accepts either a bare array of members or `{"members": [...]}`.
pub fn roster_from_value(v: &Value) -> Result<Vec<TeamMember>, RosterError> {
    let items = match v {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("members")
            .and_then(Value::as_array)
            .ok_or(RosterError::NotAList)?,
        _ => return Err(RosterError::NotAList),
    };
    Ok(items.iter().map(TeamMember::from_value).collect())
}

pub fn parse_roster(json: &str) -> Result<Vec<TeamMember>, RosterError> {
    let v: Value = serde_json::from_str(json)?;
    roster_from_value(&v)
}

fn scalar_string(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
