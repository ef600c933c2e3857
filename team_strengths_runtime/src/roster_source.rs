//! Roster sources.
//!
//! The data-access seam: resolve a team id to its current roster. A
//! team that does not exist resolves to an empty roster so the analyses
//! still return their empty shapes.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use team_strengths_engine::domain::TeamMember;
use team_strengths_engine::roster::parse_roster;

use crate::error::RuntimeError;

/// Validated team identifier: ASCII `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamId(String);

impl TeamId {
    pub fn parse(raw: &str) -> Result<Self, RuntimeError> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            return Err(RuntimeError::InvalidTeamId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a team to its member roster.
pub trait RosterSource: Send + Sync {
    fn team_members(&self, team_id: &TeamId) -> Result<Vec<TeamMember>, RuntimeError>;
}

/// Rosters held in memory, keyed by team id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterSource {
    teams: BTreeMap<TeamId, Vec<TeamMember>>,
}

impl InMemoryRosterSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, team_id: TeamId, members: Vec<TeamMember>) -> Self {
        self.insert(team_id, members);
        self
    }

    pub fn insert(&mut self, team_id: TeamId, members: Vec<TeamMember>) {
        self.teams.insert(team_id, members);
    }
}

impl RosterSource for InMemoryRosterSource {
    fn team_members(&self, team_id: &TeamId) -> Result<Vec<TeamMember>, RuntimeError> {
        Ok(self.teams.get(team_id).cloned().unwrap_or_default())
    }
}

/// One `<team_id>.json` roster file per team in a directory.
#[derive(Debug, Clone)]
pub struct JsonRosterSource {
    dir: PathBuf,
}

impl JsonRosterSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, team_id: &TeamId) -> PathBuf {
        self.dir.join(format!("{}.json", team_id))
    }
}

impl RosterSource for JsonRosterSource {
    fn team_members(&self, team_id: &TeamId) -> Result<Vec<TeamMember>, RuntimeError> {
        let path = self.path_for(team_id);
        match fs::read_to_string(&path) {
            Ok(text) => {
                let members = parse_roster(&text)?;
                debug!(team = %team_id, members = members.len(), "loaded roster file");
                Ok(members)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(team = %team_id, path = %path.display(), "roster file not found; using empty roster");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Read a single roster file.
pub fn load_roster_file(path: &Path) -> Result<Vec<TeamMember>, RuntimeError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_roster(&text)?)
}
