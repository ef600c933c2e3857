//! Runtime error type.

use std::path::PathBuf;

use team_strengths_engine::catalog::CatalogError;
use team_strengths_engine::roster::RosterError;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid roster: {0}")]
    Roster(#[from] RosterError),

    #[error("unsupported catalog file {path:?}: expected a .json or .toml extension")]
    UnsupportedConfigFormat { path: PathBuf },

    #[error("invalid team id {0:?}: must match [a-zA-Z0-9_-]+")]
    InvalidTeamId(String),

    #[error("unknown analysis {0:?}")]
    UnknownAnalysis(String),
}
