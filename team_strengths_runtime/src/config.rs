//! Catalog configuration loading.
//!
//! A catalog file is JSON or TOML, chosen by extension. The path comes
//! from the caller or from `TEAM_STRENGTHS_CATALOG`; with neither, the
//! built-in HIGH5 catalog is used.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use team_strengths_engine::catalog::{CatalogConfig, ReferenceCatalog};

use crate::error::RuntimeError;

/// Environment variable naming a catalog file.
pub const CATALOG_ENV: &str = "TEAM_STRENGTHS_CATALOG";

/// Parse a catalog configuration from a file.
pub fn load_catalog_config(path: &Path) -> Result<CatalogConfig, RuntimeError> {
    let text = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(serde_json::from_str(&text)?),
        Some("toml") => Ok(toml::from_str(&text)?),
        _ => Err(RuntimeError::UnsupportedConfigFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<ReferenceCatalog, RuntimeError> {
    let catalog = ReferenceCatalog::from_config(load_catalog_config(path)?)?;
    info!(
        path = %path.display(),
        domains = catalog.domains().len(),
        strengths = catalog.strength_count(),
        synergies = catalog.synergy_count(),
        "loaded reference catalog"
    );
    Ok(catalog)
}

/// Explicit path first, then `TEAM_STRENGTHS_CATALOG`, then the HIGH5
/// built-in.
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<ReferenceCatalog, RuntimeError> {
    resolve_catalog_with(explicit, std::env::var_os(CATALOG_ENV))
}

/// `resolve_catalog` with the environment value passed in.
pub fn resolve_catalog_with(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Result<ReferenceCatalog, RuntimeError> {
    let from_env = env_value.filter(|v| !v.is_empty()).map(PathBuf::from);
    match explicit.map(Path::to_path_buf).or(from_env) {
        Some(path) => load_catalog(&path),
        None => {
            info!("using built-in HIGH5 catalog");
            Ok(ReferenceCatalog::high5())
        }
    }
}
