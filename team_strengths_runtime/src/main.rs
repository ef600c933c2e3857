//! `team-strengths` command-line entry point.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use team_strengths_engine::catalog::ReferenceCatalog;
use team_strengths_engine::domain::{TeamMember, TeamReport};
use team_strengths_engine::engine::TeamAnalyzer;
use team_strengths_engine::invariants::try_validate_report;

use team_strengths_runtime::config::resolve_catalog;
use team_strengths_runtime::drift::{compare_rosters, verify_determinism};
use team_strengths_runtime::report::{rebuild_report, report_payload};
use team_strengths_runtime::roster_source::{load_roster_file, JsonRosterSource};
use team_strengths_runtime::service::{AnalysisKind, AnalyticsService};

#[derive(Parser, Debug)]
#[command(name = "team-strengths", version, about = "Team strengths analytics")]
struct Cli {
    /// Catalog file (.json or .toml). Defaults to $TEAM_STRENGTHS_CATALOG, then HIGH5.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full report for a roster file, with its canonical hash.
    Report {
        #[arg(long)]
        roster: PathBuf,
    },
    /// Recommendations, alerts and tips for a roster file.
    Insights {
        #[arg(long)]
        roster: PathBuf,
    },
    /// Run one analysis for a team stored as `<rosters>/<team>.json`.
    Team {
        #[arg(long)]
        rosters: PathBuf,
        #[arg(long)]
        team: String,
        /// strengths, composition, domains, complementarity, insights or report
        #[arg(long, default_value = "report")]
        analysis: AnalysisKind,
    },
    /// Compare two snapshots of the same team.
    Drift {
        #[arg(long)]
        before: PathBuf,
        #[arg(long)]
        after: PathBuf,
    },
    /// Check determinism and report invariants for a roster file.
    Verify {
        #[arg(long)]
        roster: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;
    let output = run(cli)?;

    let text = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);
    Ok(())
}

/// Execute one parsed command and return the JSON to print.
fn run(cli: Cli) -> Result<Value> {
    let catalog = resolve_catalog(cli.catalog.as_deref()).context("failed to load catalog")?;

    let output = match cli.command {
        Command::Report { roster } => {
            let members = read_roster(&roster)?;
            let (report, hash) = rebuild_report(&members, &catalog);
            info!(members = members.len(), hash = %hash, "built report");
            report_payload(&report, &hash)?
        }
        Command::Insights { roster } => {
            let members = read_roster(&roster)?;
            serde_json::to_value(TeamAnalyzer::new(&catalog).generate_insights(&members))?
        }
        Command::Team { rosters, team, analysis: kind } => {
            let service = AnalyticsService::new(Arc::new(catalog), JsonRosterSource::new(rosters));
            service
                .handle(kind, &team)
                .with_context(|| format!("{} analysis failed for team {:?}", kind, team))?
        }
        Command::Drift { before, after } => {
            let before = read_roster(&before)?;
            let after = read_roster(&after)?;
            serde_json::to_value(compare_rosters(&before, &after, &catalog))?
        }
        Command::Verify { roster } => {
            let members = read_roster(&roster)?;
            verify(&members, &catalog)?
        }
    };
    Ok(output)
}

fn read_roster(path: &Path) -> Result<Vec<TeamMember>> {
    load_roster_file(path).with_context(|| format!("failed to read roster {}", path.display()))
}

fn verify(members: &[TeamMember], catalog: &ReferenceCatalog) -> Result<Value> {
    verify_determinism(members, catalog);
    let (report, hash) = rebuild_report(members, catalog);
    check_report(members, catalog, &report, &hash)
}

/// An `Err` here makes the process exit non-zero.
fn check_report(
    members: &[TeamMember],
    catalog: &ReferenceCatalog,
    report: &TeamReport,
    hash: &str,
) -> Result<Value> {
    if let Err(msg) = try_validate_report(members, catalog, report) {
        bail!("invariant violation: {}", msg);
    }
    Ok(serde_json::json!({ "ok": true, "hash": hash }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ROSTER: &str = r#"[
        {"id": "1", "name": "Juan", "strengths": ["Coach", "Deliverer"], "domain": "Motivating"},
        {"id": "2", "name": "Ana", "strengths": ["Commander", "Brainstormer"], "domain": "Thinking"},
        {"id": "3", "name": "Luis", "strengths": ["Empathizer", "Deliverer"], "domain": "Feeling"}
    ]"#;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("team-strengths").chain(args.iter().copied()))
    }

    fn roster_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("alpha.json"), ROSTER).unwrap();
        dir
    }

    fn catalog_file(dir: &Path) -> PathBuf {
        let path = dir.join("catalog.json");
        let body = serde_json::to_string(&ReferenceCatalog::high5().to_config()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_parses_report_with_global_flags() {
        let cli = parse(&["report", "--roster", "r.json", "--pretty", "--catalog", "c.toml"]).unwrap();
        assert!(cli.pretty);
        assert_eq!(cli.catalog, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Command::Report { ref roster } if roster == Path::new("r.json")));
    }

    #[test]
    fn test_team_analysis_defaults_to_report() {
        let cli = parse(&["team", "--rosters", "d", "--team", "alpha"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Team { analysis: AnalysisKind::Report, .. }
        ));
    }

    #[test]
    fn test_unknown_analysis_is_rejected() {
        let err = parse(&["team", "--rosters", "d", "--team", "alpha", "--analysis", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_required_flag_is_rejected() {
        assert!(parse(&["drift", "--before", "a.json"]).is_err());
        assert!(parse(&["verify"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_report_command_returns_payload_and_hash() {
        let dir = roster_dir();
        let roster = dir.path().join("alpha.json");
        let catalog = catalog_file(dir.path());
        let cli = parse(&[
            "report",
            "--roster",
            roster.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
        ])
        .unwrap();
        let out = run(cli).unwrap();
        assert_eq!(out["report"]["memberCount"], 3);
        assert_eq!(out["hash"].as_str().map(str::len), Some(64));
    }

    #[test]
    fn test_team_command_runs_named_analysis() {
        let dir = roster_dir();
        let catalog = catalog_file(dir.path());
        let cli = parse(&[
            "team",
            "--rosters",
            dir.path().to_str().unwrap(),
            "--team",
            "alpha",
            "--analysis",
            "domains",
            "--catalog",
            catalog.to_str().unwrap(),
        ])
        .unwrap();
        let out = run(cli).unwrap();
        assert_eq!(out["dominantDomain"], "Feeling");
        assert_eq!(out["gaps"], serde_json::json!(["Doing"]));
    }

    #[test]
    fn test_team_command_rejects_bad_team_id() {
        let dir = roster_dir();
        let catalog = catalog_file(dir.path());
        let cli = parse(&[
            "team",
            "--rosters",
            dir.path().to_str().unwrap(),
            "--team",
            "../alpha",
            "--catalog",
            catalog.to_str().unwrap(),
        ])
        .unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_verify_command_succeeds_for_valid_roster() {
        let dir = roster_dir();
        let roster = dir.path().join("alpha.json");
        let catalog = catalog_file(dir.path());
        let cli = parse(&[
            "verify",
            "--roster",
            roster.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(run(cli).unwrap()["ok"], true);
    }

    #[test]
    fn test_check_report_fails_on_inconsistent_report() {
        let catalog = ReferenceCatalog::high5();
        let members = parse_roster_str(ROSTER);
        let (mut report, hash) = rebuild_report(&members, &catalog);
        report.member_count += 1;
        let err = check_report(&members, &catalog, &report, &hash).unwrap_err();
        assert!(err.to_string().starts_with("invariant violation"));
    }

    #[test]
    fn test_missing_roster_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_file(dir.path());
        let missing = dir.path().join("absent.json");
        let cli = parse(&[
            "insights",
            "--roster",
            missing.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
        ])
        .unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("failed to read roster"));
    }

    fn parse_roster_str(text: &str) -> Vec<TeamMember> {
        team_strengths_engine::roster::parse_roster(text).unwrap()
    }
}
