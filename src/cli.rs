use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, DEFAULT_MATCH_THRESHOLD};
use crate::myths::{EngineConfig, MatchMode, MythCatalog, MythCheck, MythEngine};

#[derive(Parser, Debug)]
#[command(name = "nurture-glow", version)]
#[command(about = "Offline checker for common pregnancy and baby-health myths")]
pub struct Cli {
    /// Print one JSON object per line instead of text
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
    /// Catalog override file (JSON). Falls back to NURTURE_GLOW_CATALOG.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Minimum score a record must exceed to count as a match
    #[arg(long, global = true, default_value_t = DEFAULT_MATCH_THRESHOLD)]
    pub threshold: usize,
    /// Only match trigger phrases that stand as whole words
    #[arg(long, global = true, default_value_t = false)]
    pub word_boundary: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check statements given as arguments, or one per line on stdin
    Check { statements: Vec<String> },
    /// List the known claims
    List,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            threshold: self.threshold,
            match_mode: if self.word_boundary {
                MatchMode::WordBoundary
            } else {
                MatchMode::Substring
            },
        }
    }
}

/// Build the engine for this invocation: catalog override if configured,
/// bundled catalog otherwise.
pub fn build_engine(cli: &Cli) -> Result<MythEngine> {
    let catalog = match config::catalog_override_path(cli.catalog.as_deref()) {
        Some(path) => Arc::new(
            MythCatalog::load(&path)
                .with_context(|| format!("loading catalog override {}", path.display()))?,
        ),
        None => MythCatalog::builtin(),
    };
    Ok(MythEngine::new(catalog, cli.engine_config())?)
}

/// Entry point used by `main`: real stdin and stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let engine = build_engine(cli)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(&cli.command, cli.json, &engine, stdin.lock(), stdout.lock())
}

pub fn execute(
    command: &Commands,
    json: bool,
    engine: &MythEngine,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    match command {
        Commands::Check { statements } if !statements.is_empty() => {
            for statement in statements {
                check_one(engine, statement, json, &mut out)?;
            }
        }
        Commands::Check { .. } => {
            let mut buf = Vec::new();
            loop {
                buf.clear();
                let read = input
                    .read_until(b'\n', &mut buf)
                    .context("reading statement from stdin")?;
                if read == 0 {
                    break;
                }
                let line = String::from_utf8_lossy(&buf);
                if matches!(line, Cow::Owned(_)) {
                    tracing::warn!("Statement is not valid UTF-8, checking lossy text");
                }
                let statement = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
                check_one(engine, statement, json, &mut out)?;
            }
        }
        Commands::List => list(engine.catalog(), json, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn check_one(
    engine: &MythEngine,
    statement: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if statement.trim().is_empty() {
        return Ok(());
    }

    let check = MythCheck::run(engine, statement);
    if json {
        writeln!(out, "{}", serde_json::to_string(&check)?)?;
        return Ok(());
    }

    writeln!(out, "{}", check.share_text())?;
    writeln!(out, "Safe advice:")?;
    for advice in &check.result.safe_advice {
        writeln!(out, "  - {advice}")?;
    }
    writeln!(out, "Call your doctor if:")?;
    for sign in &check.result.escalation_signs {
        writeln!(out, "  - {sign}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn list(catalog: &MythCatalog, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(catalog.records())?)?;
        return Ok(());
    }
    for record in catalog.records() {
        writeln!(out, "{:<4} {:<8} {}", record.id, record.verdict, record.claim)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_to_string(args: &[&str], stdin: &str) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let engine = MythEngine::new(MythCatalog::builtin(), cli.engine_config()).unwrap();
        let mut out = Vec::new();
        execute(&cli.command, cli.json, &engine, Cursor::new(stdin), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn check_argument_prints_share_text_and_advice() {
        let out = run_to_string(
            &["nurture-glow", "check", "Can spicy food cause a miscarriage?"],
            "",
        );
        assert!(out.contains("Verdict: False"));
        assert!(out.contains("  - Eat small portions"));
        assert!(out.contains("Call your doctor if:"));
        assert!(out.contains("severe abdominal pain"));
    }

    #[test]
    fn check_reads_stdin_lines_and_skips_blanks() {
        let out = run_to_string(&["nurture-glow", "--json", "check"], "coffee\n\n   \npapaya\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["result"]["id"], "m1");
        assert_eq!(second["result"]["id"], "m9");
        assert_eq!(first["statement"], "coffee");
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_the_batch() {
        let cli = Cli::try_parse_from(["nurture-glow", "--json", "check"]).unwrap();
        let engine = MythEngine::new(MythCatalog::builtin(), cli.engine_config()).unwrap();
        let stdin: &[u8] = b"coffee\n\xff\xfe spicy food\r\npapaya";
        let mut out = Vec::new();
        execute(&cli.command, cli.json, &engine, stdin, &mut out).unwrap();

        let ids: Vec<String> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["result"]["id"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(ids, vec!["m1", "m2", "m9"]);
    }

    #[test]
    fn json_fallback_result() {
        let out = run_to_string(&["nurture-glow", "check", "--json", "qwxz"], "");
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["result"]["matchKind"]["kind"], "fallback");
        assert_eq!(value["result"]["verdict"], "Depends");
    }

    #[test]
    fn threshold_and_word_boundary_flags() {
        let cli = Cli::try_parse_from([
            "nurture-glow",
            "--threshold",
            "5",
            "--word-boundary",
            "list",
        ])
        .unwrap();
        let config = cli.engine_config();
        assert_eq!(config.threshold, 5);
        assert_eq!(config.match_mode, MatchMode::WordBoundary);

        let out = run_to_string(&["nurture-glow", "--word-boundary", "check", "steaks"], "");
        assert!(out.contains("Source: Nurture Glow General Guidance"));
    }

    #[test]
    fn list_prints_every_record() {
        let out = run_to_string(&["nurture-glow", "list"], "");
        assert_eq!(out.lines().count(), 15);
        assert!(out.lines().next().unwrap().starts_with("m1"));
        assert!(out.contains("Pineapple can cause labor or miscarriage."));
    }

    #[test]
    fn list_json_is_array() {
        let out = run_to_string(&["nurture-glow", "list", "--json"], "");
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 15);
    }

    #[test]
    fn explicit_missing_catalog_fails() {
        let cli = Cli::try_parse_from([
            "nurture-glow",
            "--catalog",
            "/nonexistent/catalog.json",
            "list",
        ])
        .unwrap();
        let err = build_engine(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("loading catalog override"));
    }
}
