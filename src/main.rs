//! TradeOff Position Engine - Host Binary
//!
//! Evaluates a JSON snapshot of the application state and prints the
//! resulting position economics as JSON. All arithmetic lives in the
//! library; this binary only wires configuration, logging, and I/O.
//!
//! Usage: `tradeoff-engine <snapshot.json> [config.toml]`
//!
//! Wiring sequence:
//! 1. Load config.toml + validate (defaults when the file is absent)
//! 2. Init tracing (JSON structured logging to stderr)
//! 3. Read the snapshot file
//! 4. Evaluate the selected recommendation, or all of them
//! 5. Print the result to stdout

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tradeoff_position_engine::config::{self, AppConfig};
use tradeoff_position_engine::domain::{AnalysisResult, PortfolioItem, StockInfo};
use tradeoff_position_engine::domain::pricing::parse_share_input;
use tradeoff_position_engine::ports::SystemClock;
use tradeoff_position_engine::usecases::{PositionAnalyzer, PositionEconomics};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application state captured by the host UI.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    stock_info: HashMap<String, StockInfo>,
    analysis: AnalysisResult,
    /// Index of the selected recommendation; all are evaluated when absent.
    selected: Option<usize>,
    /// Share count as typed by the user.
    shares: Option<String>,
}

/// One evaluated recommendation in the "all" output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Evaluation {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    economics: Option<PositionEconomics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .context("Usage: tradeoff-engine <snapshot.json> [config.toml]")?;
    let config_path = args.next();

    // ── 1. Load configuration ───────────────────────────────
    let config = match config_path.as_deref() {
        Some(path) => config::loader::load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            config::loader::load_config(DEFAULT_CONFIG_PATH)?
        }
        None => AppConfig::default(),
    };

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level)),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        snapshot = %snapshot_path,
        "Starting position engine"
    );

    // ── 3. Read snapshot ────────────────────────────────────
    let raw = std::fs::read_to_string(&snapshot_path)
        .with_context(|| format!("Failed to read snapshot: {snapshot_path}"))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot: {snapshot_path}"))?;

    let requested_shares = snapshot.shares.as_deref().and_then(parse_share_input);
    if snapshot.shares.is_some() && requested_shares.is_none() {
        warn!(input = ?snapshot.shares, "Share input not a positive whole number, using default");
    }

    // ── 4. Evaluate ─────────────────────────────────────────
    let analyzer = PositionAnalyzer::new(SystemClock, &config.engine);

    let output = if let Some(index) = snapshot.selected {
        let economics = analyzer
            .analyze(
                &snapshot.analysis,
                &snapshot.portfolio,
                &snapshot.stock_info,
                index,
                requested_shares,
            )
            .with_context(|| format!("Failed to evaluate recommendation {index}"))?;
        serde_json::to_string_pretty(&economics)?
    } else {
        let evaluations: Vec<Evaluation> = analyzer
            .analyze_all(
                &snapshot.analysis,
                &snapshot.portfolio,
                &snapshot.stock_info,
                requested_shares,
            )
            .into_iter()
            .enumerate()
            .map(|(index, result)| match result {
                Ok(economics) => Evaluation {
                    index,
                    economics: Some(economics),
                    error: None,
                },
                Err(e) => {
                    warn!(index, error = %e, "Recommendation skipped");
                    Evaluation {
                        index,
                        economics: None,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect();
        serde_json::to_string_pretty(&evaluations)?
    };

    // ── 5. Print ────────────────────────────────────────────
    println!("{output}");
    info!("Evaluation complete");
    Ok(())
}
