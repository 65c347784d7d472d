//! Configuration Module - TOML-based Engine Configuration
//!
//! Loads and validates configuration from `config.toml`. Every field has
//! a default, so an empty file yields the standard engine behaviour.

pub mod loader;

use serde::Deserialize;

use crate::domain::pricing::FALLBACK_SHARES;
use crate::domain::resolution::FALLBACK_RESOLUTION_DAYS;
use crate::domain::scenario::CURRENT_BAND;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Host identity and logging.
  #[serde(default)]
  pub app: AppInfo,
  /// Position engine parameters.
  #[serde(default)]
  pub engine: EngineConfig,
}

/// Host identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
  /// Human-readable host name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for AppInfo {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
    }
  }
}

/// Position engine parameters.
///
/// Defaults reproduce the figures the TradeOff position analyzer displays.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
  /// Portfolio value assumed when no holding has a known price (USD).
  #[serde(default = "default_portfolio_value")]
  pub default_portfolio_value: f64,
  /// Share count used when the entry price is zero.
  #[serde(default = "default_fallback_shares")]
  pub fallback_shares: u64,
  /// Days to resolution when a market has no usable end date.
  #[serde(default = "default_fallback_days")]
  pub fallback_resolution_days: u32,
  /// Probability distance for flagging the current scenario.
  #[serde(default = "default_current_band")]
  pub current_band: f64,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      default_portfolio_value: default_portfolio_value(),
      fallback_shares: default_fallback_shares(),
      fallback_resolution_days: default_fallback_days(),
      current_band: default_current_band(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "tradeoff-engine".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_portfolio_value() -> f64 {
  50_000.0
}

fn default_fallback_shares() -> u64 {
  FALLBACK_SHARES
}

fn default_fallback_days() -> u32 {
  FALLBACK_RESOLUTION_DAYS
}

fn default_current_band() -> f64 {
  CURRENT_BAND
}
