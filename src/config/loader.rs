//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid configuration in {}", path.display()))?;

  info!(
    name = %config.app.name,
    portfolio_default = config.engine.default_portfolio_value,
    fallback_days = config.engine.fallback_resolution_days,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// Returns an error if parsing fails or validation rules are violated.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content)
    .context("Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A positive, finite default portfolio value
/// - A positive fallback share count
/// - A current-scenario band inside (0, 1)
fn validate_config(config: &AppConfig) -> Result<()> {
  let engine = &config.engine;

  anyhow::ensure!(
    engine.default_portfolio_value.is_finite() && engine.default_portfolio_value > 0.0,
    "default_portfolio_value must be positive, got {}",
    engine.default_portfolio_value
  );
  anyhow::ensure!(
    engine.fallback_shares > 0,
    "fallback_shares must be positive"
  );
  anyhow::ensure!(
    engine.current_band > 0.0 && engine.current_band < 1.0,
    "current_band must be in (0, 1), got {}",
    engine.current_band
  );
  anyhow::ensure!(
    !config.app.log_level.is_empty(),
    "log_level must not be empty"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::EngineConfig;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_empty_config_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.engine, EngineConfig::default());
    assert!((config.engine.default_portfolio_value - 50_000.0).abs() < f64::EPSILON);
    assert_eq!(config.engine.fallback_shares, 100);
    assert_eq!(config.engine.fallback_resolution_days, 30);
    assert_eq!(config.app.log_level, "info");
  }

  #[test]
  fn test_partial_engine_section() {
    let config = parse_config(
      r#"
      [app]
      name = "desk"
      log_level = "debug"

      [engine]
      default_portfolio_value = 120000.0
      "#,
    )
    .unwrap();
    assert_eq!(config.app.name, "desk");
    assert!((config.engine.default_portfolio_value - 120_000.0).abs() < f64::EPSILON);
    assert_eq!(config.engine.fallback_resolution_days, 30);
  }

  #[test]
  fn test_rejects_invalid_values() {
    assert!(parse_config("[engine]\ndefault_portfolio_value = 0.0").is_err());
    assert!(parse_config("[engine]\nfallback_shares = 0").is_err());
    assert!(parse_config("[engine]\ncurrent_band = 1.5").is_err());
  }
}
