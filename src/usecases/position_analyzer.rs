//! Position Analyzer - Economics of a Selected Hedge
//!
//! Runs the domain pipeline for one recommendation:
//! - Entry price from probability and side (rejects invalid probabilities)
//! - Share count (caller's, or derived from the suggested allocation)
//! - Payoff bounds, breakeven, and return on win
//! - Exposure estimate against the portfolio
//! - Days to resolution
//! - Scenario table over the fixed probability grid
//!
//! Every call builds a fresh `PositionEconomics`; nothing is cached, so
//! hosts recompute on every selection or share-count change.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::EngineConfig;
use crate::domain::error::EngineError;
use crate::domain::exposure::estimate_exposure;
use crate::domain::market::{AnalysisResult, HedgeRecommendation, PositionSide};
use crate::domain::portfolio::{PortfolioItem, portfolio_value};
use crate::domain::position::resolve_position;
use crate::domain::pricing::{checked_probability, default_share_count, resolve_entry_price, resolve_shares};
use crate::domain::resolution::days_to_resolution;
use crate::domain::scenario::{Scenario, generate_scenarios};
use crate::ports::clock::Clock;
use crate::ports::quotes::StockQuotes;

/// Full economics of one hedge position, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEconomics {
  /// Market question of the evaluated recommendation.
  pub market: String,
  pub position: PositionSide,
  pub entry_price: Decimal,
  /// Entry price rounded to whole cents.
  pub entry_price_cents: u32,
  /// Live market probability rounded to a whole percentage.
  pub current_probability_percent: u32,
  pub shares: u64,
  pub cost: Decimal,
  pub max_profit: Decimal,
  pub max_loss: Decimal,
  pub breakeven_percent: Decimal,
  /// `None` for a zero-cost position, where the ratio is undefined.
  pub return_on_win_percent: Option<Decimal>,
  pub days_to_resolution: u32,
  pub resolution_date: Option<DateTime<Utc>>,
  /// The resolution window is the configured fallback, not a date.
  pub resolution_fallback: bool,
  pub exposure_value: Decimal,
  pub hedge_cost_percent: Decimal,
  pub potential_offset_percent: Decimal,
  /// Affected tickers joined for display, e.g. "NVDA, TSLA".
  pub affected_stocks_label: String,
  pub scenarios: Vec<Scenario>,
}

impl PositionEconomics {
  /// Return on win, reading an undefined ratio as 0.
  pub fn return_on_win_or_zero(&self) -> Decimal {
    self.return_on_win_percent.unwrap_or(Decimal::ZERO)
  }

  /// Scenario flagged as the current market state, if any.
  pub fn current_scenario(&self) -> Option<&Scenario> {
    self.scenarios.iter().find(|s| s.is_current)
  }
}

/// Computes position economics for hedge recommendations.
pub struct PositionAnalyzer<C: Clock> {
  /// Time source for the resolution timer.
  clock: C,
  /// Engine parameters.
  config: EngineConfig,
}

impl<C: Clock> PositionAnalyzer<C> {
  /// Create an analyzer with the given clock and parameters.
  pub fn new(clock: C, config: &EngineConfig) -> Self {
    Self {
      clock,
      config: config.clone(),
    }
  }

  /// Portfolio value at known prices, or the configured default when
  /// nothing in the portfolio can be priced.
  pub fn portfolio_value<Q>(&self, portfolio: &[PortfolioItem], quotes: &Q) -> Decimal
  where
    Q: StockQuotes + ?Sized,
  {
    portfolio_value(portfolio, quotes).unwrap_or_else(|| {
      debug!(
        holdings = portfolio.len(),
        default = self.config.default_portfolio_value,
        "No priced holdings, using default portfolio value"
      );
      Decimal::from_f64(self.config.default_portfolio_value).unwrap_or(Decimal::ZERO)
    })
  }

  /// Share count to pre-fill when `rec` becomes the selected hedge.
  ///
  /// # Errors
  /// `InvalidProbability` if the recommendation cannot be priced.
  pub fn default_shares(&self, rec: &HedgeRecommendation) -> Result<u64, EngineError> {
    let entry_price = resolve_entry_price(rec)?;
    Ok(default_share_count(
      rec.suggested_allocation,
      entry_price,
      self.config.fallback_shares,
    ))
  }

  /// Computes the economics of holding `rec`.
  ///
  /// `requested_shares` of `None` or 0 uses the default share count.
  ///
  /// # Errors
  /// `InvalidProbability` if the recommendation's probability is not a
  /// finite number in [0, 1]. No partial result is produced.
  #[instrument(skip_all, fields(market = %rec.market, position = %rec.position))]
  pub fn evaluate<Q>(
    &self,
    rec: &HedgeRecommendation,
    requested_shares: Option<u64>,
    quotes: &Q,
    portfolio_value: Decimal,
  ) -> Result<PositionEconomics, EngineError>
  where
    Q: StockQuotes + ?Sized,
  {
    let probability = checked_probability(rec.probability).inspect_err(|e| {
      warn!(error = %e, "Rejecting recommendation");
    })?;
    let entry_price = resolve_entry_price(rec)?;

    let shares = resolve_shares(
      requested_shares,
      rec.suggested_allocation,
      entry_price,
      self.config.fallback_shares,
    );
    let metrics = resolve_position(entry_price, shares);

    let exposure = estimate_exposure(
      rec,
      quotes,
      portfolio_value,
      metrics.cost,
      metrics.max_profit,
    );

    let window = days_to_resolution(
      rec.end_date.as_deref(),
      self.clock.now(),
      self.config.fallback_resolution_days,
    );

    let scenarios = generate_scenarios(
      rec.position,
      entry_price,
      shares,
      rec.probability,
      self.config.current_band,
    );

    debug!(
      shares,
      %entry_price,
      cost = %metrics.cost,
      exposure = %exposure.exposure_value,
      days = window.days,
      "Position evaluated"
    );

    Ok(PositionEconomics {
      market: rec.market.clone(),
      position: rec.position,
      entry_price,
      entry_price_cents: whole_percent(entry_price),
      current_probability_percent: whole_percent(probability),
      shares,
      cost: metrics.cost,
      max_profit: metrics.max_profit,
      max_loss: metrics.max_loss,
      breakeven_percent: metrics.breakeven_percent,
      return_on_win_percent: metrics.return_on_win_percent,
      days_to_resolution: window.days,
      resolution_date: window.end_date,
      resolution_fallback: window.is_fallback(),
      exposure_value: exposure.exposure_value,
      hedge_cost_percent: exposure.hedge_cost_percent,
      potential_offset_percent: exposure.potential_offset_percent,
      affected_stocks_label: rec.affected_stocks.join(", "),
      scenarios,
    })
  }

  /// Economics of the recommendation at `index` in `analysis`.
  ///
  /// # Errors
  /// `NoRecommendations` for an empty analysis, `RecommendationNotFound`
  /// for an out-of-range index, or any error from `evaluate`.
  pub fn analyze<Q>(
    &self,
    analysis: &AnalysisResult,
    portfolio: &[PortfolioItem],
    quotes: &Q,
    index: usize,
    requested_shares: Option<u64>,
  ) -> Result<PositionEconomics, EngineError>
  where
    Q: StockQuotes + ?Sized,
  {
    let rec = select(analysis, index)?;
    let value = self.portfolio_value(portfolio, quotes);
    self.evaluate(rec, requested_shares, quotes, value)
  }

  /// Economics of every recommendation, in order.
  ///
  /// Each entry succeeds or fails on its own; one invalid recommendation
  /// does not prevent the others from being evaluated.
  pub fn analyze_all<Q>(
    &self,
    analysis: &AnalysisResult,
    portfolio: &[PortfolioItem],
    quotes: &Q,
    requested_shares: Option<u64>,
  ) -> Vec<Result<PositionEconomics, EngineError>>
  where
    Q: StockQuotes + ?Sized,
  {
    let value = self.portfolio_value(portfolio, quotes);
    analysis
      .recommendations
      .iter()
      .map(|rec| self.evaluate(rec, requested_shares, quotes, value))
      .collect()
  }
}

/// Recommendation at `index`, distinguishing an empty analysis from a bad
/// index.
///
/// # Errors
/// `NoRecommendations` or `RecommendationNotFound`.
pub fn select(analysis: &AnalysisResult, index: usize) -> Result<&HedgeRecommendation, EngineError> {
  let available = analysis.recommendations.len();
  if available == 0 {
    return Err(EngineError::NoRecommendations);
  }
  analysis
    .recommendations
    .get(index)
    .ok_or(EngineError::RecommendationNotFound { index, available })
}

/// Rounds a [0, 1] fraction to a whole percentage, half away from zero.
fn whole_percent(fraction: Decimal) -> u32 {
  (fraction * Decimal::ONE_HUNDRED)
    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    .to_u32()
    .unwrap_or(0)
}
