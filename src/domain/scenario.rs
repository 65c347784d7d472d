//! Payoff across a fixed grid of market probabilities.
//!
//! Each scenario marks the position to market at a hypothetical YES
//! probability, as if sold before resolution at that price. The grid is a
//! constant, never derived from the inputs, so charts and tables line up
//! across recomputes.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::market::PositionSide;

/// One point of the probability grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPoint {
    pub label: &'static str,
    pub probability: Decimal,
}

/// Hypothetical YES probabilities, ascending.
pub const SCENARIO_GRID: [GridPoint; 7] = [
    GridPoint { label: "10%", probability: dec!(0.10) },
    GridPoint { label: "25%", probability: dec!(0.25) },
    GridPoint { label: "40%", probability: dec!(0.40) },
    GridPoint { label: "50%", probability: dec!(0.50) },
    GridPoint { label: "60%", probability: dec!(0.60) },
    GridPoint { label: "75%", probability: dec!(0.75) },
    GridPoint { label: "90%", probability: dec!(0.90) },
];

/// Distance from the live probability within which a grid point is
/// flagged as the current market state.
pub const CURRENT_BAND: f64 = 0.05;

/// Profit or loss of the position at one grid probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub label: &'static str,
    pub probability: Decimal,
    /// Price of the held side at this probability.
    pub exit_price: Decimal,
    pub pnl: Decimal,
    /// Grid point lies within the current band of the live probability.
    pub is_current: bool,
    /// `|pnl|` relative to the largest `|pnl|` in the table, 0-100.
    pub bar_width_percent: Decimal,
}

/// Marks a position to market across `SCENARIO_GRID`.
///
/// `market_probability` is only used for the current-state flag, which is
/// compared in `f64` the way the float-based display computes it.
pub fn generate_scenarios(
    side: PositionSide,
    entry_price: Decimal,
    shares: u64,
    market_probability: f64,
    current_band: f64,
) -> Vec<Scenario> {
    let size = Decimal::from(shares);

    let mut scenarios: Vec<Scenario> = SCENARIO_GRID
        .iter()
        .map(|point| {
            let exit_price = match side {
                PositionSide::Yes => point.probability,
                PositionSide::No => Decimal::ONE - point.probability,
            };
            let grid_p = point.probability.to_f64().unwrap_or(f64::NAN);
            Scenario {
                label: point.label,
                probability: point.probability,
                exit_price,
                pnl: size * (exit_price - entry_price),
                is_current: (grid_p - market_probability).abs() < current_band,
                bar_width_percent: Decimal::ZERO,
            }
        })
        .collect();

    let max_abs = scenarios
        .iter()
        .map(|s| s.pnl.abs())
        .max()
        .unwrap_or(Decimal::ZERO);

    if max_abs > Decimal::ZERO {
        for s in &mut scenarios {
            s.bar_width_percent = s.pnl.abs() / max_abs * Decimal::ONE_HUNDRED;
        }
    }

    scenarios
}
