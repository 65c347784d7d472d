//! Payoff bounds of a binary-outcome position.
//!
//! The whole stake is at risk: the position either resolves to 1 per share
//! (profit `1 - entry` per share) or to 0 (loss of `entry` per share).
//! There is no partial-loss path in this model.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::EngineError;

/// Cost and payoff bounds for `shares` bought at `entry_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMetrics {
    pub entry_price: Decimal,
    pub shares: u64,
    pub cost: Decimal,
    pub max_profit: Decimal,
    pub max_loss: Decimal,
    /// Market probability (as a percentage) above which selling before
    /// resolution is profitable, taking price as probability.
    pub breakeven_percent: Decimal,
    /// `None` when the position costs nothing. Saturates at `Decimal::MAX`
    /// when the ratio is too large to represent.
    pub return_on_win_percent: Option<Decimal>,
}

impl PositionMetrics {
    /// Return on a winning position as a percentage of cost.
    ///
    /// # Errors
    /// `DivisionUndefined` if the position cost is zero.
    pub fn return_on_win(&self) -> Result<Decimal, EngineError> {
        self.return_on_win_percent.ok_or(EngineError::DivisionUndefined)
    }
}

/// Computes the payoff bounds of a position.
///
/// `entry_price` must already be validated into [0, 1].
pub fn resolve_position(entry_price: Decimal, shares: u64) -> PositionMetrics {
    let size = Decimal::from(shares);
    let cost = size * entry_price;
    let max_profit = size * (Decimal::ONE - entry_price);

    let return_on_win_percent = if cost.is_zero() {
        debug!(shares, %entry_price, "Return on win undefined for zero-cost position");
        None
    } else {
        let percent = max_profit
            .checked_div(cost)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| {
                warn!(shares, %entry_price, "Return on win overflowed, saturating");
                Decimal::MAX
            });
        Some(percent)
    };

    PositionMetrics {
        entry_price,
        shares,
        cost,
        max_profit,
        max_loss: cost,
        breakeven_percent: entry_price * Decimal::ONE_HUNDRED,
        return_on_win_percent,
    }
}
