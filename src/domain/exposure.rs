//! Equity exposure a hedge protects.
//!
//! Per-stock dollar exposure is not known here, so the portfolio value is
//! split equally across every ticker with a known quote and one share of
//! that split is credited per affected stock. This is an approximation of
//! the displayed figures and must stay equal-weighted: weighting by actual
//! holdings changes every percentage shown to the user.

use rust_decimal::Decimal;
use serde::Serialize;

use super::market::HedgeRecommendation;
use crate::ports::quotes::StockQuotes;

/// Hedge cost and payoff relative to the exposure it protects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureEstimate {
    /// Estimated dollar value of the affected holdings.
    pub exposure_value: Decimal,
    /// Position cost as a percentage of `exposure_value`.
    pub hedge_cost_percent: Decimal,
    /// Maximum profit as a percentage of `exposure_value`.
    pub potential_offset_percent: Decimal,
}

/// Estimates the exposure behind `rec` and prices the hedge against it.
///
/// Affected stocks are counted in list order, so a ticker listed twice is
/// credited twice. All figures are zero when no quotes are known, and a
/// percentage too large to represent saturates at `Decimal::MAX`.
pub fn estimate_exposure<Q>(
    rec: &HedgeRecommendation,
    quotes: &Q,
    portfolio_value: Decimal,
    cost: Decimal,
    max_profit: Decimal,
) -> ExposureEstimate
where
    Q: StockQuotes + ?Sized,
{
    let known_tickers = quotes.known_tickers();
    let exposure_value = if known_tickers == 0 {
        Decimal::ZERO
    } else {
        let per_stock = portfolio_value / Decimal::from(known_tickers);
        let covered = rec
            .affected_stocks
            .iter()
            .filter(|ticker| quotes.quote(ticker).is_some())
            .count();
        per_stock.saturating_mul(Decimal::from(covered))
    };

    ExposureEstimate {
        exposure_value,
        hedge_cost_percent: percent_of(cost, exposure_value),
        potential_offset_percent: percent_of(max_profit, exposure_value),
    }
}

fn percent_of(amount: Decimal, base: Decimal) -> Decimal {
    if base > Decimal::ZERO {
        amount
            .checked_div(base)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::market::{Confidence, PositionSide};
    use crate::domain::portfolio::StockInfo;

    fn quotes(tickers: &[&str]) -> HashMap<String, StockInfo> {
        tickers
            .iter()
            .map(|t| {
                (
                    (*t).to_string(),
                    StockInfo {
                        ticker: (*t).to_string(),
                        name: String::new(),
                        sector: String::new(),
                        industry: String::new(),
                        price: 100.0,
                    },
                )
            })
            .collect()
    }

    fn rec(affected: &[&str]) -> HedgeRecommendation {
        HedgeRecommendation {
            market: "Recession in 2026?".to_string(),
            market_url: String::new(),
            outcome: "Yes".to_string(),
            probability: 0.4,
            position: PositionSide::Yes,
            reasoning: String::new(),
            hedges_against: String::new(),
            suggested_allocation: 200.0,
            affected_stocks: affected.iter().map(|t| (*t).to_string()).collect(),
            confidence: Confidence::Medium,
            end_date: None,
        }
    }

    #[test]
    fn test_equal_split_per_affected_stock() {
        let q = quotes(&["NVDA", "AAPL", "MSFT", "TSLA"]);
        let est = estimate_exposure(&rec(&["NVDA", "TSLA"]), &q, dec!(50000), dec!(200), dec!(300));
        assert_eq!(est.exposure_value, dec!(25000));
        assert_eq!(est.hedge_cost_percent, dec!(0.8));
        assert_eq!(est.potential_offset_percent, dec!(1.2));
    }

    #[test]
    fn test_duplicate_affected_ticker_credited_twice() {
        let q = quotes(&["NVDA", "AAPL", "MSFT", "TSLA"]);
        let est = estimate_exposure(&rec(&["NVDA", "NVDA"]), &q, dec!(50000), dec!(200), dec!(300));
        assert_eq!(est.exposure_value, dec!(25000));
        assert_eq!(est.hedge_cost_percent, dec!(0.8));
    }

    #[test]
    fn test_tiny_exposure_saturates_percentages() {
        let q = quotes(&["NVDA"]);
        let tiny = dec!(0.0000000000000000000000000001);
        let est = estimate_exposure(&rec(&["NVDA"]), &q, tiny, dec!(1000), dec!(1000));
        assert_eq!(est.exposure_value, tiny);
        assert_eq!(est.hedge_cost_percent, Decimal::MAX);
        assert_eq!(est.potential_offset_percent, Decimal::MAX);
    }

    #[test]
    fn test_unknown_affected_stock_contributes_nothing() {
        let q = quotes(&["NVDA", "AAPL"]);
        let est = estimate_exposure(&rec(&["NVDA", "GME"]), &q, dec!(10000), dec!(100), dec!(100));
        assert_eq!(est.exposure_value, dec!(5000));
        assert_eq!(est.hedge_cost_percent, dec!(2));
    }

    #[test]
    fn test_no_known_quotes_yields_zero() {
        let q = quotes(&[]);
        let est = estimate_exposure(&rec(&["NVDA"]), &q, dec!(50000), dec!(100), dec!(100));
        assert_eq!(est.exposure_value, Decimal::ZERO);
        assert_eq!(est.hedge_cost_percent, Decimal::ZERO);
        assert_eq!(est.potential_offset_percent, Decimal::ZERO);
    }

    #[test]
    fn test_no_affected_stock_quoted_yields_zero_percentages() {
        let q = quotes(&["AAPL"]);
        let est = estimate_exposure(&rec(&["GME"]), &q, dec!(50000), dec!(100), dec!(100));
        assert_eq!(est.exposure_value, Decimal::ZERO);
        assert_eq!(est.potential_offset_percent, Decimal::ZERO);
    }
}
