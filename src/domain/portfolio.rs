//! Portfolio holdings and stock quotes.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ports::quotes::StockQuotes;

/// A holding entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub ticker: String,
    pub shares: f64,
}

/// Quote and classification for a ticker, supplied by the price service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub price: f64,
}

/// Market value of the portfolio at known prices.
///
/// Holdings without a quote contribute nothing. The total saturates rather
/// than overflowing. Returns `None` when the total is zero so the caller
/// can substitute its configured default.
pub fn portfolio_value<Q>(portfolio: &[PortfolioItem], quotes: &Q) -> Option<Decimal>
where
    Q: StockQuotes + ?Sized,
{
    let total = portfolio
        .iter()
        .filter_map(|item| {
            let info = quotes.quote(&item.ticker)?;
            let price = Decimal::from_f64(info.price)?;
            let shares = Decimal::from_f64(item.shares)?;
            Some(price.saturating_mul(shares))
        })
        .fold(Decimal::ZERO, Decimal::saturating_add);

    (!total.is_zero()).then_some(total)
}
