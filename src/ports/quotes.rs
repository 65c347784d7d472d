//! Stock Quotes Port - Ticker Lookup Interface
//!
//! Read-only view of the quotes fetched by the external price service.
//! The lookup may be partially populated; a missing ticker is unknown and
//! contributes nothing to portfolio value or exposure.

use std::collections::{BTreeMap, HashMap};

use crate::domain::portfolio::StockInfo;

/// Quote lookup keyed by ticker.
///
/// Implementations must be a consistent snapshot for the duration of one
/// computation: `known_tickers` counts exactly the tickers `quote` resolves.
pub trait StockQuotes {
  /// Quote for `ticker`, if the price service has one.
  fn quote(&self, ticker: &str) -> Option<&StockInfo>;

  /// Number of distinct tickers with a known quote.
  fn known_tickers(&self) -> usize;
}

impl StockQuotes for HashMap<String, StockInfo> {
  fn quote(&self, ticker: &str) -> Option<&StockInfo> {
    self.get(ticker)
  }

  fn known_tickers(&self) -> usize {
    self.len()
  }
}

impl StockQuotes for BTreeMap<String, StockInfo> {
  fn quote(&self, ticker: &str) -> Option<&StockInfo> {
    self.get(ticker)
  }

  fn known_tickers(&self) -> usize {
    self.len()
  }
}
