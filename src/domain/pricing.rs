//! Entry pricing and share sizing for binary-outcome positions.
//!
//! A binary contract pays 1 per share if its side wins, so the price of
//! the YES side equals the market probability and the NO side pays the
//! complement. Share counts default to the recommendation's suggested
//! dollar allocation divided by that price.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use tracing::debug;

use super::error::EngineError;
use super::market::{HedgeRecommendation, PositionSide};

/// Share count used when no price is available to size from.
pub const FALLBACK_SHARES: u64 = 100;

/// Validates a probability and converts it to `Decimal`.
///
/// # Errors
/// `InvalidProbability` if `probability` is NaN, infinite, or outside [0, 1].
pub fn checked_probability(probability: f64) -> Result<Decimal, EngineError> {
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(EngineError::InvalidProbability(probability));
    }
    Decimal::from_f64(probability).ok_or(EngineError::InvalidProbability(probability))
}

/// Price of one share on `side` when the market says `probability`.
///
/// # Errors
/// `InvalidProbability` if `probability` is not a finite number in [0, 1].
pub fn side_price(side: PositionSide, probability: f64) -> Result<Decimal, EngineError> {
    let p = checked_probability(probability)?;
    Ok(match side {
        PositionSide::Yes => p,
        PositionSide::No => Decimal::ONE - p,
    })
}

/// Per-share entry price of a recommendation, in [0, 1].
///
/// # Errors
/// `InvalidProbability` if the recommendation's probability is invalid.
/// Nothing downstream may be computed in that case.
pub fn resolve_entry_price(rec: &HedgeRecommendation) -> Result<Decimal, EngineError> {
    side_price(rec.position, rec.probability)
}

/// Default share count for a recommendation: the suggested allocation
/// divided by the entry price, rounded half away from zero.
///
/// Falls back to `fallback` shares when the entry price is zero. A count
/// too large for `u64` saturates at `u64::MAX`. Hosts must call this
/// whenever the selected recommendation changes.
pub fn default_share_count(
    suggested_allocation: f64,
    entry_price: Decimal,
    fallback: u64,
) -> u64 {
    if entry_price <= Decimal::ZERO {
        return fallback;
    }

    if suggested_allocation.is_nan() || suggested_allocation <= 0.0 {
        return 0;
    }
    let allocation = Decimal::from_f64(suggested_allocation).unwrap_or(Decimal::MAX);

    allocation
        .checked_div(entry_price)
        .and_then(|count| {
            count
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u64()
        })
        .unwrap_or_else(|| {
            debug!(suggested_allocation, %entry_price, "Default share count saturated");
            u64::MAX
        })
}

/// Shares to evaluate: the caller's count if positive, otherwise the
/// default derived from the recommendation.
pub fn resolve_shares(
    requested: Option<u64>,
    suggested_allocation: f64,
    entry_price: Decimal,
    fallback: u64,
) -> u64 {
    match requested {
        Some(shares) if shares > 0 => shares,
        _ => {
            let shares = default_share_count(suggested_allocation, entry_price, fallback);
            debug!(
                requested = ?requested,
                default = shares,
                "Substituting default share count"
            );
            shares
        }
    }
}

/// Parses a free-text share count.
///
/// Only positive whole numbers are accepted, written in plain decimal
/// notation ("250", "250.0"). Exponent forms such as "1e3", blank,
/// non-numeric, zero, negative, and fractional input yield `None`, which
/// `resolve_shares` replaces with the default.
pub fn parse_share_input(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if let Ok(shares) = trimmed.parse::<u64>() {
        return (shares > 0).then_some(shares);
    }

    // "250.0" is still a whole number.
    if !trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    (value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then(|| value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_yes_price_is_probability() {
        assert_eq!(side_price(PositionSide::Yes, 0.65).unwrap(), dec!(0.65));
    }

    #[test]
    fn test_no_price_is_complement() {
        assert_eq!(side_price(PositionSide::No, 0.30).unwrap(), dec!(0.70));
    }

    #[test]
    fn test_boundary_probabilities_accepted() {
        assert_eq!(side_price(PositionSide::Yes, 0.0).unwrap(), Decimal::ZERO);
        assert_eq!(side_price(PositionSide::No, 0.0).unwrap(), Decimal::ONE);
        assert_eq!(side_price(PositionSide::Yes, 1.0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        for p in [-0.01, 1.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = side_price(PositionSide::Yes, p).unwrap_err();
            assert!(matches!(err, EngineError::InvalidProbability(_)), "{p} accepted");
        }
    }

    #[test]
    fn test_default_shares_from_allocation() {
        assert_eq!(default_share_count(500.0, dec!(0.65), FALLBACK_SHARES), 769);
    }

    #[test]
    fn test_default_shares_round_half_up() {
        // 50 / 0.4 = 125, 0.5 / 0.4 = 1.25, 1 / 0.4 = 2.5 -> 3
        assert_eq!(default_share_count(50.0, dec!(0.4), FALLBACK_SHARES), 125);
        assert_eq!(default_share_count(1.0, dec!(0.4), FALLBACK_SHARES), 3);
    }

    #[test]
    fn test_default_shares_zero_price_falls_back() {
        assert_eq!(default_share_count(500.0, Decimal::ZERO, FALLBACK_SHARES), 100);
    }

    #[test]
    fn test_resolve_shares_prefers_positive_request() {
        assert_eq!(resolve_shares(Some(42), 500.0, dec!(0.65), FALLBACK_SHARES), 42);
        assert_eq!(resolve_shares(Some(0), 500.0, dec!(0.65), FALLBACK_SHARES), 769);
        assert_eq!(resolve_shares(None, 500.0, dec!(0.65), FALLBACK_SHARES), 769);
    }

    #[test]
    fn test_parse_share_input() {
        assert_eq!(parse_share_input("250"), Some(250));
        assert_eq!(parse_share_input(" 250 "), Some(250));
        assert_eq!(parse_share_input("250.0"), Some(250));
        assert_eq!(parse_share_input(""), None);
        assert_eq!(parse_share_input("abc"), None);
        assert_eq!(parse_share_input("0"), None);
        assert_eq!(parse_share_input("-5"), None);
        assert_eq!(parse_share_input("12.5"), None);
    }

    #[test]
    fn test_parse_share_input_rejects_exponent_forms() {
        assert_eq!(parse_share_input("1e3"), None);
        assert_eq!(parse_share_input("2.5E2"), None);
        assert_eq!(parse_share_input("inf"), None);
        assert_eq!(parse_share_input("+250"), Some(250));
    }

    #[test]
    fn test_default_shares_tiny_price_saturates() {
        // 500 / 1e-27 does not fit in a Decimal
        let entry = side_price(PositionSide::Yes, 1e-27).unwrap();
        assert!(entry > Decimal::ZERO);
        assert_eq!(default_share_count(500.0, entry, FALLBACK_SHARES), u64::MAX);
    }

    #[test]
    fn test_default_shares_beyond_u64_saturates() {
        // 500 / 1e-17 = 5e19, past u64::MAX but within Decimal range
        let entry = side_price(PositionSide::Yes, 1e-17).unwrap();
        assert_eq!(default_share_count(500.0, entry, FALLBACK_SHARES), u64::MAX);
        assert_ne!(default_share_count(500.0, entry, FALLBACK_SHARES), FALLBACK_SHARES);
    }

    #[test]
    fn test_default_shares_non_positive_allocation_is_zero() {
        assert_eq!(default_share_count(0.0, dec!(0.5), FALLBACK_SHARES), 0);
        assert_eq!(default_share_count(-20.0, dec!(0.5), FALLBACK_SHARES), 0);
        assert_eq!(default_share_count(f64::NAN, dec!(0.5), FALLBACK_SHARES), 0);
    }
}
