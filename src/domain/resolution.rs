//! Days remaining until a market resolves.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::error::EngineError;

/// Day count used when a market has no usable end date.
pub const FALLBACK_RESOLUTION_DAYS: u32 = 30;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Time to resolution, and whether it came from the market's end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionWindow {
    pub days: u32,
    /// Parsed end date; `None` when the fallback was used.
    pub end_date: Option<DateTime<Utc>>,
}

impl ResolutionWindow {
    /// True when `days` is the fallback rather than a computed count.
    pub const fn is_fallback(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Parses a market end date.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamps
/// (read as UTC), and bare `YYYY-MM-DD` dates (UTC midnight).
///
/// # Errors
/// `UnparsableDate` if none of those forms match.
pub fn parse_end_date(raw: &str) -> Result<DateTime<Utc>, EngineError> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(EngineError::UnparsableDate(raw.to_string()))
}

/// Whole days from `now` until `end_date`, rounded up and floored at 0.
pub fn days_between(now: DateTime<Utc>, end_date: DateTime<Utc>) -> u32 {
    let millis = (end_date - now).num_milliseconds();
    // ceil division for a positive divisor
    let days = -(-millis).div_euclid(MILLIS_PER_DAY);
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Days until resolution as seen at `now`.
///
/// A missing or unparsable end date yields `fallback_days`; the parse error
/// is logged and recorded as `end_date: None`, never returned.
pub fn days_to_resolution(
    end_date: Option<&str>,
    now: DateTime<Utc>,
    fallback_days: u32,
) -> ResolutionWindow {
    let fallback = ResolutionWindow {
        days: fallback_days,
        end_date: None,
    };

    let Some(raw) = end_date else {
        return fallback;
    };

    match parse_end_date(raw) {
        Ok(end) => ResolutionWindow {
            days: days_between(now, end),
            end_date: Some(end),
        },
        Err(e) => {
            warn!(error = %e, fallback_days, "Using fallback resolution window");
            fallback
        }
    }
}
