//! Hedge recommendation types.
//!
//! These mirror the JSON produced by the external hedge-matching pipeline.
//! Field names are camelCase on the wire; only `recommendations` feeds the
//! engine, the rest of `AnalysisResult` is carried for display.

use serde::{Deserialize, Serialize};

/// Which side of a binary contract a recommendation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionSide {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
        }
    }
}

/// Pipeline confidence in a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

/// A prediction-market position suggested as a hedge for equity holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HedgeRecommendation {
    /// Market question.
    pub market: String,
    /// Link to the market page.
    pub market_url: String,
    /// Outcome the probability refers to.
    pub outcome: String,
    /// Market-implied probability of `outcome`, expected in [0, 1].
    pub probability: f64,
    /// Side of the contract to hold.
    pub position: PositionSide,
    pub reasoning: String,
    pub hedges_against: String,
    /// Advisory dollar sizing; seeds the default share count.
    pub suggested_allocation: f64,
    /// Tickers this hedge is believed to offset, in pipeline order.
    pub affected_stocks: Vec<String>,
    pub confidence: Confidence,
    /// ISO-8601 resolution date, if the market publishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Token accounting reported by the analysis pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionStats {
    pub original_tokens: u64,
    pub compressed_tokens: u64,
    pub savings: f64,
}

/// Output of the hedge analysis pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub recommendations: Vec<HedgeRecommendation>,
    #[serde(default)]
    pub stocks_without_hedges: Vec<String>,
    #[serde(default)]
    pub compression: CompressionStats,
}
