//! Domain layer - Position payoff and scenario math.
//!
//! Pure, synchronous functions over explicit inputs. Nothing here performs
//! I/O or holds state between calls, so every figure can be recomputed on
//! any input change.

pub mod error;
pub mod exposure;
pub mod market;
pub mod portfolio;
pub mod position;
pub mod pricing;
pub mod resolution;
pub mod scenario;

// Re-export core types for convenience
pub use error::EngineError;
pub use exposure::{ExposureEstimate, estimate_exposure};
pub use market::{AnalysisResult, CompressionStats, Confidence, HedgeRecommendation, PositionSide};
pub use portfolio::{PortfolioItem, StockInfo, portfolio_value};
pub use position::{PositionMetrics, resolve_position};
pub use pricing::{default_share_count, parse_share_input, resolve_entry_price, resolve_shares};
pub use resolution::{ResolutionWindow, days_to_resolution};
pub use scenario::{SCENARIO_GRID, Scenario, generate_scenarios};
