//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `PositionAnalyzer`: Economics, exposure, and scenarios of a selected hedge

pub mod position_analyzer;

pub use position_analyzer::{PositionAnalyzer, PositionEconomics, select};
