//! TradeOff Position Engine - Library Root
//!
//! Payoff and scenario math for prediction-market positions held as
//! hedges against an equity portfolio. Re-exports all modules for the
//! host binary, integration tests, and benchmarks.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
