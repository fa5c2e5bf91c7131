//! Momentum indicators.
//!
//! This module contains momentum indicators:
//! - RSI and CMO
//! - Stochastic (slow and fast) and Stochastic RSI
//! - Williams %R
//! - MOM and the ROC family
//! - CCI, BOP, IMI and the Ultimate Oscillator

pub mod bop;
pub mod cci;
pub mod roc;
pub mod rsi;
pub mod stoch_rsi;
pub mod stochastic;
pub mod ultosc;
pub mod williams_r;

pub use stochastic::StochOutput;
