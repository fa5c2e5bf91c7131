//! Volume indicators.
//!
//! This module contains volume-based indicators:
//! - OBV (On Balance Volume)
//! - Chaikin A/D line and oscillator
//! - MFI (Money Flow Index)

pub mod ad;
pub mod mfi;
pub mod obv;
