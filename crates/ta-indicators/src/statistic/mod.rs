//! Statistic functions: deviations, linear regression, correlation and beta.

pub mod correlation;
pub mod deviation;
pub mod regression;

pub use regression::Fit;
