//! Shared numeric utilities.

pub mod regression;
pub mod stats;

pub use regression::{linear_fit, LinearFit};
pub use stats::{coefficient_of_variation, mean, std_dev, variance};
