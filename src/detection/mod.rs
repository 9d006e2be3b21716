//! Detectors that compare a historical segment against a forecast segment.
//!
//! Each detector decides one failure mode:
//! - [`TrendDetector`]: forecast trend contradicts the historical trend
//! - [`SeasonalityDetector`]: historical seasonal pattern missing from the forecast
//! - [`VolatilityDetector`]: forecast implausibly smoother than history
//! - [`MagnitudeDetector`]: forecast level far from recent actual levels
//!
//! Detectors are independent and order-insensitive; none reads another's
//! output. Numeric edge cases (constant segments, zero means, too-short
//! windows) degrade to an undetected [`Issue`] with sentinel metrics rather
//! than panicking or returning `NaN`.

mod magnitude;
mod seasonality;
pub mod spectrum;
mod trend;
mod volatility;

pub use magnitude::MagnitudeDetector;
pub use seasonality::SeasonalityDetector;
pub use trend::TrendDetector;
pub use volatility::VolatilityDetector;

use crate::core::{Issue, IssueKind};

/// Trait for segment-pair issue detectors.
pub trait IssueDetector {
    /// The failure mode this detector looks for.
    fn kind(&self) -> IssueKind;

    /// Compare the two segments and report the issue, detected or not.
    fn detect(&self, historical: &[f64], forecast: &[f64]) -> Issue;
}
