//! Volatility mismatch detection.

use crate::core::{Issue, IssueKind};
use crate::detection::IssueDetector;
use crate::utils::stats::coefficient_of_variation;
use std::collections::BTreeMap;

/// Detects a forecast that is implausibly smoother than history.
///
/// Compares the coefficient of variation of the two segments. Fires when
/// the forecast keeps less than `ratio_threshold` of the historical
/// dispersion, provided the history shows non-trivial variation in the
/// first place (`cv_floor`).
#[derive(Debug, Clone)]
pub struct VolatilityDetector {
    /// Maximum forecast/historical CV ratio still considered plausible.
    pub ratio_threshold: f64,
    /// Minimum historical CV for the comparison to be meaningful.
    pub cv_floor: f64,
}

impl Default for VolatilityDetector {
    fn default() -> Self {
        Self {
            ratio_threshold: 0.5,
            cv_floor: 0.02,
        }
    }
}

impl VolatilityDetector {
    /// Create a detector with custom parameters.
    pub fn new(ratio_threshold: f64, cv_floor: f64) -> Self {
        Self {
            ratio_threshold: ratio_threshold.clamp(0.0, 1.0),
            cv_floor: cv_floor.max(0.0),
        }
    }

    /// Set the CV ratio threshold.
    pub fn with_ratio_threshold(mut self, threshold: f64) -> Self {
        self.ratio_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the historical CV floor.
    pub fn with_cv_floor(mut self, floor: f64) -> Self {
        self.cv_floor = floor.max(0.0);
        self
    }
}

impl IssueDetector for VolatilityDetector {
    fn kind(&self) -> IssueKind {
        IssueKind::VolatilityMismatch
    }

    fn detect(&self, historical: &[f64], forecast: &[f64]) -> Issue {
        let hist_cv = coefficient_of_variation(historical);
        let fcst_cv = coefficient_of_variation(forecast);

        let detected = hist_cv > self.cv_floor && fcst_cv < self.ratio_threshold * hist_cv;

        let confidence = if detected {
            (1.0 - fcst_cv / hist_cv).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let metrics = BTreeMap::from([
            ("historical_cv".to_string(), hist_cv),
            ("forecast_cv".to_string(), fcst_cv),
        ]);

        Issue::new(IssueKind::VolatilityMismatch, detected, confidence, metrics)
    }
}
