//! Trend direction mismatch detection.

use crate::core::{Issue, IssueKind};
use crate::detection::IssueDetector;
use crate::utils::regression::linear_fit;
use std::collections::BTreeMap;

/// Detects a forecast whose trend direction contradicts history.
///
/// Fits a least-squares line to each segment independently and fires when
/// the slopes point in opposite directions and both are non-negligible
/// relative to the series' level. Confidence is the geometric mean of the
/// two fits' R² values: a badly-fit "trend" is weak evidence of a mismatch.
#[derive(Debug, Clone)]
pub struct TrendDetector {
    /// Minimum |slope| / mean(|value|) for a slope to count as a trend.
    pub slope_epsilon: f64,
}

impl Default for TrendDetector {
    fn default() -> Self {
        Self {
            slope_epsilon: 0.01,
        }
    }
}

impl TrendDetector {
    /// Create a detector with a custom negligibility threshold.
    pub fn new(slope_epsilon: f64) -> Self {
        Self {
            slope_epsilon: slope_epsilon.max(0.0),
        }
    }

    /// Set the slope negligibility threshold.
    pub fn with_slope_epsilon(mut self, epsilon: f64) -> Self {
        self.slope_epsilon = epsilon.max(0.0);
        self
    }
}

impl IssueDetector for TrendDetector {
    fn kind(&self) -> IssueKind {
        IssueKind::TrendMismatch
    }

    fn detect(&self, historical: &[f64], forecast: &[f64]) -> Issue {
        let (Some(hist_fit), Some(fcst_fit)) = (linear_fit(historical), linear_fit(forecast))
        else {
            // Regression undefined on a segment: report the degenerate case
            // instead of failing the diagnosis.
            let metrics = BTreeMap::from([
                ("historical_slope".to_string(), 0.0),
                ("forecast_slope".to_string(), 0.0),
                ("historical_r2".to_string(), 0.0),
                ("forecast_r2".to_string(), 0.0),
                ("degenerate_fit".to_string(), 1.0),
            ]);
            return Issue::degenerate(IssueKind::TrendMismatch, metrics);
        };

        // One level scale for both slopes, pooled over the whole series.
        let abs_sum: f64 = historical
            .iter()
            .chain(forecast.iter())
            .map(|v| v.abs())
            .sum();
        let scale = abs_sum / (historical.len() + forecast.len()) as f64;

        let meaningful = |slope: f64| scale > 1e-10 && slope.abs() / scale > self.slope_epsilon;
        let opposite = hist_fit.slope * fcst_fit.slope < 0.0;
        let detected = opposite && meaningful(hist_fit.slope) && meaningful(fcst_fit.slope);

        let confidence = if detected {
            (hist_fit.r_squared * fcst_fit.r_squared).sqrt()
        } else {
            0.0
        };

        let metrics = BTreeMap::from([
            ("historical_slope".to_string(), hist_fit.slope),
            ("forecast_slope".to_string(), fcst_fit.slope),
            ("historical_r2".to_string(), hist_fit.r_squared),
            ("forecast_r2".to_string(), fcst_fit.r_squared),
        ]);

        Issue::new(IssueKind::TrendMismatch, detected, confidence, metrics)
    }
}
