//! Magnitude mismatch detection.

use crate::core::{Issue, IssueKind};
use crate::detection::IssueDetector;
use crate::utils::stats::mean;
use std::collections::BTreeMap;

/// Detects a forecast that starts at an implausible level.
///
/// Compares the mean of the last `window` historical values against the
/// mean of the first `window` forecast values (fewer when a segment is
/// shorter). Fires when the relative difference exceeds `threshold`;
/// confidence grows linearly past the threshold and sits at 0.5 right on
/// the boundary.
#[derive(Debug, Clone)]
pub struct MagnitudeDetector {
    /// Number of periods compared on each side of the split.
    pub window: usize,
    /// Minimum relative difference to fire.
    pub threshold: f64,
}

impl Default for MagnitudeDetector {
    fn default() -> Self {
        Self {
            window: 6,
            threshold: 0.5,
        }
    }
}

impl MagnitudeDetector {
    /// Create a detector with custom parameters.
    pub fn new(window: usize, threshold: f64) -> Self {
        Self {
            window: window.max(1),
            threshold: threshold.max(0.0),
        }
    }

    /// Set the comparison window.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Set the relative-difference threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.max(0.0);
        self
    }
}

impl IssueDetector for MagnitudeDetector {
    fn kind(&self) -> IssueKind {
        IssueKind::MagnitudeMismatch
    }

    fn detect(&self, historical: &[f64], forecast: &[f64]) -> Issue {
        let recent = &historical[historical.len().saturating_sub(self.window)..];
        let early = &forecast[..self.window.min(forecast.len())];

        if recent.is_empty() || early.is_empty() {
            let metrics = BTreeMap::from([
                ("recent_actual_mean".to_string(), 0.0),
                ("early_forecast_mean".to_string(), 0.0),
                ("relative_difference".to_string(), 0.0),
                ("undefined_baseline".to_string(), 1.0),
            ]);
            return Issue::degenerate(IssueKind::MagnitudeMismatch, metrics);
        }

        let recent_mean = mean(recent);
        let early_mean = mean(early);

        // A near-zero recent level makes the ratio meaningless; report the
        // undefined baseline instead of an exploding relative difference.
        if recent_mean.abs() < 1e-10 {
            let metrics = BTreeMap::from([
                ("recent_actual_mean".to_string(), recent_mean),
                ("early_forecast_mean".to_string(), early_mean),
                ("relative_difference".to_string(), 0.0),
                ("undefined_baseline".to_string(), 1.0),
            ]);
            return Issue::degenerate(IssueKind::MagnitudeMismatch, metrics);
        }

        let relative_difference = (early_mean - recent_mean).abs() / recent_mean.abs();
        let detected = relative_difference > self.threshold;

        let confidence = if detected {
            ((relative_difference - self.threshold) / self.threshold + 0.5).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let metrics = BTreeMap::from([
            ("recent_actual_mean".to_string(), recent_mean),
            ("early_forecast_mean".to_string(), early_mean),
            ("relative_difference".to_string(), relative_difference),
        ]);

        Issue::new(IssueKind::MagnitudeMismatch, detected, confidence, metrics)
    }
}
