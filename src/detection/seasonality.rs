//! Missing seasonality detection.

use crate::core::{Issue, IssueKind};
use crate::detection::spectrum::seasonal_strength;
use crate::detection::IssueDetector;
use std::collections::BTreeMap;

/// Detects a forecast that drops a clear annual pattern present in history.
///
/// Seasonal strength is the normalized magnitude of the frequency component
/// at the configured cycle length (see [`seasonal_strength`]). The issue
/// fires only when the history is genuinely seasonal AND the forecast
/// retains at most a small fraction of that strength, so a non-seasonal
/// history never triggers.
#[derive(Debug, Clone)]
pub struct SeasonalityDetector {
    /// Cycle length in periods (12 = annual cycle on monthly data).
    pub cycle_len: usize,
    /// Minimum historical strength for the history to count as seasonal.
    /// The default sits above the pseudo-strength a plain linear trend
    /// leaks into the cycle bin.
    pub min_strength: f64,
    /// Maximum forecast/historical strength ratio still considered "missing".
    pub max_ratio: f64,
}

impl Default for SeasonalityDetector {
    fn default() -> Self {
        Self {
            cycle_len: 12,
            min_strength: 2.0,
            max_ratio: 0.25,
        }
    }
}

impl SeasonalityDetector {
    /// Create a detector with custom parameters.
    pub fn new(cycle_len: usize, min_strength: f64, max_ratio: f64) -> Self {
        Self {
            cycle_len,
            min_strength: min_strength.max(0.0),
            max_ratio: max_ratio.clamp(0.0, 1.0),
        }
    }

    /// Set the cycle length.
    pub fn with_cycle_len(mut self, cycle_len: usize) -> Self {
        self.cycle_len = cycle_len;
        self
    }

    /// Set the minimum historical strength.
    pub fn with_min_strength(mut self, min_strength: f64) -> Self {
        self.min_strength = min_strength.max(0.0);
        self
    }

    /// Set the maximum forecast/historical ratio.
    pub fn with_max_ratio(mut self, max_ratio: f64) -> Self {
        self.max_ratio = max_ratio.clamp(0.0, 1.0);
        self
    }
}

impl IssueDetector for SeasonalityDetector {
    fn kind(&self) -> IssueKind {
        IssueKind::MissingSeasonality
    }

    fn detect(&self, historical: &[f64], forecast: &[f64]) -> Issue {
        let strengths = seasonal_strength(historical, self.cycle_len)
            .zip(seasonal_strength(forecast, self.cycle_len));

        let Some((hist_strength, fcst_strength)) = strengths else {
            // A segment shorter than one cycle has no usable cycle bin.
            let metrics = BTreeMap::from([
                ("historical_seasonal_strength".to_string(), 0.0),
                ("forecast_seasonal_strength".to_string(), 0.0),
                ("insufficient_length".to_string(), 1.0),
            ]);
            return Issue::degenerate(IssueKind::MissingSeasonality, metrics);
        };

        let detected = hist_strength > self.min_strength
            && fcst_strength < self.max_ratio * hist_strength;

        let confidence = if detected {
            ((hist_strength - fcst_strength) / hist_strength).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let metrics = BTreeMap::from([
            ("historical_seasonal_strength".to_string(), hist_strength),
            ("forecast_seasonal_strength".to_string(), fcst_strength),
        ]);

        Issue::new(IssueKind::MissingSeasonality, detected, confidence, metrics)
    }
}
