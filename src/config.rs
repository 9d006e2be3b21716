//! Engine configuration.

use crate::core::IssueKind;
use crate::detection::{
    MagnitudeDetector, SeasonalityDetector, TrendDetector, VolatilityDetector,
};

/// Per-issue weights for risk aggregation.
///
/// Each weight scales its issue's confidence before compounding into the
/// risk score; the default of 1.0 treats all failure modes equally.
#[derive(Debug, Clone)]
pub struct IssueWeights {
    /// Weight of trend mismatches.
    pub trend: f64,
    /// Weight of missing seasonality.
    pub seasonality: f64,
    /// Weight of volatility mismatches.
    pub volatility: f64,
    /// Weight of magnitude mismatches.
    pub magnitude: f64,
}

impl Default for IssueWeights {
    fn default() -> Self {
        Self {
            trend: 1.0,
            seasonality: 1.0,
            volatility: 1.0,
            magnitude: 1.0,
        }
    }
}

impl IssueWeights {
    /// The weight for a specific failure mode.
    pub fn weight(&self, kind: IssueKind) -> f64 {
        match kind {
            IssueKind::TrendMismatch => self.trend,
            IssueKind::MissingSeasonality => self.seasonality,
            IssueKind::VolatilityMismatch => self.volatility,
            IssueKind::MagnitudeMismatch => self.magnitude,
        }
    }
}

/// Immutable configuration for a [`DiagnosticEngine`](crate::engine::DiagnosticEngine).
///
/// Every option has a default, so behavior is reproducible without any
/// configuration. The value is set once at engine construction; parallel
/// per-item calls can never observe a change.
#[derive(Debug, Clone)]
pub struct DiagnosticConfig {
    /// Minimum usable historical segment length.
    pub min_historical_len: usize,
    /// Minimum usable forecast segment length.
    pub min_forecast_len: usize,
    /// Trend mismatch detector settings.
    pub trend: TrendDetector,
    /// Missing seasonality detector settings.
    pub seasonality: SeasonalityDetector,
    /// Volatility mismatch detector settings.
    pub volatility: VolatilityDetector,
    /// Magnitude mismatch detector settings.
    pub magnitude: MagnitudeDetector,
    /// Per-issue risk aggregation weights.
    pub weights: IssueWeights,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticConfig {
    /// Configuration with all defaults.
    pub fn new() -> Self {
        Self {
            min_historical_len: 6,
            min_forecast_len: 2,
            trend: TrendDetector::default(),
            seasonality: SeasonalityDetector::default(),
            volatility: VolatilityDetector::default(),
            magnitude: MagnitudeDetector::default(),
            weights: IssueWeights::default(),
        }
    }

    /// Set the minimum historical segment length.
    pub fn with_min_historical_len(mut self, len: usize) -> Self {
        self.min_historical_len = len;
        self
    }

    /// Set the minimum forecast segment length.
    pub fn with_min_forecast_len(mut self, len: usize) -> Self {
        self.min_forecast_len = len;
        self
    }

    /// Replace the trend detector settings.
    pub fn with_trend(mut self, trend: TrendDetector) -> Self {
        self.trend = trend;
        self
    }

    /// Replace the seasonality detector settings.
    pub fn with_seasonality(mut self, seasonality: SeasonalityDetector) -> Self {
        self.seasonality = seasonality;
        self
    }

    /// Replace the volatility detector settings.
    pub fn with_volatility(mut self, volatility: VolatilityDetector) -> Self {
        self.volatility = volatility;
        self
    }

    /// Replace the magnitude detector settings.
    pub fn with_magnitude(mut self, magnitude: MagnitudeDetector) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Replace the risk aggregation weights.
    pub fn with_weights(mut self, weights: IssueWeights) -> Self {
        self.weights = weights;
        self
    }
}
