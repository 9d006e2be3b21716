//! Per-item time series with observed actuals and predicted values.

use crate::error::{Result, TriageError};

/// One item's time series over contiguous month periods.
///
/// Each period carries an optional observed actual and an optional predicted
/// value; `None` marks an explicitly missing value (forecast-only periods
/// have no actual and vice versa). Construction validates every structural
/// invariant, so holders of an `ItemSeries` never re-check them.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSeries {
    item_id: String,
    periods: Vec<i64>,
    actuals: Vec<Option<f64>>,
    forecasts: Vec<Option<f64>>,
}

impl ItemSeries {
    /// Create a validated series.
    ///
    /// Rejects empty input, mismatched column lengths, periods that are not
    /// strictly increasing and contiguous, and non-finite values.
    pub fn new(
        item_id: impl Into<String>,
        periods: Vec<i64>,
        actuals: Vec<Option<f64>>,
        forecasts: Vec<Option<f64>>,
    ) -> Result<Self> {
        if periods.is_empty() {
            return Err(TriageError::EmptySeries);
        }
        if actuals.len() != periods.len() || forecasts.len() != periods.len() {
            return Err(TriageError::InvalidSeries(format!(
                "expected {} actuals and forecasts, got {} and {}",
                periods.len(),
                actuals.len(),
                forecasts.len()
            )));
        }

        for window in periods.windows(2) {
            if window[1] <= window[0] {
                return Err(TriageError::InvalidSeries(
                    "periods must be strictly increasing".to_string(),
                ));
            }
            if window[1] != window[0] + 1 {
                return Err(TriageError::InvalidSeries(format!(
                    "periods must be contiguous, gap between {} and {}",
                    window[0], window[1]
                )));
            }
        }

        for value in actuals.iter().chain(forecasts.iter()).flatten() {
            if !value.is_finite() {
                return Err(TriageError::InvalidSeries(
                    "values must be finite".to_string(),
                ));
            }
        }

        Ok(Self {
            item_id: item_id.into(),
            periods,
            actuals,
            forecasts,
        })
    }

    /// Build a series from back-to-back history and forecast blocks.
    ///
    /// History occupies periods `start..start + actuals.len()`, the forecast
    /// the periods directly after it. This matches the usual loader output
    /// where predictions begin the month after the last observed actual.
    pub fn from_history_and_forecast(
        item_id: impl Into<String>,
        start_period: i64,
        actuals: Vec<f64>,
        forecasts: Vec<f64>,
    ) -> Result<Self> {
        let n = actuals.len() + forecasts.len();
        let periods: Vec<i64> = (0..n as i64).map(|i| start_period + i).collect();

        let actual_col: Vec<Option<f64>> = actuals
            .iter()
            .map(|&v| Some(v))
            .chain(std::iter::repeat(None).take(forecasts.len()))
            .collect();
        let forecast_col: Vec<Option<f64>> = std::iter::repeat(None)
            .take(actuals.len())
            .chain(forecasts.iter().map(|&v| Some(v)))
            .collect();

        Self::new(item_id, periods, actual_col, forecast_col)
    }

    /// Identifier of the item this series belongs to.
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Number of periods in the series.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// A validated series is never empty, but the check keeps call sites
    /// honest about the invariant.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Month periods, strictly increasing and contiguous.
    pub fn periods(&self) -> &[i64] {
        &self.periods
    }

    /// Observed actual per period (`None` = not observed).
    pub fn actuals(&self) -> &[Option<f64>] {
        &self.actuals
    }

    /// Predicted value per period (`None` = no prediction).
    pub fn forecasts(&self) -> &[Option<f64>] {
        &self.forecasts
    }

    /// First period of the series.
    pub fn first_period(&self) -> i64 {
        self.periods[0]
    }

    /// Last period of the series.
    pub fn last_period(&self) -> i64 {
        self.periods[self.periods.len() - 1]
    }

    /// Last period holding an observed actual, if any.
    ///
    /// This is the default split point between history and forecast.
    pub fn last_actual_period(&self) -> Option<i64> {
        self.periods
            .iter()
            .zip(self.actuals.iter())
            .rev()
            .find(|(_, actual)| actual.is_some())
            .map(|(&period, _)| period)
    }
}
