//! Splitting a series into its historical and forecast segments.

use crate::core::ItemSeries;
use crate::error::{Result, TriageError};
use std::fmt;

/// Which side of the split a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Periods with observed actual values.
    Historical,
    /// Periods with only predicted values.
    Forecast,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Historical => write!(f, "historical"),
            SegmentKind::Forecast => write!(f, "forecast"),
        }
    }
}

/// A contiguous run of values taken from one side of the split.
///
/// Owned by the diagnosis call that created it and dropped with it; segments
/// are never persisted or mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    kind: SegmentKind,
    start_period: i64,
    values: Vec<f64>,
}

impl Segment {
    fn new(kind: SegmentKind, start_period: i64, values: Vec<f64>) -> Self {
        Self {
            kind,
            start_period,
            values,
        }
    }

    /// Which side of the split this segment is.
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Period of the segment's first value.
    pub fn start_period(&self) -> i64 {
        self.start_period
    }

    /// The segment's values in period order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the segment.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the segment holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split a series into `(historical, forecast)` segments.
///
/// The historical segment collects observed actuals at periods up to and
/// including `split_period`; the forecast segment collects predicted values
/// after it. When `split_period` is `None`, the last period holding an
/// observed actual is used.
///
/// Fails with [`TriageError::InsufficientData`] when either segment ends up
/// shorter than its minimum, and with [`TriageError::InvalidParameter`] when
/// an explicit split period lies outside the series.
pub fn split_at(
    series: &ItemSeries,
    split_period: Option<i64>,
    min_historical: usize,
    min_forecast: usize,
) -> Result<(Segment, Segment)> {
    let split = match split_period {
        Some(period) => {
            if period < series.first_period() || period > series.last_period() {
                return Err(TriageError::InvalidParameter(format!(
                    "split period {} outside series range {}..={}",
                    period,
                    series.first_period(),
                    series.last_period()
                )));
            }
            period
        }
        None => series
            .last_actual_period()
            .ok_or(TriageError::InsufficientData {
                segment: SegmentKind::Historical,
                needed: min_historical,
                got: 0,
            })?,
    };

    let mut historical = Vec::new();
    let mut historical_start = split;
    let mut forecast = Vec::new();
    let mut forecast_start = split;

    for (i, &period) in series.periods().iter().enumerate() {
        if period <= split {
            if let Some(value) = series.actuals()[i] {
                if historical.is_empty() {
                    historical_start = period;
                }
                historical.push(value);
            }
        } else if let Some(value) = series.forecasts()[i] {
            if forecast.is_empty() {
                forecast_start = period;
            }
            forecast.push(value);
        }
    }

    if historical.len() < min_historical {
        return Err(TriageError::InsufficientData {
            segment: SegmentKind::Historical,
            needed: min_historical,
            got: historical.len(),
        });
    }
    if forecast.len() < min_forecast {
        return Err(TriageError::InsufficientData {
            segment: SegmentKind::Forecast,
            needed: min_forecast,
            got: forecast.len(),
        });
    }

    Ok((
        Segment::new(SegmentKind::Historical, historical_start, historical),
        Segment::new(SegmentKind::Forecast, forecast_start, forecast),
    ))
}
