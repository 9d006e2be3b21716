//! # forecast-triage
//!
//! Diagnostic engine for finding produced forecasts that disagree with the
//! historical behavior of their time series.
//!
//! One item's series is split into a historical and a forecast segment,
//! four independent detectors compare the segments (trend direction,
//! annual seasonality, volatility, magnitude), and the detected issues are
//! compounded into a single risk score for triage. A templated explanation
//! and plain-text report layer consumes the result.
//!
//! ```
//! use forecast_triage::prelude::*;
//!
//! let history: Vec<f64> = (0..36)
//!     .map(|i| 100.0 + 20.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
//!     .collect();
//! let forecast = vec![100.0; 18];
//!
//! let series = ItemSeries::from_history_and_forecast("item-1", 0, history, forecast)?;
//! let engine = DiagnosticEngine::default();
//! let result = engine.diagnose(&series)?;
//!
//! assert!(result.is_detected(IssueKind::MissingSeasonality));
//! assert!(result.risk_score > 0.0);
//! # Ok::<(), forecast_triage::TriageError>(())
//! ```

pub mod config;
pub mod core;
pub mod detection;
pub mod engine;
pub mod error;
pub mod report;
pub mod utils;

pub use error::{Result, TriageError};

pub mod prelude {
    pub use crate::config::{DiagnosticConfig, IssueWeights};
    pub use crate::core::{DiagnosticResult, Issue, IssueKind, ItemSeries, Segment, SegmentKind};
    pub use crate::engine::DiagnosticEngine;
    pub use crate::error::{Result, TriageError};
}
