//! Error types for the forecast-triage library.

use crate::core::SegmentKind;
use thiserror::Error;

/// Result type alias for diagnostic operations.
pub type Result<T> = std::result::Result<T, TriageError>;

/// Errors that can occur while diagnosing a forecast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriageError {
    /// Input series holds no periods at all.
    #[error("empty input series")]
    EmptySeries,

    /// Input series violates its structural invariants.
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// A segment is too short for the minimum statistical requirement.
    #[error("insufficient {segment} data: need at least {needed} periods, got {got}")]
    InsufficientData {
        segment: SegmentKind,
        needed: usize,
        got: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
