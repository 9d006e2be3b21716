//! Diagnostic value types: issues and the per-item result.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The failure mode a detector looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Forecast trend direction contradicts the historical trend.
    TrendMismatch,
    /// Historical seasonal pattern absent from the forecast.
    MissingSeasonality,
    /// Forecast implausibly smoother than history.
    VolatilityMismatch,
    /// Forecast level far from recent actual levels.
    MagnitudeMismatch,
}

impl IssueKind {
    /// All kinds in the fixed order the engine reports them.
    pub const ALL: [IssueKind; 4] = [
        IssueKind::TrendMismatch,
        IssueKind::MissingSeasonality,
        IssueKind::VolatilityMismatch,
        IssueKind::MagnitudeMismatch,
    ];
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::TrendMismatch => write!(f, "trend mismatch"),
            IssueKind::MissingSeasonality => write!(f, "missing seasonality"),
            IssueKind::VolatilityMismatch => write!(f, "volatility mismatch"),
            IssueKind::MagnitudeMismatch => write!(f, "magnitude mismatch"),
        }
    }
}

/// Outcome of one detector, present whether or not the issue fired.
///
/// `metrics` holds the detector's raw measurements keyed by name so
/// downstream consumers can inspect them without re-running anything. A
/// `BTreeMap` keeps iteration and serialization order deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Which failure mode this issue describes.
    pub kind: IssueKind,
    /// Whether the failure mode is present.
    pub detected: bool,
    /// Confidence in the detection, 0.0 to 1.0; 0.0 when not detected.
    pub confidence: f64,
    /// Raw detector measurements keyed by metric name.
    pub metrics: BTreeMap<String, f64>,
}

impl Issue {
    /// Build a detected or undetected issue from a detector's measurements.
    pub fn new(
        kind: IssueKind,
        detected: bool,
        confidence: f64,
        metrics: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            kind,
            detected,
            confidence: confidence.clamp(0.0, 1.0),
            metrics,
        }
    }

    /// An undetected issue carrying sentinel metrics for a degenerate input.
    pub fn degenerate(kind: IssueKind, metrics: BTreeMap<String, f64>) -> Self {
        Self::new(kind, false, 0.0, metrics)
    }

    /// Look up a metric by name.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

/// Immutable diagnosis of one item's forecast.
///
/// Holds one [`Issue`] per detector in fixed order (trend, seasonality,
/// volatility, magnitude) and the aggregate risk score. Recomputed fresh on
/// every engine call; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticResult {
    /// Identifier of the diagnosed item.
    pub item_id: String,
    /// One issue per detector, detected or not.
    pub issues: Vec<Issue>,
    /// Aggregate risk, 0.0 to 1.0; 0.0 exactly when nothing was detected.
    pub risk_score: f64,
}

impl DiagnosticResult {
    /// The issue for a specific failure mode.
    pub fn issue(&self, kind: IssueKind) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.kind == kind)
    }

    /// Whether a specific failure mode was detected.
    pub fn is_detected(&self, kind: IssueKind) -> bool {
        self.issue(kind).is_some_and(|issue| issue.detected)
    }

    /// Issues that actually fired.
    pub fn detected_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|issue| issue.detected)
    }

    /// Number of detected issues.
    pub fn total_issues(&self) -> usize {
        self.detected_issues().count()
    }

    /// Whether any issue fired.
    pub fn has_issues(&self) -> bool {
        self.issues.iter().any(|issue| issue.detected)
    }
}
