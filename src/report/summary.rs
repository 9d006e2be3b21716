//! Plain-text reporting for a single diagnosis.

use crate::core::{DiagnosticResult, IssueKind};
use crate::report::explain;

/// Coarse classification of a risk score for triage displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    /// Risk score at or below 0.2.
    Low,
    /// Risk score above 0.2, at or below 0.5.
    Medium,
    /// Risk score above 0.5.
    High,
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskBand::Low => write!(f, "low"),
            RiskBand::Medium => write!(f, "medium"),
            RiskBand::High => write!(f, "high"),
        }
    }
}

/// Classify a risk score into its triage band.
pub fn risk_band(risk_score: f64) -> RiskBand {
    if risk_score > 0.5 {
        RiskBand::High
    } else if risk_score > 0.2 {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

fn issue_label(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::TrendMismatch => "Trend Mismatch",
        IssueKind::MissingSeasonality => "Missing Seasonality",
        IssueKind::VolatilityMismatch => "Volatility Mismatch",
        IssueKind::MagnitudeMismatch => "Magnitude Mismatch",
    }
}

/// Format a full plain-text report for one diagnosed item.
///
/// Includes the risk score and band, the templated explanation, and an
/// issue-by-issue breakdown with every recorded metric.
pub fn detailed_report(result: &DiagnosticResult) -> String {
    let mut out = String::new();

    out.push_str("=== FORECAST ANALYSIS REPORT ===\n");
    out.push_str(&format!("Item ID: {}\n", result.item_id));
    out.push_str(&format!(
        "Risk Score: {:.3} ({})\n",
        result.risk_score,
        risk_band(result.risk_score)
    ));
    out.push_str(&format!("Issues Detected: {}\n\n", result.total_issues()));

    out.push_str("=== EXPLANATION ===\n");
    out.push_str(&explain(result));
    out.push_str("\n\n");

    out.push_str("=== DETAILED DIAGNOSTICS ===\n");
    for issue in &result.issues {
        out.push_str(&format!(
            "{}: {}\n",
            issue_label(issue.kind),
            if issue.detected { "DETECTED" } else { "Not detected" }
        ));
        out.push_str(&format!("  Confidence: {:.3}\n", issue.confidence));
        for (name, value) in &issue.metrics {
            out.push_str(&format!("  {}: {:.4}\n", name, value));
        }
        out.push('\n');
    }

    out
}
