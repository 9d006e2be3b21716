//! Presentation-layer consumers of [`DiagnosticResult`](crate::core::DiagnosticResult).
//!
//! Everything here is a pure function of the diagnostic output: templated
//! explanations and plain-text reports for analysts triaging flagged items.
//! Nothing in this module touches the detectors or performs I/O.

mod explain;
mod summary;

pub use explain::explain;
pub use summary::{detailed_report, risk_band, RiskBand};
