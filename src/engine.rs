//! The diagnostic engine: orchestration and risk aggregation.

use crate::config::DiagnosticConfig;
use crate::core::{split_at, DiagnosticResult, Issue, ItemSeries};
use crate::detection::IssueDetector;
use crate::error::Result;

/// Stateless engine that diagnoses one item's forecast against its history.
///
/// The engine is a pure function of `(series, split policy, configuration)`:
/// it holds no cross-item state and no caches, so one instance can be shared
/// freely across threads and repeated calls on the same input produce
/// identical results.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticEngine {
    config: DiagnosticConfig,
}

impl DiagnosticEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: DiagnosticConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Diagnose a series, splitting at its last observed actual.
    pub fn diagnose(&self, series: &ItemSeries) -> Result<DiagnosticResult> {
        self.run(series, None)
    }

    /// Diagnose a series with an explicit split period.
    pub fn diagnose_at(&self, series: &ItemSeries, split_period: i64) -> Result<DiagnosticResult> {
        self.run(series, Some(split_period))
    }

    /// Diagnose a batch of items sequentially.
    ///
    /// Each item is independent; callers that want parallelism can equally
    /// map [`DiagnosticEngine::diagnose`] over the items with any strategy
    /// of their own.
    pub fn diagnose_batch<'a, I>(&self, items: I) -> Vec<Result<DiagnosticResult>>
    where
        I: IntoIterator<Item = &'a ItemSeries>,
    {
        items.into_iter().map(|item| self.diagnose(item)).collect()
    }

    fn run(&self, series: &ItemSeries, split_period: Option<i64>) -> Result<DiagnosticResult> {
        let (historical, forecast) = split_at(
            series,
            split_period,
            self.config.min_historical_len,
            self.config.min_forecast_len,
        )?;

        let hist = historical.values();
        let fcst = forecast.values();

        let issues = vec![
            self.config.trend.detect(hist, fcst),
            self.config.seasonality.detect(hist, fcst),
            self.config.volatility.detect(hist, fcst),
            self.config.magnitude.detect(hist, fcst),
        ];

        let risk_score = self.risk_score(&issues);

        Ok(DiagnosticResult {
            item_id: series.item_id().to_string(),
            issues,
            risk_score,
        })
    }

    /// Compound detected issues into one score in `[0, 1]`.
    ///
    /// `risk = 1 − Π (1 − wᵢ·cᵢ)` over detected issues, so two medium
    /// confidences rank above either alone, and an undetected issue
    /// contributes nothing.
    fn risk_score(&self, issues: &[Issue]) -> f64 {
        let survival: f64 = issues
            .iter()
            .filter(|issue| issue.detected)
            .map(|issue| {
                let weighted = self.config.weights.weight(issue.kind) * issue.confidence;
                1.0 - weighted.clamp(0.0, 1.0)
            })
            .product();
        (1.0 - survival).clamp(0.0, 1.0)
    }
}
