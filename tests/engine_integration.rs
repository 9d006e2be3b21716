//! End-to-end scenarios for the diagnostic engine.

use forecast_triage::core::{IssueKind, ItemSeries};
use forecast_triage::engine::DiagnosticEngine;
use forecast_triage::error::TriageError;
use forecast_triage::report::{detailed_report, explain, risk_band, RiskBand};

const TAU: f64 = 2.0 * std::f64::consts::PI;

/// Small deterministic zig-zag noise around zero.
fn noise(i: usize, amplitude: f64) -> f64 {
    amplitude * if i % 2 == 0 { 1.0 } else { -1.0 }
}

fn series(item_id: &str, actuals: Vec<f64>, forecasts: Vec<f64>) -> ItemSeries {
    ItemSeries::from_history_and_forecast(item_id, 0, actuals, forecasts).unwrap()
}

#[test]
fn healthy_flat_item_reports_zero_risk() {
    let actuals: Vec<f64> = (0..36).map(|i| 50.0 + noise(i, 0.5)).collect();
    let forecasts: Vec<f64> = (0..18).map(|i| 50.0 + noise(i, 0.5)).collect();

    let engine = DiagnosticEngine::default();
    let result = engine.diagnose(&series("flat", actuals, forecasts)).unwrap();

    assert_eq!(result.risk_score, 0.0);
    assert_eq!(result.total_issues(), 0);
    assert_eq!(result.issues.len(), 4);
    for issue in &result.issues {
        assert!(!issue.detected);
        assert_eq!(issue.confidence, 0.0);
    }
    assert_eq!(risk_band(result.risk_score), RiskBand::Low);
}

#[test]
fn seasonal_history_with_flat_forecast_flags_missing_seasonality() {
    let actuals: Vec<f64> = (0..36)
        .map(|i| 100.0 + 25.0 * (TAU * i as f64 / 12.0).sin())
        .collect();
    let forecasts = vec![100.0; 18];

    let engine = DiagnosticEngine::default();
    let result = engine
        .diagnose(&series("seasonal", actuals, forecasts))
        .unwrap();

    assert!(result.is_detected(IssueKind::MissingSeasonality));
    let issue = result.issue(IssueKind::MissingSeasonality).unwrap();
    assert!(issue.metric("forecast_seasonal_strength").unwrap() < 1e-6);
    assert!(issue.metric("historical_seasonal_strength").unwrap() > 1.5);
    assert!(result.risk_score > 0.0);
}

#[test]
fn trend_reversal_flags_trend_mismatch() {
    let actuals: Vec<f64> = (0..24).map(|i| 100.0 + 4.0 * i as f64).collect();
    let forecasts: Vec<f64> = (0..12).map(|i| 192.0 - 4.0 * i as f64).collect();

    let engine = DiagnosticEngine::default();
    let result = engine.diagnose(&series("reversal", actuals, forecasts)).unwrap();

    assert!(result.is_detected(IssueKind::TrendMismatch));
    let issue = result.issue(IssueKind::TrendMismatch).unwrap();
    assert!(issue.metric("historical_slope").unwrap() > 0.0);
    assert!(issue.metric("forecast_slope").unwrap() < 0.0);
    assert!(issue.confidence > 0.9);
}

#[test]
fn smooth_forecast_flags_volatility_mismatch() {
    // Historical CV 0.20, forecast CV 0.05.
    let actuals: Vec<f64> = (0..24).map(|i| 100.0 + noise(i, 20.0)).collect();
    let forecasts: Vec<f64> = (0..12).map(|i| 100.0 + noise(i, 5.0)).collect();

    let engine = DiagnosticEngine::default();
    let result = engine.diagnose(&series("smooth", actuals, forecasts)).unwrap();

    assert!(result.is_detected(IssueKind::VolatilityMismatch));
    assert!(result.issue(IssueKind::VolatilityMismatch).unwrap().confidence > 0.5);
}

#[test]
fn level_jump_flags_magnitude_mismatch() {
    let actuals = vec![100.0; 24];
    let forecasts = vec![160.0; 12];

    let engine = DiagnosticEngine::default();
    let result = engine.diagnose(&series("jump", actuals, forecasts)).unwrap();

    assert!(result.is_detected(IssueKind::MagnitudeMismatch));
    let issue = result.issue(IssueKind::MagnitudeMismatch).unwrap();
    assert!((issue.metric("relative_difference").unwrap() - 0.6).abs() < 1e-9);
}

#[test]
fn multiple_issues_compound_the_risk_score() {
    // Trend reversal on top of vanishing volatility.
    let actuals: Vec<f64> = (0..24)
        .map(|i| 100.0 + 4.0 * i as f64 + noise(i, 15.0))
        .collect();
    let forecasts: Vec<f64> = (0..12).map(|i| 190.0 - 4.0 * i as f64).collect();

    let engine = DiagnosticEngine::default();
    let result = engine.diagnose(&series("compound", actuals, forecasts)).unwrap();

    assert!(result.total_issues() >= 2);

    let max_single = result
        .detected_issues()
        .map(|issue| issue.confidence)
        .fold(0.0, f64::max);
    assert!(result.risk_score > max_single);
    assert!(result.risk_score <= 1.0);
}

#[test]
fn diagnosis_serializes_for_export() {
    let actuals = vec![100.0; 24];
    let forecasts = vec![160.0; 12];

    let engine = DiagnosticEngine::default();
    let result = engine.diagnose(&series("export", actuals, forecasts)).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["item_id"], "export");
    assert!(json["risk_score"].as_f64().unwrap() > 0.0);

    let kinds: Vec<&str> = json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        [
            "trend_mismatch",
            "missing_seasonality",
            "volatility_mismatch",
            "magnitude_mismatch"
        ]
    );
}

#[test]
fn report_layer_renders_the_diagnosis() {
    let actuals: Vec<f64> = (0..36)
        .map(|i| 100.0 + 25.0 * (TAU * i as f64 / 12.0).sin())
        .collect();
    let forecasts = vec![100.0; 18];

    let engine = DiagnosticEngine::default();
    let result = engine.diagnose(&series("report", actuals, forecasts)).unwrap();

    let explanation = explain(&result);
    assert!(explanation.contains("seasonal"));

    let report = detailed_report(&result);
    assert!(report.contains("Item ID: report"));
    assert!(report.contains("Missing Seasonality: DETECTED"));
}

#[test]
fn repeated_diagnosis_is_bit_identical() {
    let actuals: Vec<f64> = (0..36)
        .map(|i| 80.0 + 2.0 * i as f64 + 15.0 * (TAU * i as f64 / 12.0).sin())
        .collect();
    let forecasts: Vec<f64> = (0..18).map(|i| 150.0 + 0.5 * i as f64).collect();
    let item = series("stable", actuals, forecasts);

    let engine = DiagnosticEngine::default();
    let first = engine.diagnose(&item).unwrap();
    let second = engine.diagnose(&item).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn invalid_series_is_rejected_not_repaired() {
    let result = ItemSeries::new(
        "bad",
        vec![0, 1, 3],
        vec![Some(1.0), Some(2.0), Some(3.0)],
        vec![None, None, None],
    );
    assert!(matches!(result, Err(TriageError::InvalidSeries(_))));
}

#[test]
fn short_series_fails_the_whole_call() {
    let engine = DiagnosticEngine::default();
    let item = series("short", vec![1.0, 2.0], vec![3.0, 4.0]);

    let result = engine.diagnose(&item);
    assert!(matches!(
        result,
        Err(TriageError::InsufficientData { .. })
    ));
}
