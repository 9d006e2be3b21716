//! Templated explanations keyed by which issues fired.

use crate::core::{DiagnosticResult, IssueKind};

/// Produce a human-readable explanation of a diagnosis.
///
/// Selects a canned narrative from the combination of detected issues,
/// giving trend problems precedence over the single-issue narratives.
pub fn explain(result: &DiagnosticResult) -> String {
    let trend = result.is_detected(IssueKind::TrendMismatch);
    let seasonality = result.is_detected(IssueKind::MissingSeasonality);
    let volatility = result.is_detected(IssueKind::VolatilityMismatch);
    let magnitude = result.is_detected(IssueKind::MagnitudeMismatch);

    let text = if trend && seasonality {
        "The forecast appears problematic due to multiple issues. The model \
         seems to have missed the underlying trend direction seen in the \
         historical data, and clear seasonal patterns in the past are not \
         reflected in the forecast, making it appear unnaturally flat. This \
         suggests the model may need recalibration or an approach that better \
         captures both trend and seasonal components."
    } else if trend && volatility {
        "The forecast shows concerning issues with both trend direction and \
         volatility. The model appears to have reversed the historical trend, \
         which could indicate overfitting to recent noise or a structural \
         break that was not accounted for. The forecast is also unusually \
         smooth compared to historical variation, suggesting the model is \
         overly conservative in its predictions."
    } else if trend {
        "There is a significant trend mismatch between historical data and \
         the forecast. The model predicts the opposite direction from what \
         the historical trend suggests, which could indicate miscalibration \
         or a structural break in the series that requires attention."
    } else if seasonality {
        "The forecast misses important seasonal patterns present in the \
         historical data. The model may not adequately capture seasonal \
         cycles, which are crucial for accurate demand planning; seasonal \
         decomposition or a seasonality-aware method may help."
    } else if volatility {
        "The forecast is unusually flat compared to the natural variation \
         seen in historical data. This over-smoothing could lead to \
         understocking during high-demand periods and overstocking during \
         low-demand periods; the model may need adjustment to reflect \
         realistic demand uncertainty."
    } else if magnitude {
        "There is a significant gap between recent actual demand levels and \
         the early forecast predictions. The model may not be accounting for \
         recent trends or level shifts; recalibration on more recent data or \
         a different baseline may be needed."
    } else {
        "The forecast appears well-aligned with historical patterns. No \
         significant issues were detected in trend direction, seasonality, \
         volatility, or magnitude."
    };

    text.to_string()
}
