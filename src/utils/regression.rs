//! Ordinary least squares line fitting.
//!
//! Fits `y = slope * x + intercept` with the observation index as the
//! predictor. This is the only model fitting the crate performs.

/// Result of fitting a line to a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line (per period).
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// R-squared (coefficient of determination) of the fit.
    pub r_squared: f64,
}

/// Fit a least-squares line through `(index, value)` pairs.
///
/// Returns `None` when fewer than two values are given, where a line is
/// undefined. A constant series fits exactly (slope 0, R² 1).
pub fn linear_fit(values: &[f64]) -> Option<LinearFit> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..values.len()).map(|i| (i * i) as f64).sum();

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let ss_xx = sum_x2 - n * mean_x * mean_x;
    let ss_xy = sum_xy - n * mean_x * mean_y;

    // Index predictor with n >= 2 always has positive spread, but guard the
    // division anyway.
    if ss_xx.abs() < 1e-10 {
        return None;
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let ss_yy: f64 = values.iter().map(|&y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let y_pred = slope * i as f64 + intercept;
            (y - y_pred).powi(2)
        })
        .sum();

    let r_squared = if ss_yy.abs() < 1e-10 {
        // Constant response: the horizontal line explains it perfectly.
        1.0
    } else {
        (1.0 - ss_res / ss_yy).clamp(0.0, 1.0)
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}
