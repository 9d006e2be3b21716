//! Frequency-domain helpers for seasonal strength estimation.

use rustfft::{num_complex::Complex64, FftPlanner};

/// Compute the FFT magnitude spectrum of a real-valued signal.
///
/// Returns `|X[k]|` for `k = 0..=n/2` (positive frequencies only; the input
/// is real so the spectrum is symmetric).
pub fn magnitude_spectrum(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer
        .iter()
        .take(n / 2 + 1)
        .map(|c| (c.re * c.re + c.im * c.im).sqrt())
        .collect()
}

/// Strength of the cycle of length `cycle_len` in `signal`.
///
/// The signal is mean-centered, transformed, and the magnitude of the bin
/// nearest the cycle frequency is normalized by the mean magnitude over all
/// non-DC bins up to Nyquist, making the value comparable across segments of
/// different lengths and scales. A value near 1.0 means the cycle is no
/// stronger than the average frequency component.
///
/// Returns `None` when the signal is shorter than one full cycle, where the
/// cycle bin is undefined. A constant signal has zero spectral mass and
/// reports strength 0.0.
pub fn seasonal_strength(signal: &[f64], cycle_len: usize) -> Option<f64> {
    let n = signal.len();
    if cycle_len < 2 || n < cycle_len {
        return None;
    }

    let mean = signal.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = signal.iter().map(|&x| x - mean).collect();
    let spectrum = magnitude_spectrum(&centered);

    // Cycle of length L completes n/L times over the window; that count is
    // the frequency bin index.
    let cycle_bin = ((n as f64 / cycle_len as f64).round() as usize).max(1);
    let nyquist = n / 2;
    if cycle_bin > nyquist {
        return None;
    }

    let total: f64 = spectrum[1..=nyquist].iter().sum();
    let baseline = total / nyquist as f64;
    if baseline < 1e-12 {
        return Some(0.0);
    }

    Some(spectrum[cycle_bin] / baseline)
}
