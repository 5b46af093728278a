//! Centered moving-average smoothing.

use crate::error::SimulateError;

/// Smooths a series with a centered window of odd size.
///
/// Output position `t` is the arithmetic mean of the `window` input values
/// centered at input position `t + (window - 1) / 2`. Edge positions without
/// a full window are dropped rather than padded, so the output is shorter
/// than the input by `window - 1`. A window of 1 returns the input unchanged.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SimulateError::WindowZero`] | `window == 0` |
/// | [`SimulateError::WindowEven`] | `window` is even |
/// | [`SimulateError::WindowExceedsData`] | `window > series.len()` |
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<f64>, SimulateError> {
    let n = series.len();
    if window == 0 {
        return Err(SimulateError::WindowZero);
    }
    if window % 2 == 0 {
        return Err(SimulateError::WindowEven { window });
    }
    if window > n {
        return Err(SimulateError::WindowExceedsData { window, n });
    }

    let scale = 1.0 / window as f64;
    Ok(series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() * scale)
        .collect())
}
