//! Random walk accumulation.

use crate::error::SimulateError;

/// Accumulates a noise series into a random walk with constant drift.
///
/// Output position `t` holds the running sum of `series[0..=t]` with `drift`
/// added at every step, so `out[t] = (t + 1) * drift + series[0] + ... +
/// series[t]`. A drift of zero yields a pure random walk.
///
/// # Errors
///
/// Returns [`SimulateError::ZeroLength`] if `series` is empty.
pub fn random_walk(series: &[f64], drift: f64) -> Result<Vec<f64>, SimulateError> {
    if series.is_empty() {
        return Err(SimulateError::ZeroLength);
    }

    let mut total = 0.0;
    Ok(series
        .iter()
        .map(|&w| {
            total += w + drift;
            total
        })
        .collect())
}
