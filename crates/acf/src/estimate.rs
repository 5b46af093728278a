//! Sample autocovariance and autocorrelation estimators.
//!
//! All estimators here divide by the full series length `n` at every lag
//! (the biased convention). The autocorrelation is a ratio of two such
//! autocovariances, so the normalization constant cancels and
//! `acf(series, 0)` is exactly 1.

use crate::error::AcfError;
use crate::lag::lag;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Mean squared deviation from the mean, dividing by `n`.
///
/// This is the divide-by-n convention, matching the autocovariance
/// normalization: `variance(data)` equals `avf(data, 0)`. Returns 0.0 if
/// empty.
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let mu = mean(data);
    data.iter().map(|&x| (x - mu) * (x - mu)).sum::<f64>() / n
}

/// Sample autocovariance of a series at lag `h`.
///
/// Computes the mean once, then accumulates the products of mean-centered
/// pairs `h` steps apart in a single pass:
///
/// `(1/n) * Σ (series[i + h] - μ) * (series[i] - μ)` for `i` in `0..n - h`.
///
/// The divisor is the full length `n` at every lag.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`AcfError::EmptyData`] | `series` is empty |
/// | [`AcfError::LagOutOfRange`] | `h >= series.len()` |
pub fn avf(series: &[f64], h: usize) -> Result<f64, AcfError> {
    let (past, present) = lag(series, h)?;
    let mu = mean(series);
    let sum: f64 = present
        .iter()
        .zip(past.iter())
        .map(|(&a, &b)| (a - mu) * (b - mu))
        .sum();
    Ok(sum / series.len() as f64)
}

/// Sample autocorrelation of a series at lag `h`.
///
/// The lag-`h` autocovariance normalized by the lag-0 autocovariance, so
/// `acf(series, 0)` is exactly 1. The result is not clamped: finite-sample
/// estimates on tiny inputs can fall outside `[-1, 1]`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`AcfError::EmptyData`] | `series` is empty |
/// | [`AcfError::LagOutOfRange`] | `h >= series.len()` |
/// | [`AcfError::ConstantData`] | all values are identical |
pub fn acf(series: &[f64], h: usize) -> Result<f64, AcfError> {
    let numerator = avf(series, h)?;
    let denominator = avf(series, 0)?;
    if denominator == 0.0 {
        return Err(AcfError::ConstantData);
    }
    Ok(numerator / denominator)
}

/// Sample autocorrelation at every lag in `0..=max_lag`.
///
/// Equivalent to calling [`acf`] per lag, but the lag-0 denominator is
/// computed once. The first entry is always exactly 1.
///
/// # Errors
///
/// Same as [`acf`], with `max_lag` taking the role of `h`.
pub fn acf_profile(series: &[f64], max_lag: usize) -> Result<Vec<f64>, AcfError> {
    let n = series.len();
    if n == 0 {
        return Err(AcfError::EmptyData);
    }
    if max_lag >= n {
        return Err(AcfError::LagOutOfRange { h: max_lag, n });
    }
    let denominator = avf(series, 0)?;
    if denominator == 0.0 {
        return Err(AcfError::ConstantData);
    }
    (0..=max_lag)
        .map(|h| avf(series, h).map(|g| g / denominator))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_basic() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn variance_matches_lag_zero_avf() {
        let s = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&s), avf(&s, 0).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn variance_empty() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn avf_known_values() {
        // s centered at mean 3: deviations [-2, -1, 0, 1, 2].
        let s = [1.0, 2.0, 3.0, 4.0, 5.0];
        // (4 + 1 + 0 + 1 + 4) / 5
        assert_relative_eq!(avf(&s, 0).unwrap(), 2.0, epsilon = 1e-12);
        // ((-1)(-2) + 0(-1) + 1*0 + 2*1) / 5
        assert_relative_eq!(avf(&s, 1).unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn acf_known_values() {
        let s = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(acf(&s, 1).unwrap(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn acf_lag_zero_is_one() {
        let s = [3.0, -1.0, 4.0, 1.0, -5.0, 9.0];
        assert_relative_eq!(acf(&s, 0).unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn avf_single_observation() {
        // One observation: the only deviation is zero.
        assert_eq!(avf(&[7.0], 0).unwrap(), 0.0);
    }

    #[test]
    fn avf_maximum_lag_single_pair() {
        let s = [1.0, 5.0];
        // mean 3, deviations [-2, 2]: (2 * -2) / 2 = -2.
        assert_relative_eq!(avf(&s, 1).unwrap(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn avf_empty_rejected() {
        let err = avf(&[], 0).unwrap_err();
        assert!(matches!(err, AcfError::EmptyData));
    }

    #[test]
    fn avf_lag_out_of_range_rejected() {
        let err = avf(&[1.0, 2.0, 3.0], 3).unwrap_err();
        assert!(matches!(err, AcfError::LagOutOfRange { h: 3, n: 3 }));
    }

    #[test]
    fn acf_constant_series_rejected() {
        let err = acf(&[5.0, 5.0, 5.0], 0).unwrap_err();
        assert!(matches!(err, AcfError::ConstantData));
    }

    #[test]
    fn acf_constant_series_rejected_at_any_lag() {
        let err = acf(&[5.0, 5.0, 5.0], 1).unwrap_err();
        assert!(matches!(err, AcfError::ConstantData));
    }

    #[test]
    fn acf_lag_checked_before_variance() {
        // An out-of-range lag on a constant series reports the lag problem.
        let err = acf(&[5.0, 5.0, 5.0], 7).unwrap_err();
        assert!(matches!(err, AcfError::LagOutOfRange { h: 7, n: 3 }));
    }

    #[test]
    fn profile_matches_per_lag_calls() {
        let s = [1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0];
        let profile = acf_profile(&s, 4).unwrap();
        assert_eq!(profile.len(), 5);
        for (h, &rho) in profile.iter().enumerate() {
            assert_relative_eq!(rho, acf(&s, h).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn profile_starts_at_one() {
        let s = [0.5, 1.5, -0.5, 2.5];
        let profile = acf_profile(&s, 2).unwrap();
        assert_eq!(profile[0], 1.0);
    }

    #[test]
    fn profile_max_lag_out_of_range_rejected() {
        let err = acf_profile(&[1.0, 2.0], 2).unwrap_err();
        assert!(matches!(err, AcfError::LagOutOfRange { h: 2, n: 2 }));
    }

    #[test]
    fn profile_empty_rejected() {
        let err = acf_profile(&[], 0).unwrap_err();
        assert!(matches!(err, AcfError::EmptyData));
    }

    #[test]
    fn profile_constant_rejected() {
        let err = acf_profile(&[2.0, 2.0, 2.0], 1).unwrap_err();
        assert!(matches!(err, AcfError::ConstantData));
    }

    #[test]
    fn alternating_series_has_negative_lag_one() {
        let s = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        assert!(acf(&s, 1).unwrap() < 0.0);
    }
}
