//! Index-shifted alignment of a series with its lagged copy.

use crate::error::AcfError;

/// Splits a series into the aligned pair `(past, present)` offset by `h`.
///
/// Returns the borrowed slices `&series[..n - h]` and `&series[h..]`, both of
/// length `n - h`, so that `present[i]` is the observation `h` steps after
/// `past[i]`. No data is copied. A lag of 0 aligns the series with itself.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`AcfError::EmptyData`] | `series` is empty |
/// | [`AcfError::LagOutOfRange`] | `h >= series.len()` |
pub fn lag(series: &[f64], h: usize) -> Result<(&[f64], &[f64]), AcfError> {
    let n = series.len();
    if n == 0 {
        return Err(AcfError::EmptyData);
    }
    if h >= n {
        return Err(AcfError::LagOutOfRange { h, n });
    }
    Ok((&series[..n - h], &series[h..]))
}
