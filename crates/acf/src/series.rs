//! Validated time-series wrapper.

use crate::error::AcfError;

/// A validated, regularly spaced time series of finite `f64` values.
///
/// Wraps a `Vec<f64>` and guarantees:
/// - length >= 1
/// - all values are finite (no NaN or infinity)
///
/// The estimators themselves operate on plain slices; this wrapper is the
/// boundary type for callers bringing in unchecked data, so that estimation
/// never sees a NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a new `TimeSeries` after validating the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`AcfError::EmptyData`] | `values` is empty |
    /// | [`AcfError::NonFiniteData`] | any element is NaN or infinite |
    pub fn new(values: Vec<f64>) -> Result<Self, AcfError> {
        if values.is_empty() {
            return Err(AcfError::EmptyData);
        }
        if !values.iter().all(|v| v.is_finite()) {
            return Err(AcfError::NonFiniteData);
        }
        Ok(Self { values })
    }

    /// Returns the observations as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no observations.
    ///
    /// Note: a valid `TimeSeries` is never empty (minimum length is 1).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the wrapper and returns the underlying values.
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
