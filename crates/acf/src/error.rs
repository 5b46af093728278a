//! Error types for the chronos-acf crate.

/// Error type for all fallible operations in the chronos-acf crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AcfError {
    /// Returned when the input series is empty.
    #[error("input series is empty")]
    EmptyData,

    /// Returned when the requested lag does not leave any aligned pairs.
    #[error("lag {h} out of range for series of length {n}")]
    LagOutOfRange {
        /// The requested lag.
        h: usize,
        /// Length of the input series.
        n: usize,
    },

    /// Returned when the input series contains NaN or infinity.
    #[error("input series contains non-finite values")]
    NonFiniteData,

    /// Returned when the series is constant, so the autocorrelation
    /// denominator (the lag-0 autocovariance) vanishes.
    #[error("input series is constant (zero variance)")]
    ConstantData,
}
