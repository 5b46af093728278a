//! Error types for the chronos-simulate crate.

/// Error type for all fallible operations in the chronos-simulate crate.
///
/// Every generator validates its arguments up front and fails before
/// producing any output; there are no partial results.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimulateError {
    /// Returned when a generator is asked for a zero-length sequence.
    #[error("requested sequence length is zero")]
    ZeroLength,

    /// Returned when the input series is shorter than the operation needs.
    #[error("input series too short: got {n} values, need at least {min}")]
    TooShort {
        /// Number of values provided.
        n: usize,
        /// Minimum number of values required.
        min: usize,
    },

    /// Returned when the smoothing window is zero.
    #[error("window size must be at least 1")]
    WindowZero,

    /// Returned when the smoothing window is even, so it has no centre element.
    #[error("window size must be odd, got {window}")]
    WindowEven {
        /// The offending window size.
        window: usize,
    },

    /// Returned when the smoothing window is larger than the series.
    #[error("window size {window} exceeds series length {n}")]
    WindowExceedsData {
        /// The requested window size.
        window: usize,
        /// Length of the input series.
        n: usize,
    },
}
