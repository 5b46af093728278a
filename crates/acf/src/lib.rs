//! # chronos-acf
//!
//! Sample autocovariance (AVF) and autocorrelation (ACF) estimation for
//! regularly spaced series, built on a borrowed lag view.
//!
//! All estimators are stateless single-pass computations over `&[f64]`,
//! accumulating in `f64`. The autocovariance divides by the full series
//! length `n` at every lag; the autocorrelation normalizes by the lag-0
//! autocovariance, so the convention cancels and `acf(s, 0) == 1` holds
//! exactly. Estimates are never clamped to `[-1, 1]`.
//!
//! ```
//! use chronos_acf::{acf, avf};
//!
//! let s = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(avf(&s, 0)?, 2.0);
//! assert_eq!(acf(&s, 1)?, 0.4);
//! # Ok::<(), chronos_acf::AcfError>(())
//! ```

mod error;
mod estimate;
mod lag;
mod series;

pub use error::AcfError;
pub use estimate::{acf, acf_profile, avf, mean, variance};
pub use lag::lag;
pub use series::TimeSeries;
