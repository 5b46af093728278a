//! # chronos-simulate
//!
//! Synthetic time-series generators: Gaussian white noise, centered
//! moving-average smoothing, first-order noise filtering, and random walks
//! with drift.
//!
//! Every generator is a pure function of its arguments. Randomness enters
//! only through an explicitly seeded generator, never a process-global RNG,
//! so the same inputs always produce the same output.
//!
//! The generators compose left to right: white noise feeds the smoother,
//! the filter, and the walk.
//!
//! ```
//! use chronos_simulate::{moving_average, random_walk, white_noise};
//!
//! let noise = white_noise(500, 42)?;
//! let smoothed = moving_average(&noise, 3)?;
//! assert_eq!(smoothed.len(), 498);
//!
//! let trending = random_walk(&noise, 0.2)?;
//! assert_eq!(trending.len(), 500);
//! # Ok::<(), chronos_simulate::SimulateError>(())
//! ```

mod error;
mod filter;
mod noise;
mod smooth;
mod walk;

pub use error::SimulateError;
pub use filter::{NoiseOffset, autoregressive};
pub use noise::{white_noise, white_noise_from};
pub use smooth::moving_average;
pub use walk::random_walk;
