use std::path::PathBuf;

use serde::Deserialize;

/// Top-level chronos configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChronosConfig {
    /// Global RNG seed. Unset means a fresh OS seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Output path for generated series.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Simulation settings.
    #[serde(default)]
    pub simulate: SimulateToml,
}

/// Settings for the `simulate` subcommand.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulateToml {
    /// Which synthetic process to generate.
    #[serde(default)]
    pub process: ProcessKind,

    /// Number of white-noise draws feeding the process.
    #[serde(default = "default_n")]
    pub n: usize,

    /// Centered window size for the moving-average process (odd).
    #[serde(default = "default_window")]
    pub window: usize,

    /// Intercept for the filtered-noise process.
    #[serde(default)]
    pub intercept: f64,

    /// Neighbour coefficient for the filtered-noise process.
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,

    /// Neighbour direction for the filtered-noise process.
    #[serde(default)]
    pub offset: OffsetToml,

    /// Per-step drift for the random-walk process.
    #[serde(default)]
    pub drift: f64,
}

impl Default for SimulateToml {
    fn default() -> Self {
        Self {
            process: ProcessKind::default(),
            n: default_n(),
            window: default_window(),
            intercept: 0.0,
            coefficient: default_coefficient(),
            offset: OffsetToml::default(),
            drift: 0.0,
        }
    }
}

fn default_n() -> usize {
    500
}
fn default_window() -> usize {
    3
}
fn default_coefficient() -> f64 {
    0.5
}

/// Synthetic process selector.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessKind {
    /// Independent standard normal draws.
    #[default]
    WhiteNoise,
    /// Centered moving average of white noise.
    MovingAverage,
    /// First-order filtered white noise.
    Autoregressive,
    /// Cumulative sum of white noise plus drift.
    RandomWalk,
}

/// Neighbour direction for the filtered-noise process.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetToml {
    /// Subtract the preceding noise value.
    Previous,
    /// Subtract the following noise value.
    #[default]
    Next,
}
