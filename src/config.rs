//! Benchmark configuration.
//!
//! Loaded from TOML once, before any Helper is built. Every section is
//! optional; missing keys take their defaults.
//!
//! ```
//! use sort_instrument::config::Config;
//!
//! let config = Config::from_toml_str(r#"
//!     [helper]
//!     instrument = true
//!     seed = 42
//!
//!     [instrumenting]
//!     fixes = true
//! "#).unwrap();
//!
//! assert!(config.helper.instrument);
//! assert!(config.helper.checksorted);
//! assert_eq!(config.helper.seed, Some(42));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub helper: HelperConfig,

    #[serde(default)]
    pub instrumenting: InstrumentConfig,

    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

/// Flags read by the Helper factory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HelperConfig {
    /// Select the instrumenting Helper.
    #[serde(default)]
    pub instrument: bool,

    /// Verify sortedness in `post_process`.
    #[serde(default = "default_true")]
    pub checksorted: bool,

    /// Partition size below which hybrid sorts switch to insertion sort.
    /// Zero selects the algorithm's own default.
    #[serde(default)]
    pub cutoff: usize,

    /// Seed for generated arrays; wall-clock derived when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            instrument: false,
            checksorted: true,
            cutoff: 0,
            seed: None,
        }
    }
}

/// Switches for the metrics that cost more than a counter increment.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct InstrumentConfig {
    /// Account the inversions removed by every swap.
    #[serde(default)]
    pub fixes: bool,

    /// Count the inversions of each input before it is sorted.
    #[serde(default)]
    pub inversions: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BenchmarkConfig {
    /// Log inversions fixed by every Shell sort h-pass.
    #[serde(default)]
    pub trackinversions: bool,

    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,

    #[serde(default = "default_repetitions")]
    pub repetitions: usize,

    #[serde(default = "default_true")]
    pub warmup: bool,

    /// Pin the benchmarking thread to its current core while timing.
    #[serde(default)]
    pub pin: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            trackinversions: false,
            sizes: default_sizes(),
            repetitions: default_repetitions(),
            warmup: true,
            pin: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sizes() -> Vec<usize> {
    vec![1000, 2000, 4000]
}

fn default_repetitions() -> usize {
    100
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.benchmark.repetitions == 0 {
            return Err(ConfigError::Invalid(
                "benchmark.repetitions must be positive".to_string(),
            ));
        }
        if self.benchmark.sizes.is_empty() {
            return Err(ConfigError::Invalid(
                "benchmark.sizes must not be empty".to_string(),
            ));
        }
        if self.benchmark.sizes.contains(&0) {
            return Err(ConfigError::Invalid(
                "benchmark.sizes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a copy with instrumentation switched on or off.
    pub fn with_instrument(mut self, instrument: bool) -> Self {
        self.helper.instrument = instrument;
        self
    }

    pub fn with_check_sorted(mut self, check: bool) -> Self {
        self.helper.checksorted = check;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.helper.seed = Some(seed);
        self
    }

    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.helper.cutoff = cutoff;
        self
    }

    /// Enables (or disables) both fix and inversion accounting.
    pub fn with_inversion_tracking(mut self, track: bool) -> Self {
        self.instrumenting.fixes = track;
        self.instrumenting.inversions = track;
        self
    }

    pub fn with_track_inversions(mut self, track: bool) -> Self {
        self.benchmark.trackinversions = track;
        self
    }
}
