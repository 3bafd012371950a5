//! Per-metric observations across repeated trials.

use std::collections::BTreeMap;
use std::fmt;

use super::{Metric, Snapshot};
use crate::error::{Result, SortError};

/// Summary of one metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    /// Sample variance (n - 1 denominator, zero for a single observation).
    pub variance: f64,
    pub std_dev: f64,
}

impl Statistics {
    fn from_observations(values: &[f64]) -> Self {
        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / (count - 1).max(1) as f64;

        Self {
            count,
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }
}

/// Named sequences of observations, one value per completed trial.
#[derive(Clone, Debug, Default)]
pub struct StatPack {
    observations: BTreeMap<String, Vec<f64>>,
}

impl StatPack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observation(&mut self, metric: &str, value: f64) {
        self.observations
            .entry(metric.to_string())
            .or_default()
            .push(value);
    }

    /// Adds one trial: an observation for each of `metrics` taken from
    /// `snapshot`.
    pub fn record(&mut self, snapshot: &Snapshot, metrics: &[Metric]) {
        for metric in metrics {
            self.add_observation(metric.name(), snapshot.get(*metric) as f64);
        }
    }

    /// # Errors
    ///
    /// [`SortError::EmptyStatistics`] if `metric` has no observations.
    pub fn statistics(&self, metric: &str) -> Result<Statistics> {
        match self.observations.get(metric) {
            Some(values) if !values.is_empty() => Ok(Statistics::from_observations(values)),
            _ => Err(SortError::EmptyStatistics(metric.to_string())),
        }
    }

    pub fn mean(&self, metric: Metric) -> Result<f64> {
        self.statistics(metric.name()).map(|s| s.mean)
    }

    pub fn count(&self, metric: &str) -> usize {
        self.observations.get(metric).map_or(0, Vec::len)
    }

    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.observations.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn clear(&mut self) {
        self.observations.clear();
    }
}

impl fmt::Display for StatPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatPack {{")?;
        for (i, (name, values)) in self.observations.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            let stats = Statistics::from_observations(values);
            write!(
                f,
                " {}: mean={:.2}; stdDev={:.2}; n={}",
                name, stats.mean, stats.std_dev, stats.count
            )?;
        }
        write!(f, " }}")
    }
}
