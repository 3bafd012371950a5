//! Logs benchmark times normalized by a theoretical complexity.

use std::fmt;

/// Growth functions used to normalize times across input sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Complexity {
    Linear,
    NLogN,
    NLogSquaredN,
    Quadratic,
    /// `n^e`
    Power(f64),
}

impl Complexity {
    /// The growth function at `n`. Logarithmic factors are taken at no less
    /// than `ln 2`, so sizes below 2 never yield zero.
    pub fn apply(self, n: usize) -> f64 {
        let lg = (n.max(2) as f64).ln();
        let n = n as f64;
        match self {
            Complexity::Linear => n,
            Complexity::NLogN => n * lg,
            Complexity::NLogSquaredN => n * lg * lg,
            Complexity::Quadratic => n * n,
            Complexity::Power(e) => n.powf(e),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Linear => f.write_str("n"),
            Complexity::NLogN => f.write_str("n log n"),
            Complexity::NLogSquaredN => f.write_str("n log^2 n"),
            Complexity::Quadratic => f.write_str("n^2"),
            Complexity::Power(e) => write!(f, "n^{}", e),
        }
    }
}

/// Emits `"{description}: {prefix} {time}"` at info level, where the time
/// is divided by the complexity of `n` and scaled by 10^6 when a complexity
/// is given.
#[derive(Debug, Clone)]
pub struct TimeLogger {
    prefix: String,
    complexity: Option<Complexity>,
}

impl TimeLogger {
    pub fn new(prefix: impl Into<String>, complexity: Option<Complexity>) -> Self {
        Self {
            prefix: prefix.into(),
            complexity,
        }
    }

    /// Raw times, no normalization.
    pub fn raw(prefix: impl Into<String>) -> Self {
        Self::new(prefix, None)
    }

    pub fn normalize(&self, time: f64, n: usize) -> f64 {
        match self.complexity {
            Some(complexity) => time / complexity.apply(n) * 1e6,
            None => time,
        }
    }

    pub fn format(&self, description: &str, time: f64, n: usize) -> String {
        format!("{}: {} {:.4}", description, self.prefix, self.normalize(time, n))
    }

    /// Logs and returns the normalized time.
    pub fn log(&self, description: &str, time: f64, n: usize) -> f64 {
        tracing::info!("{}", self.format(description, time, n));
        self.normalize(time, n)
    }
}
