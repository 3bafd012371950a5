//! Error taxonomy for sorting, statistics and timing.

use thiserror::Error;

use crate::config::ConfigError;

/// Broad classification of a [`SortError`].
///
/// Callers running batches use this to tell a misused API apart from an
/// algorithm that produced unsorted output, and both apart from a metric
/// that simply was never exercised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller broke a precondition (bad counts, wrong timer state, ...).
    Precondition,
    /// A sort finished but its output failed the sortedness check.
    Consistency,
    /// Statistics were requested for a metric with no observations.
    EmptyStatistics,
}

#[derive(Debug, Error)]
pub enum SortError {
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("timer is running: it must be paused first")]
    TimerRunning,

    #[error("timer is not running")]
    TimerNotRunning,

    #[error("timer has no laps")]
    NoLaps,

    #[error("unknown sort algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("{description}: array is not sorted")]
    NotSorted { description: String },

    #[error("no observations recorded for metric '{0}'")]
    EmptyStatistics(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SortError {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotSorted { .. } => ErrorKind::Consistency,
            Self::EmptyStatistics(_) => ErrorKind::EmptyStatistics,
            Self::Precondition(_)
            | Self::TimerRunning
            | Self::TimerNotRunning
            | Self::NoLaps
            | Self::UnknownAlgorithm(_)
            | Self::Config(_) => ErrorKind::Precondition,
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
