//! Utility modules for timing, benchmarking and CLI output.

pub mod affinity;
pub mod runner;
pub mod stopwatch;
pub mod time_logger;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use affinity::PinGuard;
pub use runner::{run_batch, run_benchmark, BenchmarkOutcome, BenchmarkSpec};
pub use stopwatch::Stopwatch;
pub use time_logger::{Complexity, TimeLogger};
pub use timer::{BenchmarkTimer, Repetition, TimeUnit, Timer, TimingConfig};

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
