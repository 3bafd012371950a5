//! Repeated-trial timing.
//!
//! [`Timer`] is a two-state machine (Running, Paused) that accumulates
//! running time and counts laps:
//!
//! - `lap()` counts a lap; Running only.
//! - `pause()` accumulates the elapsed time and stops, without counting a lap.
//! - `pause_and_lap()` does the same but counts the lap.
//! - `resume()` restarts the clock; Paused only.
//! - `mean_lap_time()` is the accumulated time over the lap count; Paused
//!   only, and only once a lap has been counted.
//!
//! Every misuse is an [`SortError`] rather than a panic, so a benchmark
//! driver can report it against the configuration that caused it.
//!
//! [`Timer::repeat_trials`] drives a [`Repetition`]: per iteration the input
//! is supplied and pre-processed while paused, the run is timed, and the
//! result is post-processed while paused again.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::error::{Result, SortError};
use crate::utils::affinity::PinGuard;

/// Units for reporting elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Nanoseconds per unit.
    pub fn factor(self) -> u128 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
        }
    }

    /// `duration` in this unit, fractional.
    pub fn convert(self, duration: Duration) -> f64 {
        duration.as_nanos() as f64 / self.factor() as f64
    }

    /// `duration` in whole units, truncated.
    pub fn whole(self, duration: Duration) -> u64 {
        (duration.as_nanos() / self.factor()) as u64
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "nanoseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            "microseconds" => Ok(TimeUnit::Microseconds),
            "milliseconds" => Ok(TimeUnit::Milliseconds),
            "seconds" => Ok(TimeUnit::Seconds),
            other => Err(SortError::precondition(format!("invalid time units: {}", other))),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running { since: Instant },
    Paused,
}

#[derive(Debug)]
pub struct Timer {
    ticks: Duration,
    laps: u32,
    lap_start: Instant,
    state: State,
}

impl Timer {
    /// A new Timer, already running.
    pub fn new() -> Self {
        let now = Instant::now();
        tracing::trace!("create new timer");
        Self {
            ticks: Duration::ZERO,
            laps: 0,
            lap_start: now,
            state: State::Running { since: now },
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// Counts a lap and returns the time since the previous lap started.
    pub fn lap(&mut self) -> Result<Duration> {
        if !self.is_running() {
            return Err(SortError::TimerNotRunning);
        }
        let now = Instant::now();
        let lap = now.duration_since(self.lap_start);
        self.lap_start = now;
        self.laps += 1;
        tracing::trace!(laps = self.laps, "lap");
        Ok(lap)
    }

    pub fn pause_and_lap(&mut self) -> Result<()> {
        let since = match self.state {
            State::Running { since } => since,
            State::Paused => return Err(SortError::TimerNotRunning),
        };
        self.lap()?;
        self.ticks += since.elapsed();
        self.state = State::Paused;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        self.pause_and_lap()?;
        self.laps -= 1;
        tracing::trace!("pause timer");
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(SortError::TimerRunning);
        }
        let now = Instant::now();
        self.lap_start = now;
        self.state = State::Running { since: now };
        Ok(())
    }

    /// Counts a final lap, pauses and returns the mean lap time in millis.
    pub fn stop(&mut self) -> Result<f64> {
        self.pause_and_lap()?;
        tracing::trace!("stop timer");
        self.mean_lap_time()
    }

    pub fn mean_lap_time(&self) -> Result<f64> {
        self.mean_lap_time_in(TimeUnit::Milliseconds)
    }

    pub fn mean_lap_time_in(&self, unit: TimeUnit) -> Result<f64> {
        if self.is_running() {
            return Err(SortError::TimerRunning);
        }
        if self.laps == 0 {
            return Err(SortError::NoLaps);
        }
        Ok(unit.convert(self.ticks) / self.laps as f64)
    }

    /// Total accumulated running time in millis.
    pub fn millis(&self) -> Result<f64> {
        if self.is_running() {
            return Err(SortError::TimerRunning);
        }
        Ok(TimeUnit::Milliseconds.convert(self.ticks))
    }

    /// Runs `repetition` `n` times and returns the mean lap time in millis.
    ///
    /// The Timer must be running on entry and is running again on return.
    /// `warmup` only silences progress logging.
    pub fn repeat_trials<R: Repetition>(
        &mut self,
        n: usize,
        warmup: bool,
        repetition: &mut R,
    ) -> Result<f64> {
        if n == 0 {
            return Err(SortError::precondition("repeat: number of runs must be positive"));
        }
        self.pause()?;
        tracing::trace!(runs = n, warmup, "repeat");
        let mut last_decile = None;
        for i in 0..n {
            let input = repetition.supply()?;
            let mut input = repetition.pre(input);
            self.resume()?;
            let output = repetition.run(&mut input);
            self.pause_and_lap()?;
            repetition.post(&input, output)?;

            if !warmup {
                let decile = (i + 1) * 10 / n;
                if last_decile != Some(decile) {
                    tracing::trace!(done = decile * 10, "repeat progress (%)");
                    last_decile = Some(decile);
                }
            }
        }
        let mean = self.mean_lap_time()?;
        self.resume()?;
        Ok(mean)
    }

    /// Closure form of [`Timer::repeat_trials`] with no pre/post steps.
    pub fn repeat<T, U, S, F>(
        &mut self,
        n: usize,
        warmup: bool,
        supplier: S,
        function: F,
    ) -> Result<f64>
    where
        S: FnMut() -> T,
        F: FnMut(&mut T) -> U,
    {
        let mut closures = Closures {
            supplier,
            function,
            _io: PhantomData,
        };
        self.repeat_trials(n, warmup, &mut closures)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Timer{{ticks={}, laps={}, running={}}}",
            self.ticks.as_nanos(),
            self.laps,
            self.is_running()
        )
    }
}

/// One timed unit of work for [`Timer::repeat_trials`].
pub trait Repetition {
    type Input;
    type Output;

    /// Produces the input for one run; not timed.
    fn supply(&mut self) -> Result<Self::Input>;

    /// Prepares the input; not timed.
    fn pre(&mut self, input: Self::Input) -> Self::Input {
        input
    }

    /// The timed work.
    fn run(&mut self, input: &mut Self::Input) -> Self::Output;

    /// Checks the run; not timed.
    fn post(&mut self, _input: &Self::Input, _output: Self::Output) -> Result<()> {
        Ok(())
    }

    /// Called by [`BenchmarkTimer`] between the warmup and measured runs.
    fn after_warmup(&mut self) {}
}

struct Closures<T, U, S, F> {
    supplier: S,
    function: F,
    _io: PhantomData<fn(T) -> U>,
}

impl<T, U, S, F> Repetition for Closures<T, U, S, F>
where
    S: FnMut() -> T,
    F: FnMut(&mut T) -> U,
{
    type Input = T;
    type Output = U;

    fn supply(&mut self) -> Result<T> {
        Ok((self.supplier)())
    }

    fn run(&mut self, input: &mut T) -> U {
        (self.function)(input)
    }
}

/// Configuration for a [`BenchmarkTimer`].
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Measured runs (default: 100)
    pub runs: usize,
    /// Discarded runs before measuring (default: 10)
    pub warmup_runs: usize,
    /// Pin the thread to its current core while measuring (default: false)
    pub pin: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            warmup_runs: 10,
            pin: false,
        }
    }
}

/// Warmup on a throwaway [`Timer`], then measure on a fresh one.
pub struct BenchmarkTimer {
    description: String,
    config: TimingConfig,
}

impl BenchmarkTimer {
    pub fn new(description: impl Into<String>, config: TimingConfig) -> Self {
        Self {
            description: description.into(),
            config,
        }
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// Returns the mean time of the measured runs in millis.
    pub fn run<R: Repetition>(&self, repetition: &mut R) -> Result<f64> {
        let _pin = self.config.pin.then(PinGuard::new);
        if self.config.warmup_runs > 0 {
            Timer::new().repeat_trials(self.config.warmup_runs, true, repetition)?;
            repetition.after_warmup();
        }
        let mean = Timer::new().repeat_trials(self.config.runs, false, repetition)?;
        tracing::debug!(
            benchmark = %self.description,
            runs = self.config.runs,
            mean_millis = mean,
            "benchmark complete"
        );
        Ok(mean)
    }
}
