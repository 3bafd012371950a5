//! Single-shot elapsed-time clock.

use std::time::Instant;

use super::timer::TimeUnit;

/// Reports whole time units between successive laps.
///
/// Closing a Stopwatch invalidates it: any later call is a programming error
/// and panics.
#[derive(Debug)]
pub struct Stopwatch {
    origin: Instant,
    start: Option<Instant>,
    units: TimeUnit,
}

impl Stopwatch {
    /// A Stopwatch counting milliseconds.
    pub fn new() -> Self {
        Self::with_units(TimeUnit::Milliseconds)
    }

    pub fn with_units(units: TimeUnit) -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            start: Some(now),
            units,
        }
    }

    pub fn units(&self) -> TimeUnit {
        self.units
    }

    /// Whole units elapsed since construction or the previous lap.
    ///
    /// Both readings are truncated to whole units before subtracting, so
    /// consecutive laps add up to the total.
    pub fn lap(&mut self) -> u64 {
        let lap_start = self.start.expect("Stopwatch is closed");
        let now = Instant::now();
        self.start = Some(now);
        self.reading(now) - self.reading(lap_start)
    }

    pub fn close(&mut self) {
        assert!(self.start.is_some(), "Stopwatch is closed");
        self.start = None;
    }

    pub fn is_closed(&self) -> bool {
        self.start.is_none()
    }

    fn reading(&self, at: Instant) -> u64 {
        self.units.whole(at.duration_since(self.origin))
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
