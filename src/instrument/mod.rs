//! Operation counting.
//!
//! An [`Instrumenter`] is a plain bank of counters owned by one instrumenting
//! Helper. It knows nothing about sorting; the Helper decides which counter a
//! primitive touches. At the end of each trial the Helper takes a
//! [`Snapshot`] and hands it to a [`StatPack`].

pub mod stat_pack;

pub use stat_pack::{StatPack, Statistics};

use std::fmt;

/// The seven counted quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Compares,
    Swaps,
    Hits,
    Lookups,
    Copies,
    Inversions,
    Fixes,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Compares,
        Metric::Swaps,
        Metric::Hits,
        Metric::Lookups,
        Metric::Copies,
        Metric::Inversions,
        Metric::Fixes,
    ];

    /// Metrics that cost nothing beyond an increment and are always recorded.
    pub const CHEAP: [Metric; 5] = [
        Metric::Compares,
        Metric::Swaps,
        Metric::Hits,
        Metric::Lookups,
        Metric::Copies,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Metric::Compares => "compares",
            Metric::Swaps => "swaps",
            Metric::Hits => "hits",
            Metric::Lookups => "lookups",
            Metric::Copies => "copies",
            Metric::Inversions => "inversions",
            Metric::Fixes => "fixes",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable copy of the counters at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub compares: u64,
    pub swaps: u64,
    pub hits: u64,
    pub lookups: u64,
    pub copies: u64,
    pub inversions: u64,
    pub fixes: u64,
}

impl Snapshot {
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Compares => self.compares,
            Metric::Swaps => self.swaps,
            Metric::Hits => self.hits,
            Metric::Lookups => self.lookups,
            Metric::Copies => self.copies,
            Metric::Inversions => self.inversions,
            Metric::Fixes => self.fixes,
        }
    }
}

/// Counter bank. Counts only go up until [`Instrumenter::reset`].
#[derive(Clone, Debug, Default)]
pub struct Instrumenter {
    counts: Snapshot,
}

impl Instrumenter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_compare(&mut self) {
        self.counts.compares = self.counts.compares.saturating_add(1);
    }

    #[inline]
    pub fn record_swap(&mut self) {
        self.counts.swaps = self.counts.swaps.saturating_add(1);
    }

    #[inline]
    pub fn record_hit(&mut self) {
        self.counts.hits = self.counts.hits.saturating_add(1);
    }

    #[inline]
    pub fn record_hits(&mut self, count: u64) {
        self.counts.hits = self.counts.hits.saturating_add(count);
    }

    #[inline]
    pub fn record_lookup(&mut self) {
        self.counts.lookups = self.counts.lookups.saturating_add(1);
    }

    #[inline]
    pub fn record_copy(&mut self) {
        self.counts.copies = self.counts.copies.saturating_add(1);
    }

    pub fn record_inversions(&mut self, count: u64) {
        self.counts.inversions = self.counts.inversions.saturating_add(count);
    }

    pub fn record_fixes(&mut self, count: u64) {
        self.counts.fixes = self.counts.fixes.saturating_add(count);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.counts
    }

    /// Clears every counter for the next trial.
    pub fn reset(&mut self) {
        self.counts = Snapshot::default();
    }
}

impl fmt::Display for Instrumenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Metric::ALL
            .iter()
            .map(|m| format!("{}: {}", m, self.counts.get(*m)))
            .collect();
        write!(f, "Instrumenter {{{}}}", parts.join(", "))
    }
}
