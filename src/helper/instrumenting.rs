//! Helper that counts every primitive.
//!
//! | primitive                 | compares | swaps | hits | lookups | copies |
//! |---------------------------|----------|-------|------|---------|--------|
//! | `compare`/`less`/`inverted` | 1      |       |      |         |        |
//! | `get`                     |          |       | 1    |         |        |
//! | `set`                     |          |       |      |         | 1      |
//! | `copy`                    |          |       | 1    |         | 1      |
//! | `swap`                    |          | 1     | 2    |         |        |
//! | `swap_conditional`        | 1        | 0/1   | 2    |         |        |
//! | `swap_conditional_with`   | 1        | 0/1   | 1    | 1       |        |
//! | `sort_pair`               | 1        | 0/1   | 2/4  | 2       |        |
//! | `sort_trio`               | 2/3      | 0..3  | 3+2s | 3       |        |
//!
//! `swap_conditional_with` compares one value the caller has just read with
//! one it carried from an earlier read, so the pair costs a hit and a lookup.
//! `sort_pair` and `sort_trio` read each element once (hit and lookup) and
//! charge two hits per swap.
//!
//! Fixes (when enabled) are the net inversions removed during the trial.
//! Every swap contributes its exact effect on the inversion count, which may
//! be negative, so the running total is kept signed and flushed into the
//! counter bank when the trial is recorded. Comparisons made for this
//! accounting go straight to the comparator and are not counted.

use std::cmp::Ordering;
use std::fmt;

use rand::rngs::StdRng;

use super::{check_small_range, swap_fixes, Comparator, Helper, HelperCore};
use crate::config::Config;
use crate::error::Result;
use crate::instrument::{Instrumenter, Metric, Snapshot, StatPack};

pub struct InstrumentingHelper<X> {
    core: HelperCore<X>,
    instrumenter: Instrumenter,
    stat_pack: StatPack,
    count_fixes: bool,
    count_inversions: bool,
    net_fixes: i64,
}

impl<X: Clone> InstrumentingHelper<X> {
    pub fn new(
        description: &str,
        comparator: Comparator<X>,
        n: usize,
        seed: u64,
        config: &Config,
    ) -> Self {
        Self {
            core: HelperCore::new(description, comparator, n, seed, &config.helper),
            instrumenter: Instrumenter::new(),
            stat_pack: StatPack::new(),
            count_fixes: config.instrumenting.fixes,
            count_inversions: config.instrumenting.inversions,
            net_fixes: 0,
        }
    }

    /// Metrics recorded into the StatPack at the end of each trial.
    pub fn recorded_metrics(&self) -> Vec<Metric> {
        let mut metrics = Metric::CHEAP.to_vec();
        if self.count_inversions {
            metrics.push(Metric::Inversions);
        }
        if self.count_fixes {
            metrics.push(Metric::Fixes);
        }
        metrics
    }

    fn trial_snapshot(&self) -> Snapshot {
        let mut snapshot = self.instrumenter.snapshot();
        snapshot.fixes = snapshot.fixes.saturating_add(self.net_fixes.max(0) as u64);
        snapshot
    }

    fn reset_trial(&mut self) {
        self.instrumenter.reset();
        self.net_fixes = 0;
    }

    /// Reads `xs[i]` into a value held by a small-range primitive.
    fn read(&mut self, xs: &[X], i: usize) -> X {
        self.instrumenter.record_hit();
        self.instrumenter.record_lookup();
        xs[i].clone()
    }

    fn account_swap(&mut self, xs: &[X], i: usize, j: usize) {
        if self.count_fixes {
            self.net_fixes += swap_fixes(xs, i, j, &*self.core.comparator);
        }
        self.instrumenter.record_swap();
    }
}

impl<X: Clone> Helper<X> for InstrumentingHelper<X> {
    fn description(&self) -> &str {
        &self.core.description
    }

    fn instrumented(&self) -> bool {
        true
    }

    fn size(&self) -> usize {
        self.core.n
    }

    fn init(&mut self, n: usize) {
        self.core.n = n;
        self.reset_trial();
        self.stat_pack.clear();
    }

    fn cutoff(&self) -> usize {
        self.core.cutoff
    }

    fn compare(&mut self, v: &X, w: &X) -> Ordering {
        self.instrumenter.record_compare();
        self.core.compare(v, w)
    }

    fn get(&mut self, xs: &[X], i: usize) -> X {
        self.instrumenter.record_hit();
        xs[i].clone()
    }

    fn set(&mut self, xs: &mut [X], i: usize, x: X) {
        self.instrumenter.record_copy();
        xs[i] = x;
    }

    fn copy(&mut self, xs: &mut [X], from: usize, to: usize) {
        self.instrumenter.record_hit();
        self.instrumenter.record_copy();
        xs[to] = xs[from].clone();
    }

    fn swap(&mut self, xs: &mut [X], i: usize, j: usize) {
        self.instrumenter.record_hits(2);
        self.account_swap(xs, i, j);
        xs.swap(i, j);
    }

    fn swap_conditional(&mut self, xs: &mut [X], i: usize, j: usize) -> bool {
        self.instrumenter.record_hits(2);
        self.instrumenter.record_compare();
        let out_of_order = self.core.compare(&xs[i], &xs[j]) == Ordering::Greater;
        if out_of_order {
            self.account_swap(xs, i, j);
            xs.swap(i, j);
        }
        out_of_order
    }

    fn swap_conditional_with(&mut self, xs: &mut [X], v: &X, i: usize, j: usize, w: &X) -> bool {
        self.instrumenter.record_hit();
        self.instrumenter.record_lookup();
        self.instrumenter.record_compare();
        let out_of_order = self.core.compare(v, w) == Ordering::Greater;
        if out_of_order {
            self.account_swap(xs, i, j);
            xs[i] = w.clone();
            xs[j] = v.clone();
        }
        out_of_order
    }

    fn sort_pair(&mut self, xs: &mut [X], from: usize, to: usize) {
        check_small_range("sort_pair", from, to, 2);
        let v = self.read(xs, from);
        let w = self.read(xs, from + 1);
        if self.inverted(&v, &w) {
            self.swap(xs, from, from + 1);
        }
    }

    fn sort_trio(&mut self, xs: &mut [X], from: usize, to: usize) {
        check_small_range("sort_trio", from, to, 3);
        let mut a = self.read(xs, from);
        let mut b = self.read(xs, from + 1);
        let mut c = self.read(xs, from + 2);
        let first = self.inverted(&a, &b);
        if first {
            self.swap(xs, from, from + 1);
            std::mem::swap(&mut a, &mut b);
        }
        let second = self.inverted(&b, &c);
        if second {
            self.swap(xs, from + 1, from + 2);
            std::mem::swap(&mut b, &mut c);
        }
        if (first || second) && self.inverted(&a, &b) {
            self.swap(xs, from, from + 1);
        }
    }

    fn record_fixes(&mut self, count: u64) {
        if self.count_fixes {
            self.net_fixes = self.net_fixes.saturating_add(count as i64);
        }
    }

    fn tracks_fixes(&self) -> bool {
        self.count_fixes
    }

    fn inversions(&self, xs: &[X]) -> u64 {
        self.core.inversions(xs)
    }

    fn is_sorted(&self, xs: &[X]) -> bool {
        self.core.is_sorted(xs)
    }

    fn random_of(
        &mut self,
        count: usize,
        generator: &mut dyn FnMut(&mut StdRng) -> X,
    ) -> Result<Vec<X>> {
        self.core.random_of(count, generator)
    }

    fn pre_process(&mut self, xs: &[X]) {
        if self.count_inversions {
            let inversions = self.core.inversions(xs);
            self.instrumenter.record_inversions(inversions);
        }
    }

    fn post_process(&mut self, xs: &[X]) -> Result<()> {
        if let Err(e) = self.core.check(xs) {
            self.reset_trial();
            return Err(e);
        }
        let snapshot = self.trial_snapshot();
        let metrics = self.recorded_metrics();
        self.stat_pack.record(&snapshot, &metrics);
        tracing::debug!(helper = %self.core.description, ?snapshot, "trial recorded");
        self.reset_trial();
        Ok(())
    }

    fn snapshot(&self) -> Option<Snapshot> {
        Some(self.trial_snapshot())
    }

    fn stat_pack(&self) -> Option<&StatPack> {
        Some(&self.stat_pack)
    }

    fn close(&mut self) {
        if !self.stat_pack.is_empty() {
            tracing::debug!(helper = %self.core.description, "{}", self.stat_pack);
        }
    }
}

impl<X: Clone> fmt::Display for InstrumentingHelper<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.core.describe(true))
    }
}
