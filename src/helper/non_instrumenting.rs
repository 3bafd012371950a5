//! Helper that executes primitives directly.

use std::cmp::Ordering;
use std::fmt;

use rand::rngs::StdRng;

use super::{check_small_range, Comparator, Helper, HelperCore};
use crate::config::Config;
use crate::error::Result;
use crate::instrument::{Snapshot, StatPack};

pub struct NonInstrumentingHelper<X> {
    core: HelperCore<X>,
}

impl<X: Clone> NonInstrumentingHelper<X> {
    pub fn new(
        description: &str,
        comparator: Comparator<X>,
        n: usize,
        seed: u64,
        config: &Config,
    ) -> Self {
        Self {
            core: HelperCore::new(description, comparator, n, seed, &config.helper),
        }
    }

    /// A Helper with default configuration, for sorting outside benchmarks.
    pub fn with_comparator(description: &str, comparator: Comparator<X>) -> Self {
        Self::new(description, comparator, 0, 0, &Config::default())
    }
}

impl<X: Clone> Helper<X> for NonInstrumentingHelper<X> {
    fn description(&self) -> &str {
        &self.core.description
    }

    fn instrumented(&self) -> bool {
        false
    }

    fn size(&self) -> usize {
        self.core.n
    }

    fn init(&mut self, n: usize) {
        self.core.n = n;
    }

    fn cutoff(&self) -> usize {
        self.core.cutoff
    }

    #[inline]
    fn compare(&mut self, v: &X, w: &X) -> Ordering {
        self.core.compare(v, w)
    }

    #[inline]
    fn get(&mut self, xs: &[X], i: usize) -> X {
        xs[i].clone()
    }

    #[inline]
    fn set(&mut self, xs: &mut [X], i: usize, x: X) {
        xs[i] = x;
    }

    #[inline]
    fn copy(&mut self, xs: &mut [X], from: usize, to: usize) {
        xs[to] = xs[from].clone();
    }

    #[inline]
    fn swap(&mut self, xs: &mut [X], i: usize, j: usize) {
        xs.swap(i, j);
    }

    #[inline]
    fn swap_conditional(&mut self, xs: &mut [X], i: usize, j: usize) -> bool {
        let out_of_order = self.core.compare(&xs[i], &xs[j]) == Ordering::Greater;
        if out_of_order {
            xs.swap(i, j);
        }
        out_of_order
    }

    #[inline]
    fn swap_conditional_with(&mut self, xs: &mut [X], v: &X, i: usize, j: usize, w: &X) -> bool {
        let out_of_order = self.core.compare(v, w) == Ordering::Greater;
        if out_of_order {
            xs[i] = w.clone();
            xs[j] = v.clone();
        }
        out_of_order
    }

    fn sort_pair(&mut self, xs: &mut [X], from: usize, to: usize) {
        check_small_range("sort_pair", from, to, 2);
        self.swap_conditional(xs, from, from + 1);
    }

    fn sort_trio(&mut self, xs: &mut [X], from: usize, to: usize) {
        check_small_range("sort_trio", from, to, 3);
        let first = self.swap_conditional(xs, from, from + 1);
        let second = self.swap_conditional(xs, from + 1, from + 2);
        if first || second {
            self.swap_conditional(xs, from, from + 1);
        }
    }

    fn record_fixes(&mut self, _count: u64) {}

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

    fn pre_process(&mut self, _xs: &[X]) {}

    fn post_process(&mut self, xs: &[X]) -> Result<()> {
        self.core.check(xs)
    }

    fn snapshot(&self) -> Option<Snapshot> {
        None
    }

    fn stat_pack(&self) -> Option<&StatPack> {
        None
    }
}

impl<X: Clone> fmt::Display for NonInstrumentingHelper<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.core.describe(false))
    }
}
