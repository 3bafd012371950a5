//! # Intro Sort
//!
//! Dual-pivot quick sort with two escape hatches: ranges of at most
//! `cutoff` elements go to insertion sort, and once the recursion depth
//! reaches `2 * floor(lg n)` the remaining range is heap sorted, bounding
//! the worst case at O(n log n).
//!
//! The cutoff comes from the Helper; 0 selects [`DEFAULT_CUTOFF`].

pub mod partition;
pub mod test;

pub use partition::{heap_sort, partition, Partition};

use std::marker::PhantomData;

use crate::config::Config;
use crate::helper::{BoxedHelper, Helper};
use crate::registry::SortRunner;
use crate::sort::insertion::insertion_sort;
use crate::sort::Sort;
use crate::utils::time_logger::Complexity;

pub const DEFAULT_CUTOFF: usize = 16;

pub struct IntroSort<X, H = BoxedHelper<X>> {
    helper: H,
    max_depth: usize,
    _element: PhantomData<fn(X)>,
}

impl<X: Clone, H: Helper<X>> IntroSort<X, H> {
    pub const DESCRIPTION: &'static str = "Intro sort";

    pub fn new(helper: H) -> Self {
        Self {
            helper,
            max_depth: 0,
            _element: PhantomData,
        }
    }

    pub fn cutoff(&self) -> usize {
        match self.helper.cutoff() {
            0 => DEFAULT_CUTOFF,
            cutoff => cutoff,
        }
    }

    /// Deepest recursion level reached by the last sort.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn sort_range(&mut self, xs: &mut [X], from: usize, to: usize, depth: usize, limit: usize) {
        self.max_depth = self.max_depth.max(depth);
        if to <= from + self.cutoff() {
            insertion_sort(&mut self.helper, xs, from, to);
            return;
        }
        if depth >= limit {
            tracing::trace!(from, to, depth, "depth limit reached, heap sorting");
            heap_sort(&mut self.helper, xs, from, to);
            return;
        }
        for range in partition(&mut self.helper, xs, from, to) {
            self.sort_range(xs, range.from, range.to, depth + 1, limit);
        }
    }
}

/// `floor(lg n)`, 0 for `n < 2`.
fn floor_lg(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        (usize::BITS - 1 - n.leading_zeros()) as usize
    }
}

impl<X: Clone, H: Helper<X>> Sort<X> for IntroSort<X, H> {
    fn description(&self) -> String {
        Self::DESCRIPTION.to_string()
    }

    fn helper(&self) -> &dyn Helper<X> {
        &self.helper
    }

    fn helper_mut(&mut self) -> &mut dyn Helper<X> {
        &mut self.helper
    }

    fn sort(&mut self, xs: &mut [X], from: usize, to: usize) {
        self.max_depth = 0;
        let limit = 2 * floor_lg(to.saturating_sub(from));
        self.sort_range(xs, from, to, 0, limit);
    }
}

pub struct IntroRunner;

impl SortRunner for IntroRunner {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn description(&self) -> &'static str {
        "Dual-pivot quick sort falling back to heap sort and insertion sort"
    }

    fn category(&self) -> &'static str {
        "linearithmic"
    }

    fn complexity(&self) -> Complexity {
        Complexity::NLogN
    }

    fn build(&self, helper: BoxedHelper<f64>, _config: &Config) -> Box<dyn Sort<f64>> {
        Box::new(IntroSort::new(helper))
    }
}
