//! The Helper abstraction every sort algorithm is written against.
//!
//! Sorts never compare, read or exchange elements directly; they go through
//! a [`Helper`]. Two implementations exist:
//!
//! - [`NonInstrumentingHelper`]: primitives run directly, nothing is counted.
//! - [`InstrumentingHelper`]: every primitive also bumps an
//!   [`Instrumenter`](crate::instrument::Instrumenter) counter, and each
//!   trial is folded into a [`StatPack`] by `post_process`.
//!
//! Which one a sort gets is decided by [`create`] from the configuration, so
//! the same algorithm code yields either fast sorting or exact operation
//! counts.

pub mod instrumenting;
pub mod non_instrumenting;

pub use instrumenting::InstrumentingHelper;
pub use non_instrumenting::NonInstrumentingHelper;

use std::cmp::Ordering;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, HelperConfig};
use crate::error::{Result, SortError};
use crate::instrument::{Snapshot, StatPack};
use crate::utils::time_seed;

/// Total order over elements. Shared so a Helper can be re-created for a new
/// size without rebuilding the comparator.
pub type Comparator<X> = Rc<dyn Fn(&X, &X) -> Ordering>;

pub type BoxedHelper<X> = Box<dyn Helper<X>>;

/// Natural ordering of an `Ord` type.
pub fn natural_order<X: Ord + 'static>() -> Comparator<X> {
    Rc::new(|a: &X, b: &X| a.cmp(b))
}

/// IEEE total ordering for `f64`, the element type used by the benchmarks.
pub fn f64_order() -> Comparator<f64> {
    Rc::new(|a: &f64, b: &f64| a.total_cmp(b))
}

pub trait Helper<X: Clone> {
    fn description(&self) -> &str;

    /// Whether primitives are being counted.
    fn instrumented(&self) -> bool;

    /// Number of elements this Helper is set up for.
    fn size(&self) -> usize;

    /// Prepares for a new problem size, clearing counters and statistics.
    fn init(&mut self, n: usize);

    /// Partition size under which hybrid sorts fall back to insertion sort
    /// (0 = use the algorithm's default).
    fn cutoff(&self) -> usize;

    fn compare(&mut self, v: &X, w: &X) -> Ordering;

    /// `v < w`
    fn less(&mut self, v: &X, w: &X) -> bool {
        self.compare(v, w) == Ordering::Less
    }

    /// `v > w`, i.e. the pair is out of order.
    fn inverted(&mut self, v: &X, w: &X) -> bool {
        self.compare(v, w) == Ordering::Greater
    }

    /// Reads `xs[i]`.
    fn get(&mut self, xs: &[X], i: usize) -> X;

    /// Writes a value the caller already holds into `xs[i]`.
    fn set(&mut self, xs: &mut [X], i: usize, x: X);

    /// `xs[to] = xs[from]`
    fn copy(&mut self, xs: &mut [X], from: usize, to: usize);

    fn swap(&mut self, xs: &mut [X], i: usize, j: usize);

    /// Swaps `xs[i]` and `xs[j]` (`i < j`) iff they are out of order.
    /// Returns whether a swap happened.
    fn swap_conditional(&mut self, xs: &mut [X], i: usize, j: usize) -> bool;

    /// [`Helper::swap_conditional`] on the adjacent pair `(j - 1, j)`.
    fn swap_stable_conditional(&mut self, xs: &mut [X], j: usize) -> bool {
        self.swap_conditional(xs, j - 1, j)
    }

    /// Like [`Helper::swap_conditional`] but compares the values `v` and `w`
    /// the caller already holds for `xs[i]` and `xs[j]`, so nothing is
    /// re-read.
    fn swap_conditional_with(&mut self, xs: &mut [X], v: &X, i: usize, j: usize, w: &X) -> bool;

    /// Sorts the two elements of `xs[from..to]`.
    ///
    /// # Panics
    ///
    /// If the range does not hold exactly two elements.
    fn sort_pair(&mut self, xs: &mut [X], from: usize, to: usize);

    /// Sorts the three elements of `xs[from..to]` with at most three
    /// compares: two when they are already in order.
    ///
    /// # Panics
    ///
    /// If the range does not hold exactly three elements.
    fn sort_trio(&mut self, xs: &mut [X], from: usize, to: usize);

    /// Reports inversions removed by an algorithm that moves elements
    /// without swapping them.
    fn record_fixes(&mut self, count: u64);

    /// Whether fixes are being accounted; algorithms that report fixes in
    /// bulk can skip the work otherwise.
    fn tracks_fixes(&self) -> bool {
        false
    }

    /// Number of out-of-order pairs. Never counted.
    fn inversions(&self, xs: &[X]) -> u64;

    /// Never counted.
    fn is_sorted(&self, xs: &[X]) -> bool;

    /// Generates [`Helper::size`] elements.
    fn random(&mut self, generator: &mut dyn FnMut(&mut StdRng) -> X) -> Result<Vec<X>> {
        let n = self.size();
        self.random_of(n, generator)
    }

    /// Generates `count` elements from the Helper's seeded generator.
    ///
    /// # Errors
    ///
    /// Precondition failure if `count` is zero.
    fn random_of(
        &mut self,
        count: usize,
        generator: &mut dyn FnMut(&mut StdRng) -> X,
    ) -> Result<Vec<X>>;

    /// Called with the input of a trial before it is sorted.
    fn pre_process(&mut self, xs: &[X]);

    /// Called with the output of a trial.
    ///
    /// # Errors
    ///
    /// [`SortError::NotSorted`] when sortedness checking is enabled and `xs`
    /// is not sorted. The trial is then discarded.
    fn post_process(&mut self, xs: &[X]) -> Result<()>;

    /// Counts of the trial in progress; `None` when not instrumented.
    fn snapshot(&self) -> Option<Snapshot>;

    /// Statistics of completed trials; `None` when not instrumented.
    fn stat_pack(&self) -> Option<&StatPack>;

    /// Releases the Helper at the end of a benchmark.
    fn close(&mut self) {}
}

impl<X: Clone, H: Helper<X> + ?Sized> Helper<X> for Box<H> {
    fn description(&self) -> &str {
        (**self).description()
    }

    fn instrumented(&self) -> bool {
        (**self).instrumented()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn init(&mut self, n: usize) {
        (**self).init(n)
    }

    fn cutoff(&self) -> usize {
        (**self).cutoff()
    }

    fn compare(&mut self, v: &X, w: &X) -> Ordering {
        (**self).compare(v, w)
    }

    fn less(&mut self, v: &X, w: &X) -> bool {
        (**self).less(v, w)
    }

    fn inverted(&mut self, v: &X, w: &X) -> bool {
        (**self).inverted(v, w)
    }

    fn get(&mut self, xs: &[X], i: usize) -> X {
        (**self).get(xs, i)
    }

    fn set(&mut self, xs: &mut [X], i: usize, x: X) {
        (**self).set(xs, i, x)
    }

    fn copy(&mut self, xs: &mut [X], from: usize, to: usize) {
        (**self).copy(xs, from, to)
    }

    fn swap(&mut self, xs: &mut [X], i: usize, j: usize) {
        (**self).swap(xs, i, j)
    }

    fn swap_conditional(&mut self, xs: &mut [X], i: usize, j: usize) -> bool {
        (**self).swap_conditional(xs, i, j)
    }

    fn swap_stable_conditional(&mut self, xs: &mut [X], j: usize) -> bool {
        (**self).swap_stable_conditional(xs, j)
    }

    fn swap_conditional_with(&mut self, xs: &mut [X], v: &X, i: usize, j: usize, w: &X) -> bool {
        (**self).swap_conditional_with(xs, v, i, j, w)
    }

    fn sort_pair(&mut self, xs: &mut [X], from: usize, to: usize) {
        (**self).sort_pair(xs, from, to)
    }

    fn sort_trio(&mut self, xs: &mut [X], from: usize, to: usize) {
        (**self).sort_trio(xs, from, to)
    }

    fn record_fixes(&mut self, count: u64) {
        (**self).record_fixes(count)
    }

    fn tracks_fixes(&self) -> bool {
        (**self).tracks_fixes()
    }

    fn inversions(&self, xs: &[X]) -> u64 {
        (**self).inversions(xs)
    }

    fn is_sorted(&self, xs: &[X]) -> bool {
        (**self).is_sorted(xs)
    }

    fn random(&mut self, generator: &mut dyn FnMut(&mut StdRng) -> X) -> Result<Vec<X>> {
        (**self).random(generator)
    }

    fn random_of(
        &mut self,
        count: usize,
        generator: &mut dyn FnMut(&mut StdRng) -> X,
    ) -> Result<Vec<X>> {
        (**self).random_of(count, generator)
    }

    fn pre_process(&mut self, xs: &[X]) {
        (**self).pre_process(xs)
    }

    fn post_process(&mut self, xs: &[X]) -> Result<()> {
        (**self).post_process(xs)
    }

    fn snapshot(&self) -> Option<Snapshot> {
        (**self).snapshot()
    }

    fn stat_pack(&self) -> Option<&StatPack> {
        (**self).stat_pack()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Builds the Helper variant selected by `config.helper.instrument`.
///
/// The seed comes from `config.helper.seed`, or from the clock when unset.
pub fn create<X: Clone + 'static>(
    description: &str,
    comparator: Comparator<X>,
    n: usize,
    config: &Config,
) -> BoxedHelper<X> {
    let seed = config.helper.seed.unwrap_or_else(time_seed);
    if config.helper.instrument {
        Box::new(InstrumentingHelper::new(description, comparator, n, seed, config))
    } else {
        Box::new(NonInstrumentingHelper::new(description, comparator, n, seed, config))
    }
}

/// State common to both Helper variants.
pub(crate) struct HelperCore<X> {
    pub(crate) description: String,
    pub(crate) comparator: Comparator<X>,
    pub(crate) n: usize,
    pub(crate) rng: StdRng,
    pub(crate) check_sorted: bool,
    pub(crate) cutoff: usize,
}

impl<X: Clone> HelperCore<X> {
    pub(crate) fn new(
        description: &str,
        comparator: Comparator<X>,
        n: usize,
        seed: u64,
        config: &HelperConfig,
    ) -> Self {
        Self {
            description: description.to_string(),
            comparator,
            n,
            rng: StdRng::seed_from_u64(seed),
            check_sorted: config.checksorted,
            cutoff: config.cutoff,
        }
    }

    #[inline]
    pub(crate) fn compare(&self, v: &X, w: &X) -> Ordering {
        (self.comparator)(v, w)
    }

    pub(crate) fn random_of(
        &mut self,
        count: usize,
        generator: &mut dyn FnMut(&mut StdRng) -> X,
    ) -> Result<Vec<X>> {
        if count == 0 {
            return Err(SortError::precondition(
                "Helper.random: requesting zero random elements (helper not initialized?)",
            ));
        }
        Ok((0..count).map(|_| generator(&mut self.rng)).collect())
    }

    pub(crate) fn inversions(&self, xs: &[X]) -> u64 {
        count_inversions(xs, &*self.comparator)
    }

    pub(crate) fn is_sorted(&self, xs: &[X]) -> bool {
        is_sorted_by(xs, &*self.comparator)
    }

    /// Sortedness self-check run by `post_process`.
    pub(crate) fn check(&self, xs: &[X]) -> Result<()> {
        if self.check_sorted && !self.is_sorted(xs) {
            return Err(SortError::NotSorted {
                description: self.description.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn describe(&self, instrumented: bool) -> String {
        format!(
            "Helper for {} with {} elements{}",
            self.description,
            self.n,
            if instrumented { " instrumented" } else { "" }
        )
    }
}

/// Asserts that `[from, to)` holds exactly `len` elements.
pub(crate) fn check_small_range(operation: &str, from: usize, to: usize, len: usize) {
    assert!(
        to >= from && to - from == len,
        "{}: range {}..{} must hold {} elements",
        operation,
        from,
        to,
        len
    );
}

pub fn is_sorted_by<X>(xs: &[X], compare: &dyn Fn(&X, &X) -> Ordering) -> bool {
    xs.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Counts pairs `i < j` with `xs[i] > xs[j]` by merge sort, O(n log n).
pub fn count_inversions<X: Clone>(xs: &[X], compare: &dyn Fn(&X, &X) -> Ordering) -> u64 {
    let mut work = xs.to_vec();
    let mut aux = Vec::with_capacity(xs.len());
    merge_count(&mut work, &mut aux, compare)
}

fn merge_count<X: Clone>(
    xs: &mut [X],
    aux: &mut Vec<X>,
    compare: &dyn Fn(&X, &X) -> Ordering,
) -> u64 {
    let n = xs.len();
    if n < 2 {
        return 0;
    }
    let mid = n / 2;
    let (left, right) = xs.split_at_mut(mid);
    let mut count = merge_count(left, aux, compare) + merge_count(right, aux, compare);

    aux.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < n {
        if compare(&xs[j], &xs[i]) == Ordering::Less {
            aux.push(xs[j].clone());
            count += (mid - i) as u64;
            j += 1;
        } else {
            aux.push(xs[i].clone());
            i += 1;
        }
    }
    aux.extend_from_slice(&xs[i..mid]);
    aux.extend_from_slice(&xs[j..n]);
    xs.clone_from_slice(aux);
    count
}

/// Change in the number of inversions of `xs` caused by swapping positions
/// `i` and `j`, positive when inversions are removed.
///
/// Every element strictly between the two positions can gain or lose an
/// inversion against either swapped value, so the scan is O(|j - i|).
pub(crate) fn swap_fixes<X>(
    xs: &[X],
    i: usize,
    j: usize,
    compare: &dyn Fn(&X, &X) -> Ordering,
) -> i64 {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    if lo == hi {
        return 0;
    }
    let v = &xs[lo];
    let w = &xs[hi];
    let gt = |a: &X, b: &X| i64::from(compare(a, b) == Ordering::Greater);

    let mut delta = gt(v, w) - gt(w, v);
    for x in &xs[lo + 1..hi] {
        let before = gt(v, x) + gt(x, w);
        let after = gt(w, x) + gt(x, v);
        delta += before - after;
    }
    delta
}
