//! # Shell Sort
//!
//! A sequence of h-sorts with decreasing gaps (see [`gap`]), the last one
//! always a 1-sort.
//!
//! The plain h-sort is gapped insertion sort by conditional swaps. When the
//! Helper is instrumented, each chain `k, k+h, k+2h, ...` is walked carrying
//! the value known to sit just before the insertion point, so every element
//! is read once and compared through `swap_conditional_with`, which charges
//! one hit for the fresh value and one lookup for the carried one. For mode 1
//! this gives the same compares and swaps as insertion sort and exactly one
//! more hit (the head of the chain).

pub mod gap;
pub mod test;

pub use gap::{sedgewick, GapMode, GapSequence};

use std::marker::PhantomData;

use crate::config::Config;
use crate::helper::{BoxedHelper, Helper};
use crate::registry::SortRunner;
use crate::sort::Sort;
use crate::utils::time_logger::Complexity;

pub struct ShellSort<X, H = BoxedHelper<X>> {
    helper: H,
    mode: GapMode,
    track_inversions: bool,
    _element: PhantomData<fn(X)>,
}

impl<X: Clone, H: Helper<X>> ShellSort<X, H> {
    pub const DESCRIPTION: &'static str = "Shell sort in mode ";

    pub fn new(mode: GapMode, helper: H) -> Self {
        Self {
            helper,
            mode,
            track_inversions: false,
            _element: PhantomData,
        }
    }

    /// Log the inversions removed by each instrumented h-sort pass.
    pub fn with_track_inversions(mut self, track: bool) -> Self {
        self.track_inversions = track;
        self
    }

    pub fn mode(&self) -> GapMode {
        self.mode
    }

    fn h_sort(&mut self, h: usize, xs: &mut [X], from: usize, to: usize) {
        if self.helper.instrumented() {
            self.instrumented_h_sort(h, xs, from, to);
            return;
        }
        for i in from + h..to {
            let mut j = i;
            while j >= from + h && self.helper.swap_conditional(xs, j - h, j) {
                j -= h;
            }
        }
    }

    fn instrumented_h_sort(&mut self, h: usize, xs: &mut [X], from: usize, to: usize) {
        let before = if self.track_inversions {
            let inversions = self.helper.inversions(&xs[from..to]);
            tracing::debug!(h, inversions, "h-sort begin");
            Some(inversions)
        } else {
            None
        };

        for k in 0..h.min(to - from) {
            let mut a = self.helper.get(xs, from + k);
            let mut i = from + h + k;
            while i < to {
                let b = self.helper.get(xs, i);
                a = insert(&mut self.helper, xs, h, from, i, a, b);
                i += h;
            }
        }

        if let Some(before) = before {
            let after = self.helper.inversions(&xs[from..to]);
            let fixed = before.saturating_sub(after);
            let percent = if before == 0 {
                0
            } else {
                (100.0 * fixed as f64 / before as f64) as u32
            };
            tracing::debug!(h, fixed, percent, "h-sort end");
        }
    }
}

/// Inserts `b` (at `i`) into its h-chain, `a` being the value at `i - h`.
/// Returns the value left at `i`, which precedes the next insertion point.
fn insert<X: Clone, H: Helper<X> + ?Sized>(
    helper: &mut H,
    xs: &mut [X],
    h: usize,
    from: usize,
    i: usize,
    mut a: X,
    b: X,
) -> X {
    let mut carried = None;
    let mut j = i;
    while helper.swap_conditional_with(xs, &a, j - h, j, &b) {
        if carried.is_none() {
            carried = Some(a.clone());
        }
        j -= h;
        if j < from + h {
            break;
        }
        a = helper.get(xs, j - h);
    }
    carried.unwrap_or(b)
}

impl<X: Clone, H: Helper<X>> Sort<X> for ShellSort<X, H> {
    fn description(&self) -> String {
        format!("{}{}", Self::DESCRIPTION, self.mode)
    }

    fn helper(&self) -> &dyn Helper<X> {
        &self.helper
    }

    fn helper_mut(&mut self) -> &mut dyn Helper<X> {
        &mut self.helper
    }

    fn sort(&mut self, xs: &mut [X], from: usize, to: usize) {
        let mut gaps = GapSequence::new(to.saturating_sub(from), self.mode);
        let mut gap = gaps.first();
        while gap > 0 {
            self.h_sort(gap, xs, from, to);
            gap = gaps.next_gap();
        }
    }
}

/// One registry entry per gap mode.
pub struct ShellRunner {
    pub mode: GapMode,
}

impl SortRunner for ShellRunner {
    fn name(&self) -> &'static str {
        match self.mode {
            GapMode::Insertion => "shell-1",
            GapMode::PowerOfTwoMinusOne => "shell-2",
            GapMode::Knuth => "shell-3",
            GapMode::Sedgewick => "shell-4",
            GapMode::Pratt => "shell-5",
        }
    }

    fn description(&self) -> &'static str {
        match self.mode {
            GapMode::Insertion => "Shell sort with gap 1 only",
            GapMode::PowerOfTwoMinusOne => "Shell sort with gaps 2^k - 1",
            GapMode::Knuth => "Shell sort with Knuth's 3h+1 gaps",
            GapMode::Sedgewick => "Shell sort with Sedgewick's gaps",
            GapMode::Pratt => "Shell sort with Pratt's 2^i 3^j gaps",
        }
    }

    fn category(&self) -> &'static str {
        "shell"
    }

    fn complexity(&self) -> Complexity {
        match self.mode {
            GapMode::Insertion => Complexity::Quadratic,
            GapMode::PowerOfTwoMinusOne | GapMode::Knuth => Complexity::Power(1.5),
            GapMode::Sedgewick => Complexity::Power(4.0 / 3.0),
            GapMode::Pratt => Complexity::NLogSquaredN,
        }
    }

    fn build(&self, helper: BoxedHelper<f64>, config: &Config) -> Box<dyn Sort<f64>> {
        Box::new(
            ShellSort::new(self.mode, helper)
                .with_track_inversions(config.benchmark.trackinversions),
        )
    }
}
