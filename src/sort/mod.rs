//! Sort algorithms written against [`Helper`].
//!
//! Each algorithm lives in its own directory with its runner (registry
//! entry) next to it and its tests under `test/`.

pub mod insertion;
pub mod intro;
pub mod selection;
pub mod shell;
pub mod tim;

pub use insertion::{InsertionSort, InsertionSortOpt};
pub use intro::IntroSort;
pub use selection::SelectionSort;
pub use shell::{GapMode, GapSequence, ShellSort};
pub use tim::TimSortWrapper;

use crate::error::Result;
use crate::helper::Helper;

/// An in-place sort over a half-open range, delegating every comparison,
/// read and exchange to its Helper.
pub trait Sort<X: Clone> {
    fn description(&self) -> String;

    fn helper(&self) -> &dyn Helper<X>;

    fn helper_mut(&mut self) -> &mut dyn Helper<X>;

    /// Sorts `xs[from..to]` in place.
    fn sort(&mut self, xs: &mut [X], from: usize, to: usize);

    /// Sorts all of `xs` in place.
    fn mutating_sort(&mut self, xs: &mut [X]) {
        let n = xs.len();
        self.sort(xs, 0, n);
    }

    /// Returns a sorted copy, leaving `xs` untouched.
    fn sort_copy(&mut self, xs: &[X]) -> Vec<X> {
        let mut ys = xs.to_vec();
        self.mutating_sort(&mut ys);
        ys
    }

    fn init(&mut self, n: usize) {
        self.helper_mut().init(n);
    }

    fn pre_process(&mut self, xs: &[X]) {
        self.helper_mut().pre_process(xs);
    }

    fn post_process(&mut self, xs: &[X]) -> Result<()> {
        self.helper_mut().post_process(xs)
    }

    fn close(&mut self) {
        self.helper_mut().close();
    }
}

impl<X: Clone, S: Sort<X> + ?Sized> Sort<X> for Box<S> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn helper(&self) -> &dyn Helper<X> {
        (**self).helper()
    }

    fn helper_mut(&mut self) -> &mut dyn Helper<X> {
        (**self).helper_mut()
    }

    fn sort(&mut self, xs: &mut [X], from: usize, to: usize) {
        (**self).sort(xs, from, to)
    }
}

/// Runs one full trial: pre-process, sort, post-process.
pub fn sort_trial<X: Clone, S: Sort<X> + ?Sized>(sorter: &mut S, xs: &mut [X]) -> Result<()> {
    sorter.pre_process(xs);
    sorter.mutating_sort(xs);
    sorter.post_process(xs)
}
