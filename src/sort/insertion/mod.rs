//! # Insertion Sort
//!
//! Two variants over the same Helper primitives:
//!
//! - [`InsertionSort`]: sinks each element with adjacent conditional swaps.
//!   On a reversed input of N elements this performs exactly N(N-1)/2
//!   comparisons and N(N-1)/2 swaps.
//! - [`InsertionSortOpt`]: holds the element being inserted, shifts larger
//!   neighbours right with single writes, then stores it once. Same
//!   comparisons, no swaps, about half the element traffic.

pub mod test;

use std::marker::PhantomData;

use crate::config::Config;
use crate::helper::{BoxedHelper, Helper};
use crate::registry::SortRunner;
use crate::sort::Sort;
use crate::utils::time_logger::Complexity;

pub struct InsertionSort<X, H = BoxedHelper<X>> {
    helper: H,
    _element: PhantomData<fn(X)>,
}

impl<X: Clone, H: Helper<X>> InsertionSort<X, H> {
    pub const DESCRIPTION: &'static str = "Insertion sort";

    pub fn new(helper: H) -> Self {
        Self {
            helper,
            _element: PhantomData,
        }
    }
}

/// Swapping insertion sort of `xs[from..to]`, shared with hybrid sorts.
pub fn insertion_sort<X: Clone, H: Helper<X> + ?Sized>(
    helper: &mut H,
    xs: &mut [X],
    from: usize,
    to: usize,
) {
    for i in from + 1..to {
        let mut j = i;
        while j > from && helper.swap_stable_conditional(xs, j) {
            j -= 1;
        }
    }
}

impl<X: Clone, H: Helper<X>> Sort<X> for InsertionSort<X, H> {
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
        insertion_sort(&mut self.helper, xs, from, to);
    }
}

pub struct InsertionSortOpt<X, H = BoxedHelper<X>> {
    helper: H,
    _element: PhantomData<fn(X)>,
}

impl<X: Clone, H: Helper<X>> InsertionSortOpt<X, H> {
    pub const DESCRIPTION: &'static str = "Insertion sort (shifting)";

    pub fn new(helper: H) -> Self {
        Self {
            helper,
            _element: PhantomData,
        }
    }
}

impl<X: Clone, H: Helper<X>> Sort<X> for InsertionSortOpt<X, H> {
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
        let helper = &mut self.helper;
        for i in from + 1..to {
            let x = helper.get(xs, i);
            let mut j = i;
            while j > from {
                let y = helper.get(xs, j - 1);
                if !helper.less(&x, &y) {
                    break;
                }
                // x passes exactly one larger element
                helper.set(xs, j, y);
                helper.record_fixes(1);
                j -= 1;
            }
            if j != i {
                helper.set(xs, j, x);
            }
        }
    }
}

pub struct InsertionRunner;

impl SortRunner for InsertionRunner {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn description(&self) -> &'static str {
        "Insertion sort by adjacent conditional swaps"
    }

    fn category(&self) -> &'static str {
        "elementary"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Quadratic
    }

    fn build(&self, helper: BoxedHelper<f64>, _config: &Config) -> Box<dyn Sort<f64>> {
        Box::new(InsertionSort::new(helper))
    }
}

pub struct InsertionOptRunner;

impl SortRunner for InsertionOptRunner {
    fn name(&self) -> &'static str {
        "insertion-opt"
    }

    fn description(&self) -> &'static str {
        "Insertion sort shifting elements instead of swapping"
    }

    fn category(&self) -> &'static str {
        "elementary"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Quadratic
    }

    fn build(&self, helper: BoxedHelper<f64>, _config: &Config) -> Box<dyn Sort<f64>> {
        Box::new(InsertionSortOpt::new(helper))
    }
}
