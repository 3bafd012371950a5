//! # Selection Sort
//!
//! Scans the unsorted suffix for its minimum and exchanges it into place.
//! Always N(N-1)/2 comparisons; at most N-1 swaps, none for positions that
//! already hold their minimum.

pub mod test;

use std::marker::PhantomData;

use crate::config::Config;
use crate::helper::{BoxedHelper, Helper};
use crate::registry::SortRunner;
use crate::sort::Sort;
use crate::utils::time_logger::Complexity;

pub struct SelectionSort<X, H = BoxedHelper<X>> {
    helper: H,
    _element: PhantomData<fn(X)>,
}

impl<X: Clone, H: Helper<X>> SelectionSort<X, H> {
    pub const DESCRIPTION: &'static str = "Selection sort";

    pub fn new(helper: H) -> Self {
        Self {
            helper,
            _element: PhantomData,
        }
    }

    /// Index of the smallest element of `xs[from..to]`, first one on ties.
    fn locate_minimum(&mut self, xs: &[X], from: usize, to: usize) -> usize {
        let mut k = from;
        let mut min = self.helper.get(xs, k);
        for j in from + 1..to {
            let x = self.helper.get(xs, j);
            if self.helper.inverted(&min, &x) {
                k = j;
                min = x;
            }
        }
        k
    }
}

impl<X: Clone, H: Helper<X>> Sort<X> for SelectionSort<X, H> {
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
        if to <= from + 1 {
            return;
        }
        for i in from..to - 1 {
            let min = self.locate_minimum(xs, i, to);
            if i != min {
                self.helper.swap(xs, i, min);
            }
        }
    }
}

pub struct SelectionRunner;

impl SortRunner for SelectionRunner {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn description(&self) -> &'static str {
        "Selection sort, one swap per position at most"
    }

    fn category(&self) -> &'static str {
        "elementary"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Quadratic
    }

    fn build(&self, helper: BoxedHelper<f64>, _config: &Config) -> Box<dyn Sort<f64>> {
        Box::new(SelectionSort::new(helper))
    }
}
