//! # Timsort Wrapper
//!
//! Delegates to the standard library's stable merge sort (a Timsort
//! derivative), comparing through the Helper so compares are still counted.
//! Element moves happen inside the library and are not visible; when
//! fixes are tracked the inversions removed are credited as fixes in one step.

pub mod test;

use std::marker::PhantomData;

use crate::config::Config;
use crate::helper::{BoxedHelper, Helper};
use crate::registry::SortRunner;
use crate::sort::Sort;
use crate::utils::time_logger::Complexity;

pub struct TimSortWrapper<X, H = BoxedHelper<X>> {
    helper: H,
    _element: PhantomData<fn(X)>,
}

impl<X: Clone, H: Helper<X>> TimSortWrapper<X, H> {
    pub const DESCRIPTION: &'static str = "Timsort";

    pub fn new(helper: H) -> Self {
        Self {
            helper,
            _element: PhantomData,
        }
    }
}

impl<X: Clone, H: Helper<X>> Sort<X> for TimSortWrapper<X, H> {
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
        let range = &mut xs[from..to];
        let inversions = if self.helper.tracks_fixes() {
            Some(self.helper.inversions(range))
        } else {
            None
        };
        let helper = &mut self.helper;
        range.sort_by(|a, b| helper.compare(a, b));
        if let Some(inversions) = inversions {
            self.helper.record_fixes(inversions);
        }
    }
}

pub struct TimSortRunner;

impl SortRunner for TimSortRunner {
    fn name(&self) -> &'static str {
        "timsort"
    }

    fn description(&self) -> &'static str {
        "Standard library stable sort, comparing through the Helper"
    }

    fn category(&self) -> &'static str {
        "linearithmic"
    }

    fn complexity(&self) -> Complexity {
        Complexity::NLogN
    }

    fn build(&self, helper: BoxedHelper<f64>, _config: &Config) -> Box<dyn Sort<f64>> {
        Box::new(TimSortWrapper::new(helper))
    }
}
