//! # Sort-Instrument
//!
//! Sorting algorithms written against a [`helper::Helper`], which performs
//! every comparison, read and exchange on their behalf. A plain Helper just
//! does the work; an instrumenting Helper also counts it, so the same
//! algorithm code serves both for timing and for operation-count analysis.
//!
//! ```
//! use sort_instrument::prelude::*;
//!
//! let helper = NonInstrumentingHelper::with_comparator("demo", natural_order::<i32>());
//! let mut sorter = ShellSort::new(GapMode::Knuth, helper);
//! let mut xs = vec![3, 4, 2, 1];
//! sorter.mutating_sort(&mut xs);
//! assert_eq!(xs, vec![1, 2, 3, 4]);
//! ```

pub mod config;
pub mod error;
pub mod helper;
pub mod instrument;
pub mod registry;
pub mod sort;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export the batch driver from utils::runner
pub use utils::runner::run_batch;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{ErrorKind, Result, SortError};
    pub use crate::helper::{
        f64_order, natural_order, Comparator, Helper, InstrumentingHelper,
        NonInstrumentingHelper,
    };
    pub use crate::instrument::{Metric, StatPack};
    pub use crate::registry::{build_registry, SortRegistry, SortRunner};
    pub use crate::sort::{
        sort_trial, GapMode, GapSequence, InsertionSort, InsertionSortOpt, IntroSort,
        SelectionSort, ShellSort, Sort, TimSortWrapper,
    };
    pub use crate::utils::{
        run_benchmark, BenchmarkOutcome, BenchmarkSpec, Stopwatch, TimeUnit, Timer,
    };
}
