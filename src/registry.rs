//! Sort registry for discovery and execution by name.
//!
//! Each algorithm module provides one or more [`SortRunner`]s; the CLI and
//! the benchmark driver look them up here instead of naming types.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::helper::{f64_order, BoxedHelper, InstrumentingHelper, NonInstrumentingHelper};
use crate::sort::Sort;
use crate::utils::time_logger::Complexity;

/// Trait that all registered sorts must implement
pub trait SortRunner: Send + Sync {
    /// Registry name (e.g., "shell-4")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "elementary", "linearithmic")
    fn category(&self) -> &'static str;

    /// Growth function used to normalize benchmark times
    fn complexity(&self) -> Complexity;

    /// Build the sort over `helper`.
    fn build(&self, helper: BoxedHelper<f64>, config: &Config) -> Box<dyn Sort<f64>>;

    /// Verify the sort against the standard library on an awkward size,
    /// with both Helper variants.
    fn verify(&self) -> Result<(), String> {
        let size = 1023;
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let xs: Vec<f64> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
        let mut expected = xs.clone();
        expected.sort_by(f64::total_cmp);

        let config = Config::default().with_inversion_tracking(true);
        let helpers: [BoxedHelper<f64>; 2] = [
            Box::new(NonInstrumentingHelper::new(
                self.name(),
                f64_order(),
                size,
                0,
                &config,
            )),
            Box::new(InstrumentingHelper::new(
                self.name(),
                f64_order(),
                size,
                0,
                &config,
            )),
        ];

        for helper in helpers {
            let mut sorter = self.build(helper, &config);
            let mut ys = xs.clone();
            crate::sort::sort_trial(sorter.as_mut(), &mut ys).map_err(|e| e.to_string())?;
            if ys != expected {
                return Err(format!(
                    "{} ({}) produced a wrongly ordered result",
                    sorter.description(),
                    if sorter.helper().instrumented() {
                        "instrumented"
                    } else {
                        "plain"
                    }
                ));
            }
        }
        Ok(())
    }
}

/// Global registry of all sorts
pub struct SortRegistry {
    runners: Vec<Box<dyn SortRunner>>,
}

impl SortRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            runners: Vec::new(),
        }
    }

    /// Register a sort
    pub fn register<R: SortRunner + 'static>(&mut self, runner: R) {
        self.runners.push(Box::new(runner));
    }

    /// Get all registered sorts
    pub fn all(&self) -> &[Box<dyn SortRunner>] {
        &self.runners
    }

    /// Find sort by name
    pub fn find(&self, name: &str) -> Option<&dyn SortRunner> {
        self.runners
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
    }

    /// List sort names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.runners.iter().map(|r| r.name()).collect()
    }

    /// List sorts by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn SortRunner> {
        self.runners
            .iter()
            .filter(|r| r.category() == category)
            .map(|r| r.as_ref())
            .collect()
    }
}

impl Default for SortRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all sorts
pub fn build_registry() -> SortRegistry {
    use crate::sort::shell::{GapMode, ShellRunner};

    let mut registry = SortRegistry::new();

    registry.register(crate::sort::insertion::InsertionRunner);
    registry.register(crate::sort::insertion::InsertionOptRunner);
    registry.register(crate::sort::selection::SelectionRunner);
    for mode in GapMode::ALL {
        registry.register(ShellRunner { mode });
    }
    registry.register(crate::sort::intro::IntroRunner);
    registry.register(crate::sort::tim::TimSortRunner);

    registry
}
