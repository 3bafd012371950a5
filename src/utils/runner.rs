//! Benchmark driver: builds a Helper and a sort from the registry, times
//! repeated trials on fresh random arrays and collects the statistics.

use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::Config;
use crate::error::{Result, SortError};
use crate::helper::{self, f64_order};
use crate::instrument::{Metric, StatPack};
use crate::registry::SortRegistry;
use crate::sort::Sort;
use crate::utils::time_logger::{Complexity, TimeLogger};
use crate::utils::timer::{BenchmarkTimer, Repetition, TimingConfig};

/// One benchmark configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkSpec {
    /// Registry name, e.g. `"shell-4"`.
    pub algorithm: String,
    pub n: usize,
    pub repetitions: usize,
    /// Overrides `helper.seed` from the configuration.
    pub seed: Option<u64>,
}

impl BenchmarkSpec {
    pub fn new(algorithm: impl Into<String>, n: usize, repetitions: usize) -> Self {
        Self {
            algorithm: algorithm.into(),
            n,
            repetitions,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Clone, Debug)]
pub struct BenchmarkOutcome {
    pub algorithm: String,
    pub description: String,
    pub n: usize,
    pub repetitions: usize,
    pub mean_time_millis: f64,
    /// Mean time over the algorithm's complexity of `n`, times 10^6.
    pub normalized_time: f64,
    pub complexity: Complexity,
    /// Present when the Helper was instrumenting.
    pub stat_pack: Option<StatPack>,
}

impl BenchmarkOutcome {
    pub fn mean(&self, metric: Metric) -> Option<f64> {
        self.stat_pack.as_ref().and_then(|pack| pack.mean(metric).ok())
    }
}

/// Discarded runs before measuring: a tenth of the repetitions, 2 to 10.
pub fn warmup_runs(repetitions: usize) -> usize {
    (repetitions / 10).clamp(2, 10)
}

/// A trial: random array in, sorted (and checked) array out.
struct SortTrial<'a> {
    sorter: &'a mut dyn Sort<f64>,
    n: usize,
}

impl Repetition for SortTrial<'_> {
    type Input = Vec<f64>;
    type Output = ();

    fn supply(&mut self) -> Result<Vec<f64>> {
        self.sorter
            .helper_mut()
            .random(&mut |r: &mut StdRng| r.random::<f64>())
    }

    fn pre(&mut self, input: Vec<f64>) -> Vec<f64> {
        self.sorter.pre_process(&input);
        input
    }

    fn run(&mut self, input: &mut Vec<f64>) {
        self.sorter.mutating_sort(input);
    }

    fn post(&mut self, input: &Vec<f64>, _output: ()) -> Result<()> {
        self.sorter.post_process(input)
    }

    fn after_warmup(&mut self) {
        self.sorter.init(self.n);
    }
}

pub fn run_benchmark(
    spec: &BenchmarkSpec,
    config: &Config,
    registry: &SortRegistry,
) -> Result<BenchmarkOutcome> {
    let runner = registry
        .find(&spec.algorithm)
        .ok_or_else(|| SortError::UnknownAlgorithm(spec.algorithm.clone()))?;
    if spec.n == 0 {
        return Err(SortError::precondition("benchmark: n must be positive"));
    }
    if spec.repetitions == 0 {
        return Err(SortError::precondition(
            "benchmark: repetitions must be positive",
        ));
    }

    let mut config = config.clone();
    if let Some(seed) = spec.seed {
        config.helper.seed = Some(seed);
    }
    let helper = helper::create(runner.name(), f64_order(), spec.n, &config);
    let mut sorter = runner.build(helper, &config);
    let description = sorter.description();
    tracing::info!(
        algorithm = runner.name(),
        n = spec.n,
        repetitions = spec.repetitions,
        instrumented = sorter.helper().instrumented(),
        "{}",
        description
    );

    let timing = TimingConfig {
        runs: spec.repetitions,
        warmup_runs: if config.benchmark.warmup {
            warmup_runs(spec.repetitions)
        } else {
            0
        },
        pin: config.benchmark.pin,
    };
    let benchmark = BenchmarkTimer::new(description.clone(), timing);
    let mean_time_millis = {
        let mut trial = SortTrial {
            sorter: sorter.as_mut(),
            n: spec.n,
        };
        benchmark.run(&mut trial)?
    };

    let complexity = runner.complexity();
    TimeLogger::raw("Raw time per run (mSec):").log(&description, mean_time_millis, spec.n);
    let normalized_time = TimeLogger::new(
        format!("Normalized time per run ({}):", complexity),
        Some(complexity),
    )
    .log(&description, mean_time_millis, spec.n);

    let stat_pack = sorter.helper().stat_pack().cloned();
    sorter.close();

    Ok(BenchmarkOutcome {
        algorithm: runner.name().to_string(),
        description,
        n: spec.n,
        repetitions: spec.repetitions,
        mean_time_millis,
        normalized_time,
        complexity,
        stat_pack,
    })
}

/// Runs every [`BenchmarkSpec`]; a failing configuration is reported in its own slot
/// without stopping the rest.
pub fn run_batch(
    specs: &[BenchmarkSpec],
    config: &Config,
    registry: &SortRegistry,
) -> Vec<Result<BenchmarkOutcome>> {
    specs
        .iter()
        .map(|spec| {
            let outcome = run_benchmark(spec, config, registry);
            if let Err(e) = &outcome {
                tracing::warn!(algorithm = %spec.algorithm, n = spec.n, "benchmark failed: {}", e);
            }
            outcome
        })
        .collect()
}

/// Export outcomes to a CSV file, one row per outcome. Metric columns are
/// empty when the run was not instrumented.
pub fn export_csv(path: impl AsRef<Path>, outcomes: &[BenchmarkOutcome]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_csv(&mut file, outcomes)
}

pub fn write_csv<W: Write>(out: &mut W, outcomes: &[BenchmarkOutcome]) -> std::io::Result<()> {
    write!(out, "algorithm,n,repetitions,mean_time_ms,normalized_time")?;
    for metric in Metric::ALL {
        write!(out, ",{}", metric)?;
    }
    writeln!(out)?;

    for outcome in outcomes {
        write!(
            out,
            "{},{},{},{},{}",
            outcome.algorithm,
            outcome.n,
            outcome.repetitions,
            outcome.mean_time_millis,
            outcome.normalized_time
        )?;
        for metric in Metric::ALL {
            let value = outcome.mean(metric).map(|v| v.to_string()).unwrap_or_default();
            write!(out, ",{}", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
