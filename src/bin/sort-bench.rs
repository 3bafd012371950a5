//! CLI for benchmarking the registered sorts.
//!
//! Usage:
//!   sort-bench                        # Run all sorts
//!   sort-bench --list                 # List available sorts
//!   sort-bench shell-3 intro          # Run specific sorts
//!   sort-bench --instrument insertion # Count operations as well
//!   sort-bench --help                 # Show help

use sort_instrument::config::Config;
use sort_instrument::registry::build_registry;
use sort_instrument::tui;
use sort_instrument::utils::runner::{export_csv, run_batch, BenchmarkOutcome, BenchmarkSpec};
use std::env;
use std::process;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn next_value<'a>(args: &'a [String], i: &mut usize, option: &str) -> &'a str {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Missing value for {}", option);
            process::exit(1);
        }
    }
}

/// Parses a comma-separated list of positive sizes, rejecting any bad entry.
fn parse_sizes(value: &str) -> Result<Vec<usize>, String> {
    value
        .split(',')
        .map(|s| match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("invalid size '{}'", s.trim())),
        })
        .collect()
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid seed '{}'", value))
}

fn main() {
    init_logging();
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut sizes: Option<Vec<usize>> = None;
    let mut repetitions: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut config_path: Option<String> = None;
    let mut instrument = false;
    let mut csv_path: Option<String> = None;
    let mut algorithms: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => match parse_sizes(next_value(&args, &mut i, "--sizes")) {
                Ok(parsed) => sizes = Some(parsed),
                Err(e) => {
                    eprintln!("--sizes expects positive integers separated by commas: {}", e);
                    process::exit(1);
                }
            },
            "--reps" | "-r" => match next_value(&args, &mut i, "--reps").parse() {
                Ok(n) => repetitions = Some(n),
                Err(_) => {
                    eprintln!("--reps expects a positive integer");
                    process::exit(1);
                }
            },
            "--seed" => match parse_seed(next_value(&args, &mut i, "--seed")) {
                Ok(value) => seed = Some(value),
                Err(e) => {
                    eprintln!("--seed expects an unsigned integer: {}", e);
                    process::exit(1);
                }
            },
            "--config" => config_path = Some(next_value(&args, &mut i, "--config").to_string()),
            "--instrument" => instrument = true,
            "--csv" => csv_path = Some(next_value(&args, &mut i, "--csv").to_string()),
            arg if !arg.starts_with('-') => algorithms.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_algorithms(&registry);
        return;
    }

    let mut config = match &config_path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Cannot load {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if instrument {
        config.helper.instrument = true;
    }
    if let Some(sizes) = sizes {
        config.benchmark.sizes = sizes;
    }
    if let Some(repetitions) = repetitions {
        config.benchmark.repetitions = repetitions;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    let names: Vec<String> = if algorithms.is_empty() {
        registry.list_names().iter().map(|s| s.to_string()).collect()
    } else {
        for name in &algorithms {
            if registry.find(name).is_none() {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                process::exit(1);
            }
        }
        algorithms
    };

    tui::print_header();
    if names.len() == 1 {
        if let Some(runner) = registry.find(&names[0]) {
            tui::print_runner_info_box(runner);
        }
    }

    let reps = config.benchmark.repetitions;
    let specs: Vec<BenchmarkSpec> = config
        .benchmark
        .sizes
        .iter()
        .flat_map(|&n| {
            names.iter().map(move |name| {
                let spec = BenchmarkSpec::new(name.clone(), n, reps);
                match seed {
                    Some(seed) => spec.with_seed(seed),
                    None => spec,
                }
            })
        })
        .collect();

    let results = run_batch(&specs, &config, &registry);
    let mut outcomes: Vec<BenchmarkOutcome> = Vec::new();
    let mut failures = 0;
    for (spec, result) in specs.iter().zip(results) {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                failures += 1;
                eprintln!("{} (n = {}) failed: {}", spec.algorithm, spec.n, e);
            }
        }
    }

    for &n in &config.benchmark.sizes {
        let rows: Vec<&BenchmarkOutcome> = outcomes.iter().filter(|o| o.n == n).collect();
        tui::print_results_table(&rows, n, reps);
    }

    if let Some(path) = csv_path {
        match export_csv(&path, &outcomes) {
            Ok(()) => println!("Results written to {}", path),
            Err(e) => {
                eprintln!("Cannot write {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    if failures > 0 {
        process::exit(2);
    }
}
