//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::instrument::Metric;
use crate::registry::{SortRegistry, SortRunner};
use crate::utils::runner::BenchmarkOutcome;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Compact count: 1234567 -> "1.23M"
pub fn format_count(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}G", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e4 {
        format!("{:.1}k", value / 1e3)
    } else {
        format!("{:.0}", value)
    }
}

/// Print sort info box
pub fn print_runner_info_box(runner: &dyn SortRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let name_line = format!("Algorithm:  {}", runner.name());
    let cat_line = format!("Category:   {}", runner.category());
    let complexity_line = format!("Complexity: {}", runner.complexity());
    let desc_line = runner.description();

    let content_width = [
        name_line.len(),
        cat_line.len(),
        complexity_line.len(),
        desc_line.len(),
    ]
    .iter()
    .cloned()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), complexity_line.as_str()] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(desc_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print results table for one input size. Count columns show `-` for runs
/// that were not instrumented.
pub fn print_results_table(outcomes: &[&BenchmarkOutcome], size: usize, runs: usize) {
    if outcomes.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 72;
    let name_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = name_col_width + 60 + 5;

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<n_width$} {:>12} {:>12} {:>10} {:>10} {:>10}",
        "Algorithm",
        "Mean (ms)",
        "Normalized",
        "Compares",
        "Swaps",
        "Hits",
        n_width = name_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for outcome in outcomes {
        let count = |metric| {
            outcome
                .mean(metric)
                .map(format_count)
                .unwrap_or_else(|| "-".to_string())
        };
        println!(
            "  {:<n_width$} {:>12.4} {:>12.4} {:>10} {:>10} {:>10}",
            truncate(&outcome.description, name_col_width),
            outcome.mean_time_millis,
            outcome.normalized_time,
            count(Metric::Compares),
            count(Metric::Swaps),
            count(Metric::Hits),
            n_width = name_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Sort Instrumentation Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: sort-bench [OPTIONS] [ALGORITHM...]");
    println!();
    println!("Options:");
    println!("  --list, -l          List all available algorithms");
    println!("  --help, -h          Show this help message");
    println!("  --sizes SIZES       Comma-separated array sizes (default: 1000,2000,4000)");
    println!("  --reps N, -r N      Repetitions per size (default: 100)");
    println!("  --seed N            Random seed for reproducible arrays (default: time-based)");
    println!("  --config FILE       TOML configuration file");
    println!("  --instrument        Count operations (slower)");
    println!("  --csv FILE          Export results to CSV");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM           Names of algorithms to run (omit for all)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Log filter (default: info)");
    println!();
    println!("Examples:");
    println!("  sort-bench                          # Run all algorithms");
    println!("  sort-bench shell-3 shell-4          # Compare two gap sequences");
    println!("  sort-bench --instrument insertion   # Count compares and swaps");
    println!("  sort-bench --sizes 500,1000         # Custom sizes");
    println!("  sort-bench --csv results.csv        # Export to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &SortRegistry) {
    println!("Available algorithms:");
    println!();
    for runner in registry.all() {
        println!(
            "  {:<16} [{}] {} - {}",
            runner.name(),
            runner.category(),
            runner.complexity(),
            runner.description()
        );
    }
}
