//! AOC CLI - runs the archived Advent of Code solvers against local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, SolverResult};
use output::{OutputFormatter, Summary};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `AOC_LOG` then `RUST_LOG` override the `-v` level
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env("AOC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.log_level());

    let registry = build_registry(&config.tags)?;
    tracing::info!(solvers = registry.storage().len(), "registry built");
    let executor = Executor::new(registry, &config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing: Vec<_> = work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
        .map(|w| executor.inputs().input_path(w.year, w.day))
        .collect();
    if !missing.is_empty() && !config.quiet {
        eprintln!("Missing {} input file(s):", missing.len());
        for path in &missing {
            eprintln!("  - {}", path.display());
        }
    }

    let expected_keys: Vec<ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |part| ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let results = stream_results(executor, expected_keys, config.quiet)?;
    let summary = Summary::from_results(&results);
    OutputFormatter::new(config.quiet).print_summary(&summary);

    if summary.incorrect > 0 {
        return Err(CliError::IncorrectAnswers {
            count: summary.incorrect,
        });
    }
    Ok(())
}

/// Run the executor in the background and print results in order as they become due
fn stream_results(
    executor: Executor,
    expected_keys: Vec<ResultKey>,
    quiet: bool,
) -> Result<Vec<SolverResult>, CliError> {
    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        tracing::warn!("not all expected results were received");
    }

    let outcome = executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?;
    if let Err(e) = outcome {
        tracing::error!(errors = e.count(), "executor failed");
        return Err(e.into());
    }
    Ok(results)
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.iter().any(|t| *t == tag.as_str()))
        })?
    };

    Ok(builder.build())
}
