//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod input_store;
mod output;

// Import aoc2023 to link the solver plugins
use aoc2023 as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use input_store::InputSource;
use output::{OutputFormatter, Summary};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins unless `--verbose` asks for debug output
fn setup_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder().parse_lossy(
            std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or("warn".to_string()),
        )
    };
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    tracing::debug!(?config, "resolved configuration");

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Check for missing inputs before running anything
    let missing_inputs = check_missing_inputs(&work_items, executor.input());
    if !missing_inputs.is_empty() {
        eprintln!("Missing {} input file(s):", missing_inputs.len());
        for (year, day) in &missing_inputs {
            eprintln!("  - {}", executor.input().path(*year, *day).display());
        }
        return Err(error::CliError::MissingInputs(missing_inputs.len()));
    }

    run_executor(&executor, config.quiet)
}

/// Check which inputs are missing
fn check_missing_inputs(work_items: &[executor::WorkItem], input: &InputSource) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !input.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Run the executor, printing results as they arrive
fn run_executor(executor: &Executor, quiet: bool) -> Result<(), error::CliError> {
    let formatter = OutputFormatter::new(quiet);
    let mut results = Vec::new();

    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });

    let summary = Summary::from_results(&results);
    formatter.print_summary(&summary);

    if summary.failed > 0 {
        return Err(error::CliError::Failed {
            failed: summary.failed,
            total: summary.total(),
        });
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
