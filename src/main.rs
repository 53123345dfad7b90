//! Max Subarray - Main Entry Point
//!
//! Solves the configured demo sequence by default, or sequences given on
//! the command line or in a file.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use max_subarray_sum::config::{Config, LoggingConfig};
use max_subarray_sum::solver::{brute_force, max_subarray, max_subarray_sum};
use max_subarray_sum::utils::{parse_sequence, sum_range};
use max_subarray_sum::Report;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::EnvFilter;

/// Max Subarray CLI
#[derive(Parser)]
#[command(name = "max-subarray")]
#[command(version, about = "Maximum contiguous subarray sum by divide and conquer")]
struct Cli {
    /// Configuration file (default: ./config.*)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the configured demo sequence
    Demo,

    /// Solve a sequence given on the command line or in a file
    Solve {
        #[command(flatten)]
        input: InputArgs,

        /// First index of the range (default: 0)
        #[arg(short, long)]
        left: Option<usize>,

        /// Last index of the range (default: last element)
        #[arg(short, long)]
        right: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cross-check the solver against the brute-force reference
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Sequence values, e.g. `-2 -5 6 -2 -3 1 5 -6`
    #[arg(allow_negative_numbers = true)]
    values: Vec<Decimal>,

    /// Read values from a file (comma or whitespace separated)
    #[arg(short, long, conflicts_with = "values")]
    file: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path, true)?,
        None => Config::load()?,
    };
    config.validate()?;

    let _guard = init_logging(&config.logging)?;
    debug!(?config, "Configuration loaded");

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(&config),
        Commands::Solve {
            input,
            left,
            right,
            json,
        } => run_solve(&input, left, right, json),
        Commands::Check { input } => run_check(&input),
    }
}

/// Set up the tracing subscriber. Logs go to stderr so stdout only carries reports.
fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log filter {:?}", config.level))?;

    let (writer, guard) = match &config.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir))?;
            let file_appender = tracing_appender::rolling::daily(dir, "max-subarray.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            (BoxMakeWriter::new(std::io::stderr.and(file_writer)), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if config.json {
        builder.json().init();
    } else {
        builder.with_ansi(config.directory.is_none()).init();
    }

    Ok(guard)
}

fn run_demo(config: &Config) -> Result<()> {
    info!(
        "Max subarray v{} - demo sequence of {} values",
        env!("CARGO_PKG_VERSION"),
        config.demo.values.len()
    );

    let values = &config.demo.values;
    let best = max_subarray(values).context("Failed to solve demo sequence")?;
    println!("{}", Report::new(values, best));

    Ok(())
}

fn run_solve(input: &InputArgs, left: Option<usize>, right: Option<usize>, json: bool) -> Result<()> {
    let values = read_input(input)?;
    let left = left.unwrap_or(0);
    let right = right.unwrap_or(values.len().saturating_sub(1));

    let best = max_subarray_sum(&values, left, right)
        .with_context(|| format!("Cannot solve range ({}, {})", left, right))?;
    info!(low = best.low, high = best.high, sum = %best.sum, "Solved");

    let report = Report::new(&values, best);
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn run_check(input: &InputArgs) -> Result<()> {
    let values = read_input(input)?;

    let best = max_subarray(&values).context("Divide-and-conquer solver rejected input")?;
    let reference = brute_force(&values).context("Brute-force solver rejected input")?;

    println!("divide and conquer: {}", Report::new(&values, best));
    println!("brute force:        {}", Report::new(&values, reference));

    let recomputed = sum_range(&values, best.low, best.high);
    if recomputed != best.sum {
        warn!(reported = %best.sum, %recomputed, "Reported sum does not match its range");
        bail!("Reported sum {} does not match range sum {}", best.sum, recomputed);
    }

    if best.sum != reference.sum {
        warn!(divide = %best.sum, brute = %reference.sum, "Solvers disagree");
        bail!("Solvers disagree: {} vs {}", best.sum, reference.sum);
    }

    info!(sum = %best.sum, len = values.len(), "Solvers agree");
    Ok(())
}

fn read_input(input: &InputArgs) -> Result<Vec<Decimal>> {
    match &input.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path))?;
            parse_sequence(&text).with_context(|| format!("Failed to parse {}", path))
        }
        None => Ok(input.values.clone()),
    }
}
