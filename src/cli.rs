use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::warn;
use ngame::solver::constants::DEFAULT_TARGET;
use ngame::utils::summary_line;
use ngame::{
    ExpressionSolver, GroupingStrategy, SolverConfig, parse_numbers, parse_numbers_lenient,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Grouping enumeration to search with
#[derive(Debug, Clone, ValueEnum)]
pub enum StrategyArg {
    /// Permutations of reduction positions, shifted and clamped
    Clamped,
    /// One grouping per distinct binary tree
    Tree,
}

impl StrategyArg {
    pub fn to_grouping_strategy(&self) -> GroupingStrategy {
        match self {
            StrategyArg::Clamped => GroupingStrategy::Clamped,
            StrategyArg::Tree => GroupingStrategy::Tree,
        }
    }
}

/// ngame - Find every way to reach a target from a set of numbers
#[derive(Parser, Debug)]
#[command(name = "ngame")]
#[command(about = "Find every +, -, *, / expression over the given numbers that equals the target")]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine, each used exactly once
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Target value to match
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: f64,

    /// Grouping enumeration
    #[arg(long, value_enum, default_value = "clamped")]
    pub strategy: StrategyArg,

    /// Spread the search over all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Refuse inputs with more numbers than this
    #[arg(long)]
    pub max_inputs: Option<usize>,

    /// Fail on a non-numeric token instead of searching an empty input
    #[arg(long)]
    pub strict: bool,

    /// Print the derivation of every solution
    #[arg(short, long)]
    pub show_solutions: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub input: Vec<f64>,
    pub solver: SolverConfig,
    pub show_solutions: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    config_from_args(args)
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let input = if args.strict {
        parse_numbers(&args.numbers).context("Invalid number")?
    } else {
        parse_numbers_lenient(&args.numbers)
    };

    Ok(CliConfig {
        input,
        solver: SolverConfig {
            target: args.target,
            strategy: args.strategy.to_grouping_strategy(),
            parallel: args.parallel,
            max_inputs: args.max_inputs,
        },
        show_solutions: args.show_solutions,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialise logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    if config.input.is_empty() {
        warn!("No usable numbers in input");
    }

    let solver = ExpressionSolver::new(config.solver);

    let start = Instant::now();
    let solutions = solver.solve(&config.input).context("Search aborted")?;
    let elapsed = start.elapsed();

    if config.show_solutions {
        for solution in &solutions {
            println!("{}\n======", solution);
        }
    }

    println!("{}", summary_line(solutions.len(), elapsed));
    Ok(())
}
