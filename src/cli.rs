use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use twentyfour::expression::Operator;
use twentyfour::utils::{parse_number_list, parse_operators, parse_range};
use twentyfour::{Group, PruneLevel, SearchConfig, Solver, validate_config};

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

/// Prune level as written on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum PruneArg {
    /// One solution per operator arrangement
    Std,
    /// One solution per list of numbers
    Max,
    /// Every solution
    Off,
}

impl PruneArg {
    pub fn to_prune_level(&self) -> PruneLevel {
        match self {
            PruneArg::Std => PruneLevel::Standard,
            PruneArg::Max => PruneLevel::Max,
            PruneArg::Off => PruneLevel::Off,
        }
    }
}

/// Twentyfour - find arithmetic expressions over a list of numbers
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Find every arithmetic expression over a list of numbers that equals a target")]
#[command(version)]
pub struct CliArgs {
    /// Expected result value of the expressions
    #[arg(allow_negative_numbers = true)]
    pub target: i32,

    /// Colon separated numbers in 0..=127, e.g. 1:2:3:4. With --range the
    /// first number is the list size and the rest are fixed leading numbers
    #[arg(value_parser = parse_number_list)]
    pub numbers: std::vec::Vec<u8>,

    /// Enumerate the remaining numbers from MIN:MAX
    #[arg(short, long, value_name = "MIN:MAX", value_parser = parse_range)]
    pub range: Option<(u8, u8)>,

    /// Fixed operators, e.g. --op=+*; excess operators are ignored
    #[arg(long = "op", value_name = "OPS", value_parser = parse_operators)]
    pub operators: Option<std::vec::Vec<Operator>>,

    /// Number of worker threads (default: available parallelism)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Prune level
    #[arg(short, long, value_enum, default_value = "std")]
    pub prune: PruneArg,

    /// Also list numbers that have no solution
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub search: SearchConfig,
    pub out: Option<PathBuf>,
}

fn hardware_threads() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

/// Worker count after applying the default and the upper bound of twice the
/// hardware parallelism
fn resolve_jobs(requested: Option<usize>, hardware: usize) -> usize {
    let limit = hardware.saturating_mul(2);
    match requested {
        None => hardware,
        Some(jobs) if jobs > limit => {
            warn!("Too large value for jobs: {}, limited to {}", jobs, limit);
            limit
        }
        Some(jobs) => jobs,
    }
}

/// Turns parsed arguments into a search configuration
pub fn build_search_config(args: &CliArgs, hardware: usize) -> SearchConfig {
    let config = match args.range {
        Some((min, max)) => {
            let size = args.numbers.first().map_or(0, |n| usize::from(*n));
            let prefix: Vec<u8> = args
                .numbers
                .iter()
                .skip(1)
                .take(size.saturating_sub(1))
                .copied()
                .collect();
            SearchConfig::ranged(args.target, size, prefix, min, max)
        }
        None => SearchConfig::new(args.target, args.numbers.clone()),
    };

    let slots = config.size.saturating_sub(1);
    let operators = args.operators.clone().unwrap_or_default();
    config
        .with_operators(operators.into_iter().take(slots).collect())
        .with_jobs(resolve_jobs(args.jobs, hardware))
        .with_prune(args.prune.to_prune_level())
        .with_verbose(args.verbose)
}

/// Validate parsed arguments and return configuration
pub fn parse_args(args: CliArgs) -> Result<CliConfig> {
    let search = build_search_config(&args, hardware_threads());

    validate_config(&search).context("Invalid arguments")?;

    Ok(CliConfig {
        search,
        out: args.out,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn join_values<T: fmt::Display>(values: &[T]) -> String {
    values.iter().map(|v| format!("{} ", v)).collect()
}

/// Summary line describing the search
pub fn format_header(config: &SearchConfig) -> String {
    let mut header = format!("  target = {}  ", config.target);
    if let Some((min, max)) = config.range {
        header.push_str(&format!(
            "min = {}  max = {}  size = {}  ",
            min, max, config.size
        ));
    }
    if !config.numbers.is_empty() {
        header.push_str(&format!("numbers: {} ", join_values(&config.numbers)));
    }
    if !config.operators.is_empty() {
        header.push_str(&format!("operators: {} ", join_values(&config.operators)));
    }
    header
}

/// One line per group: its numbers, then every canonical solution
pub fn format_groups(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|group| {
            let solutions: String = group
                .infix_strings()
                .iter()
                .map(|s| format!("{}  ", s))
                .collect();
            format!("  {}:  {}", join_values(&group.operands), solutions)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_report(out: &mut dyn Write, config: &SearchConfig, groups: &[Group]) -> io::Result<()> {
    writeln!(out, "{}", format_header(config))?;
    writeln!(out, "{}", "-".repeat(80))?;
    writeln!(out, "{}", format_groups(groups))?;
    out.flush()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    let config = parse_args(args)?;

    let solver = Solver::new(config.search);
    let groups = solver.solve().context("Search failed")?;
    info!("Writing {} groups", groups.len());

    match &config.out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to open file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, solver.config(), &groups)
                .with_context(|| format!("Unable to write file: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(&mut handle, solver.config(), &groups).context("Unable to write output")?;
        }
    }
    Ok(())
}
