use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use num_bigint::BigInt;
use num_rational::BigRational;
use tot24::puzzle::validate_numbers;
use tot24::{Expression, Point24Solver, SolverConfig, Strategy, survey};

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

/// tot24 - Solve the 24-point puzzle with a Tree-of-Thoughts search
#[derive(Parser, Debug)]
#[command(name = "tot24")]
#[command(about = "Combine four numbers with + - * / to reach 24, using tree search")]
#[command(version)]
pub struct CliArgs {
    /// The four numbers of the hand (not needed with --survey)
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Traversal strategy: bfs or dfs
    #[arg(short, long, default_value = "bfs")]
    pub strategy: String,

    /// Value the expression must reach
    #[arg(short, long, default_value_t = 24, allow_negative_numbers = true)]
    pub target: i64,

    /// Deepest node that may still be expanded
    #[arg(long, default_value_t = 3)]
    pub max_depth: usize,

    /// Popped nodes scoring below this are not expanded
    #[arg(long, default_value_t = 0.0)]
    pub prune_threshold: f64,

    /// Print every combination step before the answer
    #[arg(long)]
    pub steps: bool,

    /// Print the answer without redundant parentheses
    #[arg(long)]
    pub pretty: bool,

    /// Re-evaluate the answer exactly and check it uses each number once
    #[arg(long)]
    pub verify: bool,

    /// Solve every hand drawn from --min..=--max and report the unsolvable ones
    #[arg(long)]
    pub survey: bool,

    /// Smallest card value in a survey
    #[arg(long, default_value_t = 1)]
    pub min: i64,

    /// Largest card value in a survey
    #[arg(long, default_value_t = 13)]
    pub max: i64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Single { numbers: Vec<i64> },
    Survey { min: i64, max: i64 },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub strategy: String,
    pub solver: SolverConfig,
    pub steps: bool,
    pub pretty: bool,
    pub verify: bool,
    pub log_level: LogLevel,
}

/// Validate parsed arguments and build the run configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    args.strategy
        .parse::<Strategy>()
        .context("Invalid strategy")?;

    let mode = if args.survey {
        Mode::Survey {
            min: args.min,
            max: args.max,
        }
    } else {
        validate_numbers(&args.numbers).context("Invalid hand")?;
        Mode::Single {
            numbers: args.numbers,
        }
    };

    Ok(CliConfig {
        mode,
        strategy: args.strategy,
        solver: SolverConfig {
            target: BigRational::from_integer(BigInt::from(args.target)),
            max_depth: args.max_depth,
            prune_threshold: args.prune_threshold,
        },
        steps: args.steps,
        pretty: args.pretty,
        verify: args.verify,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Point24Solver::new(config.solver.clone());

    match &config.mode {
        Mode::Survey { min, max } => run_survey(&solver, &config, *min, *max),
        Mode::Single { numbers } => run_single(&solver, &config, numbers),
    }
}

fn run_single(solver: &Point24Solver, config: &CliConfig, numbers: &[i64]) -> Result<()> {
    info!(
        "Searching for an expression over {:?} that equals {}",
        numbers,
        solver.target()
    );

    let solution = solver
        .solve_traced(numbers, &config.strategy)
        .context("Search failed")?;

    match solution {
        Some(solution) => {
            info!(
                "Solved at depth {}: {} nodes created, {} expanded, {} duplicates skipped",
                solution.depth,
                solution.stats.nodes_created,
                solution.stats.nodes_expanded,
                solution.stats.duplicates_skipped
            );
            if config.steps {
                for (i, step) in solution.steps.iter().enumerate() {
                    println!("step {}: {}", i + 1, step);
                }
            }
            if config.verify {
                verify(&solution.expression, solver.target(), numbers)?;
                info!("Verified {} = {}", solution.expression, solver.target());
            }
            println!("{}", render(&solution.expression, config.pretty)?);
            Ok(())
        }
        None => {
            warn!("No matching expression found");
            println!("No solution found.");
            Ok(())
        }
    }
}

fn run_survey(solver: &Point24Solver, config: &CliConfig, min: i64, max: i64) -> Result<()> {
    let report = survey(solver, min, max, &config.strategy).context("Survey failed")?;

    println!(
        "{} of {} hands can make {}",
        report.solvable,
        report.hands,
        solver.target()
    );
    for hand in &report.unsolvable {
        println!(
            "no solution: {} {} {} {}",
            hand[0], hand[1], hand[2], hand[3]
        );
    }
    Ok(())
}

/// Check an answer independently of the search that produced it
fn verify(expression: &str, target: &BigRational, numbers: &[i64]) -> Result<()> {
    let parsed: Expression = expression
        .parse()
        .with_context(|| format!("Cannot re-parse solver output '{}'", expression))?;

    let value = parsed
        .evaluate()
        .with_context(|| format!("Cannot evaluate solver output '{}'", expression))?;
    if &value != target {
        bail!("'{}' evaluates to {}, not {}", expression, value, target);
    }

    let mut used = parsed.literals();
    used.sort();
    let mut hand: Vec<BigRational> = numbers
        .iter()
        .map(|&n| BigRational::from_integer(BigInt::from(n)))
        .collect();
    hand.sort();
    if used != hand {
        bail!("'{}' does not use the hand {:?} exactly once", expression, numbers);
    }

    Ok(())
}

fn render(expression: &str, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(expression.to_string());
    }
    let parsed: Expression = expression
        .parse()
        .with_context(|| format!("Cannot re-parse solver output '{}'", expression))?;
    Ok(parsed.to_string())
}
