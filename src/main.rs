use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shift_routing::config::SchedulerConfig;
use shift_routing::constructive::{build_schedules, SelectionPolicy};
use shift_routing::evaluation::ScheduleEvaluator;
use shift_routing::io::{read_loads, render_json, render_plain};
use shift_routing::models::{Load, Point, Solution};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One `[3,1,7]` line per driver
    Plain,
    /// Full solution with stops and drive times
    Json,
}

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Load file: a header line, then `<n> (<x1>,<y1>) (<x2>,<y2>)` per line
    path: PathBuf,

    /// JSON configuration file (origin, max_drive_time, policy)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shift length in drive time units
    #[arg(long, env = "SHIFT_MAX_DRIVE_TIME")]
    max_drive_time: Option<f64>,

    /// Candidate selection: first-feasible or strict-nearest
    #[arg(long)]
    policy: Option<SelectionPolicy>,

    /// Where shifts start and end, as `X,Y`
    #[arg(long, value_parser = parse_origin, allow_hyphen_values = true)]
    origin: Option<Point>,

    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Re-check completeness and shift limits of the result
    #[arg(long)]
    audit: bool,
}

fn parse_origin(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid x '{x}'"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid y '{y}'"))?;
    Ok(Point::new(x, y))
}

/// Logs go to stderr so stdout carries only schedules.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// File values first, then command-line overrides.
fn resolve_config(args: &Args) -> Result<SchedulerConfig> {
    let mut config = match &args.config {
        Some(path) => SchedulerConfig::from_json_file(path)?,
        None => SchedulerConfig::default(),
    };
    if let Some(origin) = args.origin {
        config = config.with_origin(origin);
    }
    if let Some(max) = args.max_drive_time {
        config = config.with_max_drive_time(max);
    }
    if let Some(policy) = args.policy {
        config = config.with_policy(policy);
    }
    config.validate()?;
    Ok(config)
}

fn audit(loads: &[Load], config: &SchedulerConfig, solution: &Solution) -> Result<()> {
    let evaluator = ScheduleEvaluator::new(loads, config);
    let (total, violations) = evaluator.evaluate_solution(solution);
    if !violations.is_empty() {
        for v in &violations {
            warn!(violation = ?v.kind, "audit failed");
        }
        bail!("audit found {} violation(s)", violations.len());
    }
    info!(
        drivers = solution.num_drivers(),
        total_drive_time = total,
        "audit passed"
    );
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = resolve_config(&args)?;
    info!(
        max_drive_time = config.max_drive_time(),
        origin = %config.origin(),
        policy = %config.policy(),
        "configuration"
    );

    let loads = read_loads(&args.path, config.origin())?;
    let solution = build_schedules(&loads, &config)
        .with_context(|| format!("cannot schedule loads from {}", args.path.display()))?;

    if args.audit {
        audit(&loads, &config, &solution)?;
    }

    match args.format {
        Format::Plain => print!("{}", render_plain(&solution)),
        Format::Json => println!("{}", render_json(&solution)?),
    }
    Ok(())
}
