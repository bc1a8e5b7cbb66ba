use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::prelude::*;

use sensor_coverage::{read_sensors, read_sensors_from_path, tuning_frequency, ScanStrategy, Survey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    Part1,
    Part2,
    Both,
}

/// Beacon exclusion zone solver.
#[derive(Debug, Parser)]
struct Args {
    part: Part,
    /// Sensor report file; stdin when omitted.
    input_path: Option<PathBuf>,
    /// Row to count beacon-free positions on (part 1).
    #[arg(long, default_value_t = 2_000_000, allow_negative_numbers = true)]
    row: i64,
    /// Upper bound of the search square `[0, max]²` (part 2).
    #[arg(long, default_value_t = 4_000_000)]
    max: i64,
    /// Multiplier for x in the part 2 answer. Defaults to `max`.
    #[arg(long)]
    multiplier: Option<i64>,
    /// Worker threads for the part 2 scan.
    #[arg(long, conflicts_with = "sequential")]
    threads: Option<usize>,
    /// Scan part 2 rows one at a time on the main thread.
    #[arg(long)]
    sequential: bool,
}

fn init_logging() -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .context("invalid log filter")?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let sensors = match &args.input_path {
        Some(path) => read_sensors_from_path(path).with_context(|| {
            format!("failed to read sensors from {}", path.display())
        })?,
        None => read_sensors(io::stdin().lock()).context("failed to read sensors from stdin")?,
    };
    let survey = Survey::new(sensors);

    let bounds = survey.bounds();
    info!(
        left = bounds.left,
        top = bounds.top,
        right = bounds.right,
        bottom = bounds.bottom,
        width = bounds.width(),
        height = bounds.height(),
        area = %bounds.area(),
        "coverage bounds"
    );

    if matches!(args.part, Part::Part1 | Part::Both) {
        println!("{}", part1(&survey, args.row));
    }
    if matches!(args.part, Part::Part2 | Part::Both) {
        let strategy = if args.sequential {
            ScanStrategy::Sequential
        } else {
            ScanStrategy::Parallel { threads: args.threads }
        };
        let multiplier = args.multiplier.unwrap_or(args.max);
        println!("{}", part2(&survey, args.max, multiplier, strategy)?);
    }
    Ok(())
}

fn part1(survey: &Survey, row: i64) -> i64 {
    survey.positions_without_beacon(row)
}

fn part2(survey: &Survey, max: i64, multiplier: i64, strategy: ScanStrategy) -> Result<i64> {
    let Some(p) = survey.find_gap(0, max, strategy)? else {
        return Err(anyhow!("no uncovered position in [0, {max}]"));
    };
    info!(x = p.x, y = p.y, "uncovered position");
    tuning_frequency(p, multiplier)
        .ok_or_else(|| anyhow!("answer for {p:?} with multiplier {multiplier} overflows"))
}
