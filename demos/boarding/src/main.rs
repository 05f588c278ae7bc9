//! boarding — command-line driver for the boarding simulator.
//!
//! Boards one cabin (optionally writing per-tick output) or sweeps many
//! seeded runs of the same configuration and prints the distribution of
//! boarding times.
//!
//! # Usage
//!
//! ```bash
//! # One 30-row, 6-abreast cabin, CSV output every tick
//! boarding --rows 30 --seats-per-row 6 --output output/boarding
//!
//! # 500 runs, back-to-front ordering
//! boarding --rows 30 --seats-per-row 6 --policy back-to-front --runs 500
//!
//! # Start from a JSON config, override the seed, log admissions
//! RUST_LOG=bd_sim=debug boarding --config plane.json --seed 7
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use bd_core::BoardingConfig;
use bd_output::{CabinOutputObserver, CsvWriter, OutputWriter, RunSummaryRow};
use bd_policy::{BoardingPolicy, policy_by_name};
use bd_sim::{CabinBuilder, NoopObserver, RunSummary, run_sweep};

#[cfg(feature = "sqlite")]
use bd_output::SqliteWriter;

/// Single-aisle airplane boarding simulator
#[derive(Parser, Debug)]
#[command(name = "boarding")]
#[command(about = "Tick-based single-aisle airplane boarding simulator")]
#[command(version)]
struct Args {
    /// JSON file with a BoardingConfig; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of seat rows
    #[arg(long)]
    rows: Option<u32>,

    /// Seats in every row
    #[arg(long)]
    seats_per_row: Option<u32>,

    /// Base RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a passenger carries a bag for the overhead bin
    #[arg(long)]
    carry_on_probability: Option<f64>,

    /// Stop a run after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Write a passenger snapshot every N ticks (0 disables)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Boarding order: random, back-to-front
    #[arg(short, long, default_value = "random")]
    policy: String,

    /// Number of independent runs; anything other than one runs a sweep
    #[arg(short, long, default_value = "1")]
    runs: u64,

    /// Directory for output files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write SQLite instead of CSV (needs the `sqlite` feature)
    #[arg(long)]
    sqlite: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<BoardingConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => BoardingConfig::default(),
    };

    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(seats) = args.seats_per_row {
        config.seats_per_row = seats;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(p) = args.carry_on_probability {
        config.carry_on_probability = p;
    }
    if args.max_ticks.is_some() {
        config.max_ticks = args.max_ticks;
    }
    if let Some(interval) = args.snapshot_interval {
        config.output_interval_ticks = interval;
    }

    config.validate()?;
    Ok(config)
}

fn open_writer(dir: &Path, sqlite: bool) -> Result<Box<dyn OutputWriter>> {
    if sqlite {
        #[cfg(feature = "sqlite")]
        return Ok(Box::new(SqliteWriter::new(dir)?));
        #[cfg(not(feature = "sqlite"))]
        anyhow::bail!("--sqlite needs the binary built with the `sqlite` feature");
    }
    Ok(Box::new(CsvWriter::new(dir)?))
}

// ── Single run ────────────────────────────────────────────────────────────────

fn board_once(args: &Args, config: BoardingConfig, policy: &dyn BoardingPolicy) -> Result<RunSummary> {
    let mut cabin = CabinBuilder::new(config).policy(policy).build()?;

    let result = match &args.output {
        Some(dir) => {
            let mut obs = CabinOutputObserver::new(open_writer(dir, args.sqlite)?);
            let result = cabin.run(&mut obs);
            obs.finish()
                .with_context(|| format!("writing output to {}", dir.display()))?;
            result
        }
        None => cabin.run(&mut NoopObserver),
    };
    result?;

    Ok(cabin.summary())
}

fn print_run(summary: &RunSummary) {
    println!("{:<22} {}", "Policy", summary.policy);
    println!("{:<22} {} × {}", "Cabin", summary.rows, summary.seats_per_row);
    println!("{:<22} {}", "Seed", summary.seed);
    println!("{:<22} {}", "Total ticks", summary.total_ticks);
    println!("{:<22} {}", "Shuffle events", summary.shuffle_events);
    println!("{:<22} {}", "Bags stowed", summary.bins_stowed);
    println!("{:<22} {:.2}", "Mean accrued ticks", summary.mean_accrued_ticks);
    println!("{:<22} {}", "Max accrued ticks", summary.max_accrued_ticks);
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

fn sweep(args: &Args, config: &BoardingConfig, policy: &dyn BoardingPolicy) -> Result<()> {
    let summary = run_sweep(config, policy, args.runs)?;

    println!("{:<22} {}", "Policy", policy.name());
    println!("{:<22} {} × {}", "Cabin", config.rows, config.seats_per_row);
    println!("{:<22} {}", "Runs", summary.len());
    println!("{:<22} {:.2}", "Mean ticks", summary.mean_ticks());
    println!("{:<22} {:.2}", "Std dev", summary.std_dev_ticks());
    println!("{:<22} {}", "Min ticks", summary.min_ticks().unwrap_or(0));
    println!("{:<22} {}", "Max ticks", summary.max_ticks().unwrap_or(0));

    if let Some(dir) = &args.output {
        let mut writer = open_writer(dir, args.sqlite)?;
        for run in &summary.runs {
            writer.write_run_summary(&RunSummaryRow::from(run))?;
        }
        writer.finish()?;
        println!("{:<22} {}", "Run summaries", dir.display());
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = load_config(&args)?;
    let policy = policy_by_name(&args.policy, config.carry_on_probability)?;
    tracing::info!(
        "{} × {} cabin, {} policy, seed {}",
        config.rows,
        config.seats_per_row,
        policy.name(),
        config.seed
    );

    let t0 = Instant::now();
    if args.runs != 1 {
        sweep(&args, &config, policy.as_ref())?;
    } else {
        let summary = board_once(&args, config, policy.as_ref())?;
        print_run(&summary);
    }
    println!("{:<22} {:.3} s", "Wall time", t0.elapsed().as_secs_f64());

    Ok(())
}
