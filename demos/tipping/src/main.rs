//! tipping: run Schelling's segregation model from the command line.
//!
//! ```text
//! tipping run   [--config FILE] [--seed N] [--attempts N] [--out DIR]
//! tipping sweep  --config FILE  [--seed N] [--out DIR]
//! ```
//!
//! `run` prints the grid before and after, the tie counts, and the number
//! of moves.  `sweep` prints the mean final mixed-tie fraction per
//! threshold pair and optionally writes every run to `sweep_results.csv`.
//! Set `RUST_LOG=debug` to see individual moves.

mod render;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tip_output::{CsvWriter, OutputWriter, SnapshotObserver};
use tip_sim::{
    GroupSpec, NoopObserver, SimBuilder, SimulationConfig, SimulationResult, SweepSpec, run_sweep,
};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tipping")]
#[command(about = "Schelling's tipping model of residential segregation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one simulation and show the grid before and after.
    Run(RunArgs),
    /// Run a threshold sweep.
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// TOML run config; the built-in 15x15 blue/green setup when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override the config's seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the config's move attempts.
    #[arg(long)]
    attempts: Option<u64>,

    /// Directory for grid_snapshots.csv.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// TOML sweep config.
    #[arg(long, short)]
    config: PathBuf,

    /// Override the sweep's root seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for sweep_results.csv.
    #[arg(long)]
    out: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match Cli::parse().command {
        Command::Run(args) => run(args),
        Command::Sweep(args) => sweep(args),
    }
}

fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// The classic demo: 15x15, 50 blue (0.5, 0), 50 green (0.2, 0).
fn builtin_config() -> SimulationConfig {
    SimulationConfig::new(15, 15)
        .group(GroupSpec::new("blue", 50, 0.5, 0.0))
        .group(GroupSpec::new("green", 50, 0.2, 0.0))
        .move_attempts(1_000)
}

// ── run ───────────────────────────────────────────────────────────────────────

fn run(args: RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_toml::<SimulationConfig>(path)?,
        None => builtin_config(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(attempts) = args.attempts {
        config.move_attempts = attempts;
    }
    let groups = config.groups.clone();
    let cols = config.cols;

    println!("=== tipping: Schelling segregation ===");
    println!(
        "Grid: {}x{} ({})  |  Residents: {}  |  Attempts: {}  |  Seed: {}",
        config.rows,
        config.cols,
        if config.diagonals { "8-neighbor" } else { "4-neighbor" },
        config.resident_count(),
        config.move_attempts,
        config.seed.map_or_else(|| "entropy".to_owned(), |s| s.to_string()),
    );
    println!("{}", render::legend(&groups));
    println!();

    let mut sim = SimBuilder::new(config).build()?;
    println!("Before:");
    println!("{}", render::grid(cols, sim.cell_states()));

    let t0 = Instant::now();
    let result: SimulationResult = match &args.out {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let mut obs = SnapshotObserver::new(CsvWriter::grid(dir)?);
            let result = sim.run(&mut obs)?;
            if let Some(e) = obs.take_error() {
                return Err(anyhow::Error::new(e).context("writing grid snapshots"));
            }
            result
        }
        None => sim.run(&mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    println!("After:");
    println!("{}", render::grid(cols, sim.cell_states()));
    println!("Baseline ties: {}", render::ties(&groups, &result.baseline_ties));
    println!("Final ties:    {}", render::ties(&groups, &result.final_ties));
    println!(
        "Moves: {} of {} attempts ({:.3}s)",
        result.successful_moves,
        sim.attempts(),
        elapsed.as_secs_f64()
    );
    if let Some(dir) = &args.out {
        println!("Grid snapshots written to {}", dir.display());
    }
    Ok(())
}

// ── sweep ─────────────────────────────────────────────────────────────────────

fn sweep(args: SweepArgs) -> Result<()> {
    let mut spec: SweepSpec = load_toml(&args.config)?;
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }

    let runs = spec.points()?.len();
    println!("=== tipping: threshold sweep ===");
    println!(
        "Grid: {}x{}  |  Residents: {}  |  Runs: {}  |  Seed: {}",
        spec.base.rows,
        spec.base.cols,
        spec.base.resident_count(),
        runs,
        spec.seed,
    );
    println!();

    let t0 = Instant::now();
    let rows = run_sweep(&spec)?;
    let elapsed = t0.elapsed();

    // Mean final mixed fraction per (τ_in, τ_out, attempts), over replicates
    // that ended with at least one tie.
    let mut means: BTreeMap<(u64, u64, u64), (f64, u32)> = BTreeMap::new();
    for row in &rows {
        let p = &row.point;
        let key = (p.in_threshold.to_bits(), p.out_threshold.to_bits(), p.move_attempts);
        let entry = means.entry(key).or_insert((0.0, 0));
        if let Some(f) = row.result.final_ties.mixed_fraction() {
            entry.0 += f;
            entry.1 += 1;
        }
    }

    println!("{:>6} {:>6} {:>9} {:>12}", "τ_in", "τ_out", "attempts", "mean mixed");
    for &in_threshold in &spec.in_thresholds {
        for &out_threshold in &spec.out_thresholds {
            for &attempts in &spec.move_attempts {
                let key = (in_threshold.to_bits(), out_threshold.to_bits(), attempts);
                let mean = match means.get(&key) {
                    Some(&(sum, n)) if n > 0 => format!("{:.3}", sum / n as f64),
                    _ => "-".to_owned(),
                };
                println!("{in_threshold:>6.2} {out_threshold:>6.2} {attempts:>9} {mean:>12}");
            }
        }
    }
    println!();
    println!("{} runs in {:.2}s", rows.len(), elapsed.as_secs_f64());

    if let Some(dir) = &args.out {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let mut writer = CsvWriter::sweep(dir)?;
        writer.write_sweep(&rows)?;
        writer.finish()?;
        println!("Sweep results written to {}", dir.join("sweep_results.csv").display());
    }
    Ok(())
}
