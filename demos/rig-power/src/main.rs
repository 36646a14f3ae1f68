//! rig-power — surveillance power analysis for rotating offshore crews.
//!
//! ```text
//! rig-power sweep --crew-sizes 50,100,200 --prevalences 0.025,0.05,0.1 -o power.csv
//! rig-power cases --viruses viruses.csv --frequencies 1,3,7 -o cases.csv
//! rig-power trace --prevalence 0.05 --out-dir ./trace
//! ```

mod logging;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};

use rig_core::{ReplicateRng, SimRng};
use rig_exposure::{ConstantRate, MainlandCurve};
use rig_output::{write_case_table, CsvWriter, PowerCsvWriter, SimOutputObserver};
use rig_power::{case_table, power_from_cases, thin_cases, PowerConfig, PowerEstimator};
use rig_sim::{SimBuilder, SimConfig};
use rig_virus::load_viruses;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(version, about = "Power of periodic testing to detect reduced transmission on rotating crews")]
struct Cli {
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Power over crew size × prevalence × surveillance length × reduction.
    Sweep(SweepArgs),
    /// Per-replicate case vectors for a virus portfolio, with column powers.
    Cases(CasesArgs),
    /// One run at constant mainland prevalence, written as CSV trace files.
    Trace(TraceArgs),
}

/// Crew, rotation, and disease parameters shared by every subcommand.
#[derive(Args, Clone)]
struct SimArgs {
    #[arg(long, default_value_t = 365)]
    n_days: u32,
    /// Workers on site at any time.
    #[arg(long, default_value_t = 120)]
    crew_size: usize,
    #[arg(long, default_value_t = 1.3)]
    r0: f64,
    #[arg(long, default_value_t = 2)]
    t_inf: u32,
    #[arg(long, default_value_t = 12)]
    t_rec: u32,
    #[arg(long, default_value_t = 28)]
    days_on: u32,
    #[arg(long, default_value_t = 28)]
    days_off: u32,
    /// Days between cohort start offsets.
    #[arg(long, default_value_t = 7)]
    t_change: u32,
}

impl SimArgs {
    fn config(&self) -> SimConfig {
        SimConfig {
            n_days:    self.n_days,
            crew_size: self.crew_size,
            r0:        self.r0,
            t_inf:     self.t_inf,
            t_rec:     self.t_rec,
            days_on:   self.days_on,
            days_off:  self.days_off,
            t_change:  self.t_change,
        }
    }
}

#[derive(Args)]
struct BatchArgs {
    #[arg(long, default_value_t = 1000)]
    n_sims: u32,
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl BatchArgs {
    fn config(&self) -> PowerConfig {
        PowerConfig { n_sims: self.n_sims, alpha: self.alpha, seed: self.seed }
    }
}

#[derive(Args)]
struct SweepArgs {
    #[command(flatten)]
    sim: SimArgs,
    #[command(flatten)]
    batch: BatchArgs,
    #[arg(long, value_delimiter = ',', default_values_t = [50, 100, 200])]
    crew_sizes: Vec<usize>,
    /// Point prevalence ashore; the daily infection rate is `prevalence / t_rec`.
    #[arg(long, value_delimiter = ',', default_values_t = [0.025, 0.05, 0.1])]
    prevalences: Vec<f64>,
    /// Surveillance window lengths in days.
    #[arg(long, value_delimiter = ',', default_values_t = [30, 60, 90, 120, 150, 180, 210, 240])]
    days: Vec<u32>,
    #[arg(long, value_delimiter = ',', default_values_t = [0.5, 0.8])]
    reduction_factors: Vec<f64>,
    #[arg(long, default_value_t = 1)]
    test_frequency: u32,
    #[arg(short, long, default_value = "power.csv")]
    output: PathBuf,
}

#[derive(Args)]
struct CasesArgs {
    #[command(flatten)]
    sim: SimArgs,
    #[command(flatten)]
    batch: BatchArgs,
    /// Virus portfolio, `.csv` or `.json`.
    #[arg(long)]
    viruses: PathBuf,
    #[arg(long, value_delimiter = ',', default_values_t = [1, 3, 7])]
    frequencies: Vec<u32>,
    #[arg(long, default_value_t = 0.5)]
    reduction_factor: f64,
    /// Fraction of positive tests lost before reporting.
    #[arg(long, default_value_t = 0.0)]
    frac_missing: f64,
    /// Also report bootstrap power over this many rigs…
    #[arg(long)]
    n_rigs: Option<u32>,
    /// …observed for this many years.
    #[arg(long, default_value_t = 1)]
    n_years: u32,
    #[arg(long, default_value_t = 10_000)]
    n_samples: usize,
    #[arg(short, long, default_value = "cases.csv")]
    output: PathBuf,
}

#[derive(Args)]
struct TraceArgs {
    #[command(flatten)]
    sim: SimArgs,
    /// Point prevalence ashore.
    #[arg(long, default_value_t = 0.05)]
    prevalence: f64,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Write per-worker rows every N days (0 = never).
    #[arg(long, default_value_t = 7)]
    snapshot_interval: u32,
    #[arg(long, default_value = "./output")]
    out_dir: PathBuf,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn sweep(args: SweepArgs) -> Result<()> {
    let mut out = PowerCsvWriter::new(&args.output, &["crew_size", "prevalence"])?;
    let mut seeds = SimRng::new(args.batch.seed);

    for &crew_size in &args.crew_sizes {
        for &prevalence in &args.prevalences {
            info!("working on crew_size={crew_size}, prevalence={prevalence}");
            let base = SimConfig { crew_size, ..args.sim.config() };
            let curve: Arc<dyn MainlandCurve> =
                Arc::new(ConstantRate::from_prevalence(prevalence, base.t_rec)?);
            let config = PowerConfig { seed: seeds.next_seed(), ..args.batch.config() };

            let rows = PowerEstimator::new(config, base, curve)?.sim_power(
                &args.days,
                &args.reduction_factors,
                args.test_frequency,
            )?;
            out.write_rows(&[crew_size.to_string(), prevalence.to_string()], &rows)?;
        }
    }
    out.finish()?;
    info!("wrote {}", args.output.display());
    Ok(())
}

fn cases(args: CasesArgs) -> Result<()> {
    let viruses = load_viruses(&args.viruses)
        .with_context(|| format!("loading {}", args.viruses.display()))?;
    let config = args.batch.config();
    let table = case_table(
        &config,
        &args.sim.config(),
        &viruses,
        &args.frequencies,
        args.reduction_factor,
    )?;
    write_case_table(&args.output, &table)?;
    info!("wrote {} replicates per arm to {}", table.n_replicates(), args.output.display());

    let mut rng = SimRng::new(config.seed).child(2);
    for column in table.powers(config.alpha, &mut rng)? {
        info!("{}: power {:.3}", column.column, column.power);
    }

    if let Some(n_rigs) = args.n_rigs {
        for (j, name) in table.columns.iter().enumerate() {
            let control = thin_cases(&table.control_column(j), args.frac_missing, &mut rng)?;
            let treated = thin_cases(&table.intervention_column(j), args.frac_missing, &mut rng)?;
            let p = power_from_cases(
                &control,
                &treated,
                n_rigs,
                args.n_years,
                args.n_samples,
                config.alpha,
                &mut rng,
            )?;
            info!(
                "{name}: {n_rigs} rigs x {} years, {:.0}% tests missed: power {p:.3}",
                args.n_years,
                args.frac_missing * 100.0
            );
        }
    }
    Ok(())
}

fn trace(args: TraceArgs) -> Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let curve = ConstantRate::from_prevalence(args.prevalence, args.sim.t_rec)?;
    let sim = SimBuilder::new(
        args.sim.config(),
        Arc::new(curve),
        ReplicateRng::from_seed(args.seed),
    )
    .build()?;
    info!("simulating {} workers for {} days", sim.crew().len(), args.sim.n_days);

    let writer = CsvWriter::new(&args.out_dir)?;
    let mut obs = SimOutputObserver::new(writer, args.snapshot_interval);
    let t0 = Instant::now();
    let result = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing trace");
    }

    if let Some(last) = result.last() {
        let s = last.summary();
        info!(
            "done in {:.2?}: final S/E/I/R = {:?}, output in {}",
            t0.elapsed(),
            s.by_status,
            args.out_dir.display()
        );
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level)?;

    match cli.command {
        Command::Sweep(args) => sweep(args),
        Command::Cases(args) => cases(args),
        Command::Trace(args) => trace(args),
    }
}
