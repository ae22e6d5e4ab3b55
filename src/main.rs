use anyhow::{Context, Result};
use clap::Parser;

use percolation::render::render;
use percolation::stats::{run_trial, trial_rng, PercolationStats, StatsConfig};

/// percolation - Estimate the percolation threshold of an N×N grid
///
/// Runs independent Monte Carlo trials, each opening random sites until the
/// top row connects to the bottom row, and reports the mean open fraction
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid side length
    #[clap(short = 'n', long = "size", default_value = "200")]
    size: usize,

    /// Number of independent trials
    #[clap(short = 'T', long = "trials", default_value = "100")]
    trials: usize,

    /// Seed for reproducible runs (trial i uses seed + i)
    #[clap(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of threads for parallel trials
    #[clap(short = 't', long = "threads", default_value = "8")]
    threads: usize,

    /// Print one sample grid at the moment it percolates
    #[clap(long = "show")]
    show: bool,

    /// Quiet mode (no summary banner on stderr)
    #[clap(long = "quiet")]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn stats_config(&self) -> StatsConfig {
        StatsConfig {
            grid_size: self.size,
            trials: self.trials,
            seed: self.seed,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("Failed to set up thread pool")?;

    if !args.quiet {
        eprintln!(
            "[percolation] {} trials on a {}x{} grid using {} threads",
            args.trials, args.size, args.size, args.threads
        );
    }

    let config = args.stats_config();
    let stats = PercolationStats::run(&config).with_context(|| {
        format!(
            "Failed to estimate threshold (size={}, trials={})",
            config.grid_size, config.trials
        )
    })?;

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    if args.show {
        let mut rng = trial_rng(args.seed, 0);
        let grid = run_trial(args.size, &mut rng).context("Failed to run sample trial")?;
        println!();
        print!("{}", render(&grid));
        println!(
            "open sites = {} / {}",
            grid.number_of_open_sites(),
            args.size * args.size
        );
    }

    Ok(())
}
