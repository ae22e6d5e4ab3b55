//! Monte Carlo estimation of the percolation threshold
//!
//! Each trial opens uniformly random blocked sites on a fresh grid until the
//! system percolates and records the fraction of open sites. Trials are
//! independent and run in parallel; with a seed, trial `i` draws from
//! `StdRng::seed_from_u64(seed + i)` so results do not depend on scheduling.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::PercolationError;
use crate::grid::index_site;
use crate::percolation::Percolation;

/// z-score for a two-sided 95% confidence interval
pub const CONFIDENCE_95: f64 = 1.96;

/// Configuration for a threshold estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    pub grid_size: usize,
    pub trials: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// At least one trial is required
    InvalidTrials { trials: usize },
    Grid(PercolationError),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::InvalidTrials { trials } => {
                write!(f, "invalid trial count {trials}: at least one trial is required")
            }
            StatsError::Grid(_) => write!(f, "grid setup failed"),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Grid(e) => Some(e),
            StatsError::InvalidTrials { .. } => None,
        }
    }
}

impl From<PercolationError> for StatsError {
    fn from(e: PercolationError) -> Self {
        StatsError::Grid(e)
    }
}

/// Open random sites on a fresh n×n grid until it percolates.
///
/// Returns the final grid so callers can inspect or render it.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Percolation, PercolationError> {
    let mut grid = Percolation::new(n)?;
    let mut order: Vec<usize> = (0..n * n).collect();
    order.shuffle(rng);

    for index in order {
        let site = index_site(index, n);
        grid.open(site.row, site.col)?;
        if grid.percolates() {
            break;
        }
    }

    Ok(grid)
}

/// RNG for trial `i`: seeded deterministically when a base seed is given
pub fn trial_rng(seed: Option<u64>, trial: usize) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s.wrapping_add(trial as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Results of a threshold estimate
#[derive(Debug, Clone)]
pub struct PercolationStats {
    fractions: Vec<f64>,
}

impl PercolationStats {
    /// Run `config.trials` independent trials on `config.grid_size` grids
    pub fn run(config: &StatsConfig) -> Result<Self, StatsError> {
        if config.trials < 1 {
            return Err(StatsError::InvalidTrials {
                trials: config.trials,
            });
        }
        if config.grid_size < 1 {
            return Err(PercolationError::InvalidGridSize {
                size: config.grid_size,
            }
            .into());
        }

        let n = config.grid_size;
        let fractions = (0..config.trials)
            .into_par_iter()
            .map(|i| {
                let mut rng = trial_rng(config.seed, i);
                run_trial(n, &mut rng).map(|grid| grid.open_fraction())
            })
            .collect::<Result<Vec<f64>, PercolationError>>()?;

        let stats = PercolationStats { fractions };
        log::info!(
            "Estimated threshold over {} trials on {n}x{n}: mean={:.6} stddev={:.6}",
            stats.trials(),
            stats.mean(),
            stats.stddev()
        );
        Ok(stats)
    }

    /// Build from already-measured fractions
    pub fn from_fractions(fractions: Vec<f64>) -> Result<Self, StatsError> {
        if fractions.is_empty() {
            return Err(StatsError::InvalidTrials { trials: 0 });
        }
        Ok(PercolationStats { fractions })
    }

    pub fn trials(&self) -> usize {
        self.fractions.len()
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Sample mean of the percolation threshold
    pub fn mean(&self) -> f64 {
        self.fractions.iter().sum::<f64>() / self.fractions.len() as f64
    }

    /// Sample standard deviation (n - 1 denominator); NaN for a single trial
    pub fn stddev(&self) -> f64 {
        let t = self.fractions.len();
        if t < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let var = self
            .fractions
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>()
            / (t - 1) as f64;
        var.sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}
