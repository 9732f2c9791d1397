use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::drop::simulate_one_drop;
use crate::model::Histogram;

/// Seed used when none is given, so every default run is reproducible.
pub const DEFAULT_SEED: u64 = 1;

/// Configuration for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Rows of pegs each ball falls through.
    pub num_cols: u32,
    pub num_balls: u64,
    pub seed: u64,
}

impl SimConfig {
    pub fn new(num_cols: u32, num_balls: u64) -> Self {
        Self {
            num_cols,
            num_balls,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Drop `num_balls` balls through `num_cols` rows using the default seed.
pub fn run_simulation(num_cols: u32, num_balls: u64) -> Histogram {
    run(&SimConfig::new(num_cols, num_balls))
}

/// Run the simulation described by `config`.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed always
/// produces the same histogram. The runner owns the generator and lends it to
/// each drop in turn.
pub fn run(config: &SimConfig) -> Histogram {
    tracing::debug!(
        num_cols = config.num_cols,
        num_balls = config.num_balls,
        seed = config.seed,
        "starting simulation"
    );

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut histogram = Histogram::new(config.num_cols);
    for _ in 0..config.num_balls {
        let bin = simulate_one_drop(config.num_cols, &mut rng);
        histogram.record(bin);
    }

    tracing::info!(
        num_cols = config.num_cols,
        num_balls = config.num_balls,
        peak_bin = histogram.peak_bin(),
        max_frequency = histogram.max_frequency(),
        "simulation complete"
    );
    histogram
}
