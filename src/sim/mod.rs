mod drop;
mod runner;

pub use drop::simulate_one_drop;
pub use runner::{DEFAULT_SEED, SimConfig, run, run_simulation};
