pub mod cli;
pub mod logging;
pub mod model;
pub mod render;
pub mod sim;

pub use model::Histogram;
pub use render::{RenderConfig, RenderError, Rgb, render_ppm};
pub use sim::{SimConfig, run_simulation, simulate_one_drop};
