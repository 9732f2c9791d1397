mod config;
mod ppm;
mod raster;

pub use config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderConfig, Rgb};
pub use ppm::{RenderError, render_ppm, write_ppm};
pub use raster::Raster;
