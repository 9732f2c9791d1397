use std::io::{self, BufWriter, Write};

use thiserror::Error;

use super::config::RenderConfig;
use super::raster::Raster;
use crate::model::Histogram;

/// Largest channel value declared in the header.
const MAX_CHANNEL: u8 = 255;

/// Errors raised while rendering a histogram image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image must have non-zero size, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
}

/// Write `raster` as a plain-text PPM (`P3`) image.
///
/// Every pixel is written as `R G B ` and every row ends with a newline,
/// top row first.
pub fn write_ppm<W: Write>(raster: &Raster, writer: W) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", raster.width(), raster.height())?;
    writeln!(writer, "{MAX_CHANNEL}")?;
    for row in raster.rows() {
        for pixel in row {
            write!(writer, "{} {} {} ", pixel.r, pixel.g, pixel.b)?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Render `histogram` as a bar chart and write it to `writer` as PPM.
pub fn render_ppm<W: Write>(
    histogram: &Histogram,
    config: &RenderConfig,
    writer: W,
) -> Result<(), RenderError> {
    let raster = Raster::from_histogram(histogram, config)?;
    write_ppm(&raster, writer)?;
    Ok(())
}
