use super::config::{RenderConfig, Rgb};
use super::ppm::RenderError;
use crate::model::Histogram;

/// A fixed-size grid of RGB pixels, stored top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Draw `histogram` as a bar chart filling the whole image.
    ///
    /// Column `x` shows bin `floor(x / width * bins)`. Bars are scaled so the
    /// most frequent bin reaches the top edge; a histogram with no balls draws
    /// no bars at all.
    pub fn from_histogram(
        histogram: &Histogram,
        config: &RenderConfig,
    ) -> Result<Self, RenderError> {
        if config.width == 0 || config.height == 0 {
            return Err(RenderError::EmptyImage {
                width: config.width,
                height: config.height,
            });
        }

        let max = histogram.max_frequency();
        let bar_heights: Vec<u32> = (0..config.width)
            .map(|x| bar_height(histogram.bins(), max, x, config))
            .collect();

        let mut pixels = Vec::with_capacity(config.width as usize * config.height as usize);
        for y in (0..config.height).rev() {
            for &bar in &bar_heights {
                pixels.push(if y < bar { config.foreground } else { config.background });
            }
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels of row `row`, counted from the top of the image.
    pub fn row(&self, row: u32) -> &[Rgb] {
        let start = row as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.width as usize)
    }

    /// Pixel at column `x`, row `row` from the top.
    pub fn pixel(&self, x: u32, row: u32) -> Rgb {
        self.row(row)[x as usize]
    }
}

/// Height in pixels of the bar drawn in image column `x`.
fn bar_height(bins: &[u64], max: u64, x: u32, config: &RenderConfig) -> u32 {
    if max == 0 || bins.is_empty() {
        return 0;
    }
    let bin = (f64::from(x) / f64::from(config.width) * bins.len() as f64) as usize;
    let bin = bin.min(bins.len() - 1);
    let height = bins[bin] as f64 / max as f64 * f64::from(config.height);
    (height as u32).min(config.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::run_simulation;

    fn count_foreground(raster: &Raster, x: u32, config: &RenderConfig) -> u32 {
        (0..raster.height())
            .filter(|&row| raster.pixel(x, row) == config.foreground)
            .count() as u32
    }

    #[test]
    fn rejects_zero_sized_image() {
        let h = run_simulation(2, 10);
        let err = Raster::from_histogram(&h, &RenderConfig::with_size(0, 5)).unwrap_err();
        assert!(matches!(err, RenderError::EmptyImage { width: 0, height: 5 }));
        assert!(Raster::from_histogram(&h, &RenderConfig::with_size(5, 0)).is_err());
    }

    #[test]
    fn one_column_per_bin_tracks_counts() {
        // num_cols = 1 leaves bin 1 empty, so the middle column is blank.
        let h = run_simulation(1, 100);
        let config = RenderConfig::with_size(3, 10);
        let raster = Raster::from_histogram(&h, &config).unwrap();

        assert_eq!(count_foreground(&raster, 1, &config), 0);
        let peak_x = h.peak_bin() as u32;
        assert_eq!(count_foreground(&raster, peak_x, &config), 10);
    }

    #[test]
    fn bars_grow_from_the_bottom() {
        let h = run_simulation(1, 100);
        let config = RenderConfig::with_size(3, 10);
        let raster = Raster::from_histogram(&h, &config).unwrap();

        for x in 0..3 {
            let column: Vec<Rgb> = (0..10).map(|row| raster.pixel(x, row)).collect();
            let first_fg = column.iter().position(|&c| c == config.foreground).unwrap_or(10);
            assert!(column[first_fg..].iter().all(|&c| c == config.foreground));
        }
    }

    #[test]
    fn partial_bars_round_down() {
        let mut h = Histogram::new(1);
        for bin in [0, 0, 0, 2, 2, 2, 2] {
            h.record(bin);
        }
        let config = RenderConfig::with_size(3, 10);
        let raster = Raster::from_histogram(&h, &config).unwrap();

        // 3/4 of 10 rows is 7.5, drawn as 7.
        let heights: Vec<u32> = (0..3).map(|x| count_foreground(&raster, x, &config)).collect();
        assert_eq!(heights, vec![7, 0, 10]);
    }

    #[test]
    fn empty_histogram_is_all_background() {
        let h = Histogram::new(3);
        let config = RenderConfig::with_size(8, 4);
        let raster = Raster::from_histogram(&h, &config).unwrap();
        assert!(raster.rows().flatten().all(|&c| c == config.background));
    }

    #[test]
    fn wide_image_repeats_bins() {
        let h = run_simulation(1, 100);
        let config = RenderConfig::with_size(30, 5);
        let raster = Raster::from_histogram(&h, &config).unwrap();

        assert_eq!(raster.rows().count(), 5);
        // Columns 0..10 all show bin 0.
        let first = count_foreground(&raster, 0, &config);
        for x in 1..10 {
            assert_eq!(count_foreground(&raster, x, &config), first);
        }
    }
}
