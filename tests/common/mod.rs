use std::process::{Command, Output};

/// A decoded plain-text PPM image.
pub struct Ppm {
    pub width: usize,
    pub height: usize,
    pub max_value: u32,
    /// Pixels top row first.
    pub pixels: Vec<[u8; 3]>,
}

impl Ppm {
    pub fn pixel(&self, x: usize, row: usize) -> [u8; 3] {
        self.pixels[row * self.width + x]
    }

    /// Number of pixels in column `x` with the given color.
    pub fn column_count(&self, x: usize, color: [u8; 3]) -> usize {
        (0..self.height).filter(|&row| self.pixel(x, row) == color).count()
    }
}

pub const GREEN: [u8; 3] = [0, 255, 0];
pub const PURPLE: [u8; 3] = [128, 0, 128];

pub fn parse_ppm(text: &str) -> Ppm {
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));
    let dims: Vec<usize> = lines
        .next()
        .unwrap()
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    let max_value: u32 = lines.next().unwrap().parse().unwrap();

    let mut pixels = Vec::with_capacity(dims[0] * dims[1]);
    let mut rows = 0;
    for line in lines {
        let values: Vec<u8> = line.split_whitespace().map(|t| t.parse().unwrap()).collect();
        assert_eq!(values.len(), dims[0] * 3, "row {rows} has the wrong pixel count");
        pixels.extend(values.chunks(3).map(|c| [c[0], c[1], c[2]]));
        rows += 1;
    }
    assert_eq!(rows, dims[1]);

    Ppm {
        width: dims[0],
        height: dims[1],
        max_value,
        pixels,
    }
}

pub fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_galton-board"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}
