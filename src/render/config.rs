/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Configuration for rendering a histogram as a bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Color of the bars.
    pub foreground: Rgb,
    /// Color above the bars.
    pub background: Rgb,
}

impl RenderConfig {
    /// Default colors at the given size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            foreground: Rgb::GREEN,
            background: Rgb::PURPLE,
        }
    }
}
