//! Colormaps and discrete boundary normalization.

use crate::error::{RenderError, Result};

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }
}

/// A color stop: position in [0, 1] mapped to a color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Color::opaque(r, g, b),
        }
    }
}

/// Magma perceptual ramp: near-black through purple and orange to pale
/// yellow.
const MAGMA_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 0, 0, 4),
    ColorStop::new(0.111, 20, 14, 54),
    ColorStop::new(0.222, 59, 15, 112),
    ColorStop::new(0.333, 100, 26, 128),
    ColorStop::new(0.444, 140, 41, 129),
    ColorStop::new(0.556, 183, 55, 121),
    ColorStop::new(0.667, 222, 73, 104),
    ColorStop::new(0.778, 247, 112, 92),
    ColorStop::new(0.889, 254, 159, 109),
    ColorStop::new(1.000, 252, 253, 191),
];

/// A multi-stop interpolated colormap.
#[derive(Debug, Clone)]
pub struct Colormap {
    stops: &'static [ColorStop],
}

impl Colormap {
    /// The magma colormap.
    pub fn magma() -> Self {
        Self { stops: MAGMA_STOPS }
    }

    /// Evaluate the colormap at normalized position `t` ∈ [0, 1].
    ///
    /// Positions outside the range clamp to the end colors.
    pub fn evaluate(&self, t: f64) -> Color {
        let stops = self.stops;
        if t <= 0.0 {
            return stops[0].color;
        }
        if t >= 1.0 {
            return stops[stops.len() - 1].color;
        }

        for i in 1..stops.len() {
            if t <= stops[i].t {
                let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
                return lerp_color(stops[i - 1].color, stops[i].color, ratio);
            }
        }
        stops[stops.len() - 1].color
    }
}

/// Linear color interpolation
fn lerp_color(c1: Color, c2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::new(lerp(c1.r, c2.r), lerp(c1.g, c2.g), lerp(c1.b, c2.b), lerp(c1.a, c2.a))
}

/// Discrete normalization over ordered level boundaries.
///
/// `L` levels define `L - 1` bins; a value maps to the bin containing it.
/// Values outside the levels clip to the first or last bin.
#[derive(Debug, Clone)]
pub struct BoundaryNorm {
    levels: Vec<f64>,
}

impl BoundaryNorm {
    /// Create a norm from ascending level boundaries.
    pub fn new(levels: Vec<f64>) -> Result<Self> {
        if levels.len() < 2 || levels.windows(2).any(|w| w[0] >= w[1]) {
            return Err(RenderError::InvalidLevels);
        }
        Ok(Self { levels })
    }

    /// Integer level range `[start, end)` with unit step.
    pub fn unit_range(start: i32, end: i32) -> Result<Self> {
        Self::new((start..end).map(f64::from).collect())
    }

    /// Level boundaries.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.levels.len() - 1
    }

    /// Index of the bin containing `value`, clipped to the end bins.
    pub fn bin_index(&self, value: f64) -> usize {
        if value < self.levels[0] {
            return 0;
        }
        let last = self.bins() - 1;
        for (i, pair) in self.levels.windows(2).enumerate() {
            if value < pair[1] {
                return i;
            }
        }
        last
    }

    /// Colormap position of a bin, spreading bins across the full ramp.
    pub fn bin_position(&self, bin: usize) -> f64 {
        if self.bins() <= 1 {
            return 0.0;
        }
        bin as f64 / (self.bins() - 1) as f64
    }

    /// Color for `value` under this norm.
    pub fn color(&self, value: f64, cmap: &Colormap) -> Color {
        cmap.evaluate(self.bin_position(self.bin_index(value)))
    }
}
