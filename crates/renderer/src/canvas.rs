//! Figure canvas and the projected-coordinate viewport.

use crate::colormap::Color;
use image::{Rgba, RgbaImage};
use obs_common::BoundingBox;
use projection::{projected_bounds, AlbersEqualArea};

/// Figure background (matches an unstyled figure)
const BACKGROUND: Color = Color::opaque(255, 255, 255);

/// An RGBA canvas with an affine transform from projected coordinates to
/// pixels.
///
/// The viewport is fitted so the projected extent fills the canvas while
/// preserving aspect ratio; y increases north in projected space and down
/// in pixel space.
pub struct MapCanvas {
    img: RgbaImage,
    bounds: BoundingBox,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl MapCanvas {
    /// Create a canvas fitted to the projected image of a geodetic extent.
    pub fn fit(proj: &AlbersEqualArea, extent: &BoundingBox, width: u32, height: u32) -> Self {
        let bounds = projected_bounds(proj, extent);

        let scale_x = width as f64 / bounds.width();
        let scale_y = height as f64 / bounds.height();
        let scale = scale_x.min(scale_y);

        // Center the fitted view in the canvas
        let offset_x = (width as f64 - bounds.width() * scale) / 2.0;
        let offset_y = (height as f64 - bounds.height() * scale) / 2.0;

        let img = RgbaImage::from_pixel(
            width,
            height,
            Rgba([BACKGROUND.r, BACKGROUND.g, BACKGROUND.b, BACKGROUND.a]),
        );

        Self {
            img,
            bounds,
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Projected bounds covered by the viewport.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Map projected coordinates to (possibly off-canvas) pixel coordinates.
    pub fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let px = self.offset_x + (x - self.bounds.min_x) * self.scale;
        let py = self.img.height() as f64
            - (self.offset_y + (y - self.bounds.min_y) * self.scale);
        (px as f32, py as f32)
    }

    /// Set one pixel, ignoring out-of-bounds coordinates.
    pub fn put_pixel(&mut self, px: i64, py: i64, color: Color) {
        if px < 0 || py < 0 || px >= self.img.width() as i64 || py >= self.img.height() as i64 {
            return;
        }
        self.img
            .put_pixel(px as u32, py as u32, Rgba([color.r, color.g, color.b, color.a]));
    }

    /// Fill an axis-aligned pixel rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let (width, height) = (self.img.width() as i64, self.img.height() as i64);

        let px0 = (x0.min(x1).floor() as i64).max(0);
        let py0 = (y0.min(y1).floor() as i64).max(0);
        let px1 = (x0.max(x1).ceil() as i64).min(width);
        let py1 = (y0.max(y1).ceil() as i64).min(height);

        let pixel = Rgba([color.r, color.g, color.b, color.a]);
        for py in py0..py1 {
            for px in px0..px1 {
                self.img.put_pixel(px as u32, py as u32, pixel);
            }
        }
    }

    /// Mutable access to the underlying image for imageproc drawing.
    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.img
    }

    /// Consume the canvas and return the composed image.
    pub fn into_image(self) -> RgbaImage {
        self.img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> MapCanvas {
        let proj = AlbersEqualArea::conus();
        let extent = BoundingBox::new(-120.0, 20.0, -70.0, 50.0);
        MapCanvas::fit(&proj, &extent, 1500, 1000)
    }

    #[test]
    fn test_viewport_keeps_points_on_canvas() {
        let proj = AlbersEqualArea::conus();
        let canvas = canvas();

        for &(lat, lon) in &[(38.0, -97.0), (21.0, -115.0), (49.5, -72.0)] {
            let (x, y) = proj.forward(lat, lon);
            let (px, py) = canvas.to_pixel(x, y);
            assert!(
                px >= 0.0 && px <= 1500.0 && py >= 0.0 && py <= 1000.0,
                "({}, {}) mapped off-canvas to ({}, {})",
                lat,
                lon,
                px,
                py
            );
        }
    }

    #[test]
    fn test_north_is_up() {
        let proj = AlbersEqualArea::conus();
        let canvas = canvas();

        let (_, y_south) = proj.forward(25.0, -97.0);
        let (_, y_north) = proj.forward(48.0, -97.0);
        let (_, py_south) = canvas.to_pixel(0.0, y_south);
        let (_, py_north) = canvas.to_pixel(0.0, y_north);

        assert!(py_north < py_south, "north must map to smaller pixel row");
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = canvas();
        // Entirely off-canvas rect must not panic
        canvas.fill_rect(-100.0, -100.0, -50.0, -50.0, Color::opaque(1, 2, 3));
        // Partially off-canvas rect fills the visible part
        canvas.fill_rect(-5.0, -5.0, 5.0, 5.0, Color::opaque(1, 2, 3));
        assert_eq!(canvas.into_image().get_pixel(0, 0).0, [1, 2, 3, 255]);
    }

    #[test]
    fn test_put_pixel_ignores_out_of_bounds() {
        let mut canvas = canvas();
        canvas.put_pixel(-1, 0, Color::opaque(9, 9, 9));
        canvas.put_pixel(0, 100_000, Color::opaque(9, 9, 9));
    }
}
