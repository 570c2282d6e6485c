//! Discrete colorbar rendering.

use crate::canvas::MapCanvas;
use crate::colormap::{BoundaryNorm, Color, Colormap};
use crate::glyphs;

/// Bar width in pixels
const BAR_WIDTH: f32 = 24.0;
/// Fraction of the canvas height the bar occupies
const BAR_SHRINK: f32 = 0.4;
/// Gap between the bar and the canvas right edge
const RIGHT_MARGIN: f32 = 58.0;
/// Tick label stride in level boundaries
const LABEL_STRIDE: usize = 5;

const OUTLINE: Color = Color::opaque(0, 0, 0);
const LABEL: Color = Color::opaque(0, 0, 0);

/// Draw a vertical discrete colorbar at the right edge of the canvas.
///
/// One band per norm bin, lowest level at the bottom, with numeric labels
/// at every [`LABEL_STRIDE`]-th level boundary.
pub fn draw_colorbar(canvas: &mut MapCanvas, cmap: &Colormap, norm: &BoundaryNorm) {
    let height = canvas.height() as f32;
    let width = canvas.width() as f32;

    let bar_height = height * BAR_SHRINK;
    let x0 = width - RIGHT_MARGIN;
    let x1 = x0 + BAR_WIDTH;
    let y_top = (height - bar_height) / 2.0;
    let y_bottom = y_top + bar_height;

    let bins = norm.bins();
    let band_height = bar_height / bins as f32;

    // Bands from the bottom (lowest bin) upwards
    for bin in 0..bins {
        let band_bottom = y_bottom - bin as f32 * band_height;
        let band_top = band_bottom - band_height;
        let color = cmap.evaluate(norm.bin_position(bin));
        canvas.fill_rect(x0, band_top, x1, band_bottom, color);
    }

    // Outline
    let (px0, py0, px1, py1) = (x0 as i64, y_top as i64, x1 as i64, y_bottom as i64);
    for px in px0..=px1 {
        canvas.put_pixel(px, py0, OUTLINE);
        canvas.put_pixel(px, py1, OUTLINE);
    }
    for py in py0..=py1 {
        canvas.put_pixel(px0, py, OUTLINE);
        canvas.put_pixel(px1, py, OUTLINE);
    }

    // Boundary labels
    let levels = norm.levels();
    for (idx, level) in levels.iter().enumerate().step_by(LABEL_STRIDE) {
        let frac = idx as f32 / (levels.len() - 1) as f32;
        let y = y_bottom - frac * bar_height;

        let label = format_level(*level);
        let text_y = y as i64 - glyphs::GLYPH_HEIGHT / 2;
        let text_x = x1 as i64 + 6;

        // Tick mark
        for t in 0..4 {
            canvas.put_pixel(x1 as i64 + t, y as i64, OUTLINE);
        }
        glyphs::draw_text(canvas, text_x, text_y, &label, LABEL);
    }
}

/// Format a level boundary: whole numbers without a decimal point.
fn format_level(level: f64) -> String {
    if level.fract() == 0.0 {
        format!("{}", level as i64)
    } else {
        format!("{:.1}", level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obs_common::BoundingBox;
    use projection::AlbersEqualArea;

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(-20.0), "-20");
        assert_eq!(format_level(0.0), "0");
        assert_eq!(format_level(2.5), "2.5");
    }

    #[test]
    fn test_colorbar_paints_end_bin_colors() {
        let proj = AlbersEqualArea::conus();
        let extent = BoundingBox::new(-120.0, 20.0, -70.0, 50.0);
        let mut canvas = MapCanvas::fit(&proj, &extent, 600, 400);

        let cmap = Colormap::magma();
        let norm = BoundaryNorm::unit_range(-20, 20).unwrap();
        draw_colorbar(&mut canvas, &cmap, &norm);
        let img = canvas.into_image();

        let lowest = cmap.evaluate(0.0);
        let highest = cmap.evaluate(1.0);
        let has = |c: Color| {
            img.pixels().any(|p| p.0 == [c.r, c.g, c.b, c.a])
        };
        assert!(has(lowest), "lowest bin color should appear in the bar");
        assert!(has(highest), "highest bin color should appear in the bar");
    }
}
