//! Base map drawing: ocean, land, feature outlines.

use crate::canvas::MapCanvas;
use crate::colormap::Color;
use crate::features;
use image::Rgba;
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use projection::AlbersEqualArea;

/// Ocean fill (standard physical-feature water color)
const OCEAN: Color = Color::opaque(151, 181, 225);
/// Land fill
const LAND: Color = Color::opaque(255, 255, 255);
/// Coastline stroke
const COASTLINE: Color = Color::opaque(0, 0, 0);
/// National border stroke (drawn dotted)
const BORDER: Color = Color::opaque(0, 0, 0);
/// State/province and lake outline stroke
const STATE: Color = Color::opaque(105, 105, 105);

/// Dash pattern for national borders, in pixels
const BORDER_DASH: f32 = 6.0;
const BORDER_GAP: f32 = 5.0;

/// Draw the base map layers onto the canvas.
///
/// Order matters: ocean underneath, land fill over it, then line features.
pub fn draw_base_map(canvas: &mut MapCanvas, proj: &AlbersEqualArea) {
    fill_ocean(canvas);
    fill_land(canvas, proj);

    for ring in features::LAKES {
        draw_polyline(canvas, proj, ring, STATE);
    }
    for line in features::STATES {
        draw_polyline(canvas, proj, line, STATE);
    }

    let coast = &features::LAND[features::COAST_START..features::COAST_END];
    draw_polyline(canvas, proj, coast, COASTLINE);

    for line in features::BORDERS {
        draw_dashed_polyline(canvas, proj, line, BORDER);
    }
}

/// Flood the whole canvas with the ocean color.
fn fill_ocean(canvas: &mut MapCanvas) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    canvas.fill_rect(0.0, 0.0, w, h, OCEAN);
}

/// Fill the land ring.
fn fill_land(canvas: &mut MapCanvas, proj: &AlbersEqualArea) {
    let mut points: Vec<Point<i32>> = Vec::with_capacity(features::LAND.len());
    for &(lon, lat) in features::LAND {
        let (x, y) = proj.forward(lat, lon);
        let (px, py) = canvas.to_pixel(x, y);
        let p = Point::new(px.round() as i32, py.round() as i32);
        // draw_polygon_mut rejects repeated consecutive vertices
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    if points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return;
    }

    draw_polygon_mut(
        canvas.image_mut(),
        &points,
        Rgba([LAND.r, LAND.g, LAND.b, LAND.a]),
    );
}

/// Project a geodetic polyline and stroke it.
fn draw_polyline(
    canvas: &mut MapCanvas,
    proj: &AlbersEqualArea,
    line: &[(f64, f64)],
    color: Color,
) {
    let pixels = project_polyline(canvas, proj, line);
    let rgba = Rgba([color.r, color.g, color.b, color.a]);
    for pair in pixels.windows(2) {
        draw_line_segment_mut(canvas.image_mut(), pair[0], pair[1], rgba);
    }
}

/// Project a geodetic polyline and stroke it with a dash pattern.
fn draw_dashed_polyline(
    canvas: &mut MapCanvas,
    proj: &AlbersEqualArea,
    line: &[(f64, f64)],
    color: Color,
) {
    let pixels = project_polyline(canvas, proj, line);
    let rgba = Rgba([color.r, color.g, color.b, color.a]);

    // Carry the dash phase across segments so corners do not reset it
    let mut phase = 0.0f32;
    let period = BORDER_DASH + BORDER_GAP;

    for pair in pixels.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        let len = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
        if len < f32::EPSILON {
            continue;
        }

        // Minimum advance keeps the loop finite under f32 rounding
        const MIN_STEP: f32 = 0.05;

        let mut along = 0.0f32;
        while along < len {
            let in_dash = phase < BORDER_DASH;
            let boundary = if in_dash { BORDER_DASH } else { period };
            let run = (boundary - phase).min(len - along).max(MIN_STEP);

            if in_dash {
                let t0 = along / len;
                let t1 = (along + run) / len;
                draw_line_segment_mut(
                    canvas.image_mut(),
                    (x0 + (x1 - x0) * t0, y0 + (y1 - y0) * t0),
                    (x0 + (x1 - x0) * t1, y0 + (y1 - y0) * t1),
                    rgba,
                );
            }

            along += run;
            phase = (phase + run) % period;
        }
    }
}

/// Project the vertices of a geodetic polyline to pixel coordinates.
fn project_polyline(
    canvas: &MapCanvas,
    proj: &AlbersEqualArea,
    line: &[(f64, f64)],
) -> Vec<(f32, f32)> {
    line.iter()
        .map(|&(lon, lat)| {
            let (x, y) = proj.forward(lat, lon);
            canvas.to_pixel(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use obs_common::BoundingBox;

    #[test]
    fn test_base_map_draws_ocean_and_land() {
        let proj = AlbersEqualArea::conus();
        let extent = BoundingBox::new(-120.0, 20.0, -70.0, 50.0);
        let mut canvas = MapCanvas::fit(&proj, &extent, 300, 200);

        draw_base_map(&mut canvas, &proj);
        let img = canvas.into_image();

        let mut ocean = 0usize;
        let mut land = 0usize;
        for pixel in img.pixels() {
            match pixel.0 {
                [151, 181, 225, 255] => ocean += 1,
                [255, 255, 255, 255] => land += 1,
                _ => {}
            }
        }

        assert!(ocean > 1000, "expected ocean pixels, got {}", ocean);
        assert!(land > 1000, "expected land pixels, got {}", land);
        assert!(
            land > ocean / 4,
            "CONUS view should be substantially land: land {}, ocean {}",
            land,
            ocean
        );
    }

    #[test]
    fn test_land_ring_is_well_formed() {
        assert!(features::LAND.len() >= 3);
        // All vertices sit within the advertised extent
        for &(lon, lat) in features::LAND {
            assert!((-120.5..=-69.5).contains(&lon), "lon {} outside extent", lon);
            assert!((19.5..=50.5).contains(&lat), "lat {} outside extent", lat);
        }
    }

    #[test]
    fn test_lake_rings_close() {
        for ring in features::LAKES {
            assert_eq!(ring.first(), ring.last(), "lake rings must close");
            assert!(ring.len() >= 4);
        }
    }
}
