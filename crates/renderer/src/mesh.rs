//! Pseudocolor mesh rendering of an interpolated grid.

use crate::canvas::MapCanvas;
use crate::colormap::{BoundaryNorm, Colormap};
use gridding::GridField;

/// Draw the grid as a pseudocolor mesh.
///
/// Each cell with a valid value fills the projected rectangle centered on
/// its grid point; masked (NaN) cells are skipped so the base map shows
/// through.
pub fn draw_mesh(canvas: &mut MapCanvas, field: &GridField, cmap: &Colormap, norm: &BoundaryNorm) {
    let half_dx = field.spec.dx / 2.0;
    let half_dy = field.spec.dy / 2.0;

    for j in 0..field.spec.ny {
        for i in 0..field.spec.nx {
            let value = field.get(i, j);
            if value.is_nan() {
                continue;
            }

            let (cx, cy) = match field.spec.index_to_coord(i, j) {
                Some(c) => c,
                None => continue,
            };

            let (px0, py0) = canvas.to_pixel(cx - half_dx, cy + half_dy);
            let (px1, py1) = canvas.to_pixel(cx + half_dx, cy - half_dy);

            canvas.fill_rect(px0, py0, px1, py1, norm.color(value, cmap));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridding::{interpolate, InterpolationMethod, Observation};
    use obs_common::BoundingBox;
    use projection::AlbersEqualArea;

    #[test]
    fn test_mesh_paints_valid_cells_only() {
        let proj = AlbersEqualArea::conus();
        let extent = BoundingBox::new(-120.0, 20.0, -70.0, 50.0);
        let mut canvas = MapCanvas::fit(&proj, &extent, 300, 200);

        // A small cluster of observations near the projection origin with a
        // value below the level range: every painted cell clips to bin 0
        let obs: Vec<Observation> = vec![
            Observation::new(0.0, 0.0, -30.0),
            Observation::new(200_000.0, 0.0, -30.0),
            Observation::new(0.0, 200_000.0, -30.0),
        ];
        let field = interpolate(&obs, InterpolationMethod::Linear, 50_000.0).unwrap();
        assert!(field.valid_count() > 0);

        let cmap = Colormap::magma();
        let norm = BoundaryNorm::unit_range(-20, 20).unwrap();
        let expected = norm.color(-30.0, &cmap);

        draw_mesh(&mut canvas, &field, &cmap, &norm);
        let img = canvas.into_image();

        let painted = img
            .pixels()
            .filter(|p| p.0 == [expected.r, expected.g, expected.b, expected.a])
            .count();
        assert!(painted > 0, "mesh should paint cells inside the hull");

        // Untouched pixels keep the canvas background
        let background = img.pixels().filter(|p| p.0 == [255, 255, 255, 255]).count();
        assert!(background > 0, "masked area should leave the background visible");
    }
}
