//! Map rendering for surface observation analyses.
//!
//! Composes the output figure in three layers:
//! - base map: ocean fill, land fill, state/province and lake outlines,
//!   coastline, dotted national borders
//! - pseudocolor mesh of the interpolated field (masked cells transparent)
//! - discrete colorbar with tick labels

pub mod basemap;
pub mod canvas;
pub mod colorbar;
pub mod colormap;
pub mod error;
mod features;
mod glyphs;
pub mod mesh;

pub use canvas::MapCanvas;
pub use colormap::{BoundaryNorm, Color, Colormap};
pub use error::{RenderError, Result};

use gridding::GridField;
use image::RgbaImage;
use obs_common::BoundingBox;
use projection::AlbersEqualArea;
use std::path::Path;
use tracing::info;

/// Render the full analysis figure.
///
/// # Arguments
/// * `field` - Interpolated grid in projected coordinates
/// * `proj` - Projection shared by the field and the base map
/// * `extent` - Geodetic view extent (lon/lat degrees)
/// * `width`, `height` - Output figure size in pixels
/// * `cmap`, `norm` - Discrete color mapping for the mesh and colorbar
pub fn render_map(
    field: &GridField,
    proj: &AlbersEqualArea,
    extent: &BoundingBox,
    width: u32,
    height: u32,
    cmap: &Colormap,
    norm: &BoundaryNorm,
) -> RgbaImage {
    let mut canvas = MapCanvas::fit(proj, extent, width, height);

    basemap::draw_base_map(&mut canvas, proj);
    // The mesh overlays the feature lines where data exists
    mesh::draw_mesh(&mut canvas, field, cmap, norm);
    colorbar::draw_colorbar(&mut canvas, cmap, norm);

    info!(width, height, valid_cells = field.valid_count(), "Rendered analysis map");
    canvas.into_image()
}

/// Write a rendered figure as PNG.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    image
        .save_with_format(path.as_ref(), image::ImageFormat::Png)
        .map_err(RenderError::ImageWrite)?;
    info!(path = %path.as_ref().display(), "Wrote figure");
    Ok(())
}
