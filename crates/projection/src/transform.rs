//! Batch coordinate transforms for observation arrays.

use crate::albers::AlbersEqualArea;
use obs_common::BoundingBox;
use thiserror::Error;
use tracing::error;

/// Errors raised when a coordinate transform cannot be completed.
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Coordinate arrays have mismatched lengths: {lons} longitudes, {lats} latitudes")]
    LengthMismatch { lons: usize, lats: usize },

    #[error("Infinite coordinate at index {index}: lat {lat}, lon {lon}")]
    InfiniteCoordinate { index: usize, lat: f64, lon: f64 },

    #[error("Latitude out of range at index {index}: {lat}")]
    LatitudeOutOfRange { index: usize, lat: f64 },
}

/// Project parallel longitude/latitude arrays to projected (x, y) arrays.
///
/// A NaN coordinate marks a station with a missing position: it projects
/// to (NaN, NaN) and is dropped by the downstream NaN filter. Infinite or
/// out-of-range coordinates are corrupt input; the transform fails as a
/// whole, the error logged and returned for the caller to propagate.
pub fn project_observations(
    proj: &AlbersEqualArea,
    lons: &[f64],
    lats: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), ProjectionError> {
    if lons.len() != lats.len() {
        let err = ProjectionError::LengthMismatch {
            lons: lons.len(),
            lats: lats.len(),
        };
        error!(%err, "Coordinate transform failed");
        return Err(err);
    }

    let mut xs = Vec::with_capacity(lons.len());
    let mut ys = Vec::with_capacity(lats.len());

    for (index, (&lon, &lat)) in lons.iter().zip(lats.iter()).enumerate() {
        if lon.is_nan() || lat.is_nan() {
            xs.push(f64::NAN);
            ys.push(f64::NAN);
            continue;
        }
        if lon.is_infinite() || lat.is_infinite() {
            let err = ProjectionError::InfiniteCoordinate { index, lat, lon };
            error!(%err, "Coordinate transform failed");
            return Err(err);
        }
        if !(-90.0..=90.0).contains(&lat) {
            let err = ProjectionError::LatitudeOutOfRange { index, lat };
            error!(%err, "Coordinate transform failed");
            return Err(err);
        }

        let (x, y) = proj.forward(lat, lon);
        xs.push(x);
        ys.push(y);
    }

    Ok((xs, ys))
}

/// Projected bounding box of a geodetic extent rectangle.
///
/// A lat/lon rectangle does not project to a rectangle under a conic
/// projection; the edges are curved. The rectangle edges are sampled to
/// find the enclosing projected box.
pub fn projected_bounds(proj: &AlbersEqualArea, extent: &BoundingBox) -> BoundingBox {
    const SAMPLES: usize = 24;

    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    let mut take = |x: f64, y: f64| {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    };

    for t in 0..=SAMPLES {
        let frac = t as f64 / SAMPLES as f64;
        let lon = extent.min_x + frac * extent.width();
        let lat = extent.min_y + frac * extent.height();

        // Bottom and top edges
        let (x, y) = proj.forward(extent.min_y, lon);
        take(x, y);
        let (x, y) = proj.forward(extent.max_y, lon);
        take(x, y);

        // Left and right edges
        let (x, y) = proj.forward(lat, extent.min_x);
        take(x, y);
        let (x, y) = proj.forward(lat, extent.max_x);
        take(x, y);
    }

    BoundingBox::new(min_x, min_y, max_x, max_y)
}
