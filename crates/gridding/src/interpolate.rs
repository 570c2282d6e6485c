//! Scattered-point interpolation onto a regular grid.

use crate::error::{GriddingError, Result};
use crate::field::GridField;
use crate::triangulate::{barycentric, delaunay};
use crate::Observation;
use obs_common::{BoundingBox, GridSpec};
use std::f64::consts::PI;
use std::str::FromStr;
use tracing::{debug, info};

/// Search radius for the distance-weighted methods, in grid steps.
const SEARCH_RADIUS_STEPS: f64 = 3.0;

/// Supported interpolation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMethod {
    /// Delaunay triangulation with barycentric (linear) weights.
    /// Cells outside the convex hull are left NaN.
    Linear,
    /// Value of the nearest observation.
    Nearest,
    /// Cressman (1959) successive-correction weights within a search radius.
    Cressman,
    /// Barnes (1964) Gaussian weights within a search radius.
    Barnes,
}

impl FromStr for InterpolationMethod {
    type Err = GriddingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(InterpolationMethod::Linear),
            "nearest" => Ok(InterpolationMethod::Nearest),
            "cressman" => Ok(InterpolationMethod::Cressman),
            "barnes" => Ok(InterpolationMethod::Barnes),
            other => Err(GriddingError::UnknownMethod(other.to_string())),
        }
    }
}

/// Interpolate scattered observations onto a regular grid.
///
/// The grid spans the observation bounding box, padded up to whole `hres`
/// steps. Cells the chosen method cannot estimate are NaN.
///
/// # Arguments
/// * `obs` - Cleaned observations (no NaN values, no repeated coordinates)
/// * `method` - Interpolation method
/// * `hres` - Horizontal grid resolution in projected units (meters)
pub fn interpolate(
    obs: &[Observation],
    method: InterpolationMethod,
    hres: f64,
) -> Result<GridField> {
    if obs.is_empty() {
        return Err(GriddingError::NoObservations);
    }
    if hres.is_nan() || hres <= 0.0 {
        return Err(GriddingError::InvalidResolution(hres));
    }

    let xs: Vec<f64> = obs.iter().map(|o| o.x).collect();
    let ys: Vec<f64> = obs.iter().map(|o| o.y).collect();
    // Non-empty by the check above
    let bbox = BoundingBox::of_points(&xs, &ys).ok_or(GriddingError::NoObservations)?;

    let spec = GridSpec::covering(&bbox, hres);
    info!(
        method = ?method,
        nx = spec.nx,
        ny = spec.ny,
        hres,
        points = obs.len(),
        "Interpolating observations to grid"
    );

    let field = match method {
        InterpolationMethod::Linear => interpolate_linear(obs, spec)?,
        InterpolationMethod::Nearest => interpolate_nearest(obs, spec),
        InterpolationMethod::Cressman => {
            interpolate_weighted(obs, spec, WeightKernel::Cressman, SEARCH_RADIUS_STEPS * hres)
        }
        InterpolationMethod::Barnes => {
            interpolate_weighted(obs, spec, WeightKernel::Barnes { kappa: barnes_kappa(hres) }, SEARCH_RADIUS_STEPS * hres)
        }
    };

    debug!(valid = field.valid_count(), total = field.spec.len(), "Grid estimation finished");
    Ok(field)
}

/// TIN interpolation: Delaunay triangulation plus barycentric weights.
fn interpolate_linear(obs: &[Observation], spec: GridSpec) -> Result<GridField> {
    if obs.len() < 3 {
        return Err(GriddingError::TooFewObservations(obs.len()));
    }

    let triangles = delaunay(obs);
    if triangles.is_empty() {
        return Err(GriddingError::DegenerateTriangulation);
    }

    // Triangle bounding boxes let most cells skip the barycentric test
    let tri_boxes: Vec<BoundingBox> = triangles
        .iter()
        .map(|t| {
            let xs = [obs[t.a].x, obs[t.b].x, obs[t.c].x];
            let ys = [obs[t.a].y, obs[t.b].y, obs[t.c].y];
            // Three points are never empty
            BoundingBox::of_points(&xs, &ys).unwrap_or(BoundingBox::new(0.0, 0.0, 0.0, 0.0))
        })
        .collect();

    const EPS: f64 = -1e-10;

    let mut field = GridField::unset(spec);
    for j in 0..field.spec.ny {
        for i in 0..field.spec.nx {
            let (px, py) = match field.spec.index_to_coord(i, j) {
                Some(c) => c,
                None => continue,
            };

            for (tri, tri_box) in triangles.iter().zip(tri_boxes.iter()) {
                if !tri_box.contains_point(px, py) {
                    continue;
                }

                let p0 = &obs[tri.a];
                let p1 = &obs[tri.b];
                let p2 = &obs[tri.c];
                let (u, v, w) = barycentric(px, py, p0, p1, p2);

                if u >= EPS && v >= EPS && w >= EPS {
                    field.set(i, j, u * p0.value + v * p1.value + w * p2.value);
                    break;
                }
            }
        }
    }

    Ok(field)
}

/// Nearest-neighbor interpolation.
fn interpolate_nearest(obs: &[Observation], spec: GridSpec) -> GridField {
    let mut field = GridField::unset(spec);
    for j in 0..field.spec.ny {
        for i in 0..field.spec.nx {
            let (px, py) = match field.spec.index_to_coord(i, j) {
                Some(c) => c,
                None => continue,
            };

            let nearest = obs
                .iter()
                .map(|o| (o.dist_sq(px, py), o.value))
                .min_by(|a, b| a.0.total_cmp(&b.0));

            if let Some((_, value)) = nearest {
                field.set(i, j, value);
            }
        }
    }
    field
}

/// Distance-weighting kernels for the radius-limited methods.
enum WeightKernel {
    /// w = (R² - d²) / (R² + d²)
    Cressman,
    /// w = exp(-d² / κ)
    Barnes { kappa: f64 },
}

/// Barnes response parameter derived from the grid spacing.
fn barnes_kappa(hres: f64) -> f64 {
    5.052 * (2.0 * hres / PI).powi(2)
}

/// Weighted-average interpolation over neighbors within `radius`.
///
/// Cells with no observation inside the search radius stay NaN.
fn interpolate_weighted(
    obs: &[Observation],
    spec: GridSpec,
    kernel: WeightKernel,
    radius: f64,
) -> GridField {
    let radius_sq = radius * radius;

    let mut field = GridField::unset(spec);
    for j in 0..field.spec.ny {
        for i in 0..field.spec.nx {
            let (px, py) = match field.spec.index_to_coord(i, j) {
                Some(c) => c,
                None => continue,
            };

            let mut sum_w = 0.0;
            let mut sum_wz = 0.0;
            for o in obs {
                let dsq = o.dist_sq(px, py);
                if dsq > radius_sq {
                    continue;
                }

                let w = match kernel {
                    WeightKernel::Cressman => (radius_sq - dsq) / (radius_sq + dsq),
                    WeightKernel::Barnes { kappa } => (-dsq / kappa).exp(),
                };
                sum_w += w;
                sum_wz += w * o.value;
            }

            if sum_w > 0.0 {
                field.set(i, j, sum_wz / sum_w);
            }
        }
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5x5 lattice sampling the plane z = x + y.
    fn planar_points() -> Vec<Observation> {
        let mut points = Vec::new();
        for i in 0..5 {
            for j in 0..5 {
                let x = i as f64 * 25.0;
                let y = j as f64 * 25.0;
                points.push(Observation::new(x, y, x + y));
            }
        }
        points
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("linear".parse::<InterpolationMethod>().unwrap(), InterpolationMethod::Linear);
        assert_eq!("barnes".parse::<InterpolationMethod>().unwrap(), InterpolationMethod::Barnes);
        assert!("cubic".parse::<InterpolationMethod>().is_err());
    }

    #[test]
    fn test_linear_reproduces_plane() {
        let field = interpolate(&planar_points(), InterpolationMethod::Linear, 10.0).unwrap();

        let mut checked = 0;
        for j in 0..field.spec.ny {
            for i in 0..field.spec.nx {
                let value = field.get(i, j);
                if value.is_nan() {
                    continue;
                }
                let (x, y) = field.spec.index_to_coord(i, j).unwrap();
                assert!(
                    (value - (x + y)).abs() < 1e-6,
                    "plane should be reproduced exactly at ({}, {}): got {}, want {}",
                    x,
                    y,
                    value,
                    x + y
                );
                checked += 1;
            }
        }
        assert!(checked > 50, "most lattice-interior cells should be valid, got {}", checked);
    }

    #[test]
    fn test_linear_needs_three_points() {
        let obs = vec![
            Observation::new(0.0, 0.0, 1.0),
            Observation::new(10.0, 0.0, 2.0),
        ];
        let err = interpolate(&obs, InterpolationMethod::Linear, 1.0).unwrap_err();
        assert!(matches!(err, GriddingError::TooFewObservations(2)));
    }

    #[test]
    fn test_linear_collinear_is_degenerate() {
        let obs = vec![
            Observation::new(0.0, 0.0, 1.0),
            Observation::new(10.0, 10.0, 2.0),
            Observation::new(20.0, 20.0, 3.0),
        ];
        let err = interpolate(&obs, InterpolationMethod::Linear, 1.0).unwrap_err();
        assert!(matches!(err, GriddingError::DegenerateTriangulation));
    }

    #[test]
    fn test_nearest_at_sample_point() {
        // Observations on lattice points that the grid will also hit
        let obs = vec![
            Observation::new(0.0, 0.0, 1.0),
            Observation::new(10.0, 0.0, 2.0),
            Observation::new(0.0, 10.0, 3.0),
            Observation::new(10.0, 10.0, 4.0),
        ];
        let field = interpolate(&obs, InterpolationMethod::Nearest, 10.0).unwrap();

        assert_eq!(field.get(0, 0), 1.0);
        assert_eq!(field.get(1, 0), 2.0);
        assert_eq!(field.get(0, 1), 3.0);
        assert_eq!(field.get(1, 1), 4.0);
        // Nearest assigns every cell
        assert_eq!(field.valid_count(), field.spec.len());
    }

    #[test]
    fn test_cressman_out_of_radius_is_masked() {
        // Two clusters far apart relative to the search radius
        let obs = vec![
            Observation::new(0.0, 0.0, 1.0),
            Observation::new(1.0, 0.0, 1.0),
            Observation::new(1000.0, 0.0, 9.0),
        ];
        let field = interpolate(&obs, InterpolationMethod::Cressman, 10.0).unwrap();

        // Mid-gap cells have no neighbor within 3 grid steps
        let mid_i = field.spec.nx / 2;
        assert!(
            !field.is_valid(mid_i, 0),
            "cell far from every observation should be masked"
        );
        assert!(field.valid_count() > 0, "cells near observations should be estimated");
    }

    #[test]
    fn test_cressman_matches_lone_observation() {
        let obs = vec![
            Observation::new(0.0, 0.0, 5.0),
            Observation::new(100.0, 0.0, 7.0),
        ];
        let field = interpolate(&obs, InterpolationMethod::Cressman, 10.0).unwrap();

        // The grid origin coincides with the first observation
        assert!((field.get(0, 0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_barnes_smooths_between_values() {
        let obs = vec![
            Observation::new(0.0, 0.0, 0.0),
            Observation::new(20.0, 0.0, 10.0),
        ];
        let field = interpolate(&obs, InterpolationMethod::Barnes, 10.0).unwrap();

        let mid = field.get(1, 0);
        assert!(
            mid > 0.0 && mid < 10.0,
            "midpoint should blend the two observations, got {}",
            mid
        );
    }

    #[test]
    fn test_empty_observations_is_error() {
        let err = interpolate(&[], InterpolationMethod::Nearest, 10.0).unwrap_err();
        assert!(matches!(err, GriddingError::NoObservations));
    }

    #[test]
    fn test_invalid_resolution_is_error() {
        let obs = planar_points();
        assert!(matches!(
            interpolate(&obs, InterpolationMethod::Nearest, 0.0).unwrap_err(),
            GriddingError::InvalidResolution(_)
        ));
        assert!(matches!(
            interpolate(&obs, InterpolationMethod::Nearest, -5.0).unwrap_err(),
            GriddingError::InvalidResolution(_)
        ));
    }

    #[test]
    fn test_grid_covers_observation_bbox() {
        let field = interpolate(&planar_points(), InterpolationMethod::Nearest, 30.0).unwrap();
        let bbox = field.spec.bbox();
        assert!(bbox.min_x <= 0.0 && bbox.max_x >= 100.0);
        assert!(bbox.min_y <= 0.0 && bbox.max_y >= 100.0);
    }
}
