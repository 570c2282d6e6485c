//! Regular grid specifications for interpolated fields.

use crate::BoundingBox;
use serde::{Deserialize, Serialize};

/// Specification of a regular projected grid.
///
/// Grid points run west to east (`i`) and south to north (`j`); values
/// associated with the grid are stored row-major with `j * nx + i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of points in X direction
    pub nx: usize,
    /// Number of points in Y direction
    pub ny: usize,
    /// Grid spacing in X direction (meters)
    pub dx: f64,
    /// Grid spacing in Y direction (meters)
    pub dy: f64,
    /// First grid point X
    pub first_x: f64,
    /// First grid point Y
    pub first_y: f64,
}

impl GridSpec {
    /// Create a new grid specification.
    pub fn new(nx: usize, ny: usize, dx: f64, dy: f64, first_x: f64, first_y: f64) -> Self {
        Self {
            nx,
            ny,
            dx,
            dy,
            first_x,
            first_y,
        }
    }

    /// Build the grid spanning `bbox` with horizontal resolution `hres`,
    /// padded up to whole steps so the far edge is covered.
    pub fn covering(bbox: &BoundingBox, hres: f64) -> Self {
        let nx = (bbox.width() / hres).ceil() as usize + 1;
        let ny = (bbox.height() / hres).ceil() as usize + 1;
        Self::new(nx, ny, hres, hres, bbox.min_x, bbox.min_y)
    }

    /// Calculate the bounding box of this grid.
    pub fn bbox(&self) -> BoundingBox {
        let last_x = self.first_x + (self.nx - 1) as f64 * self.dx;
        let last_y = self.first_y + (self.ny - 1) as f64 * self.dy;

        BoundingBox {
            min_x: self.first_x.min(last_x),
            min_y: self.first_y.min(last_y),
            max_x: self.first_x.max(last_x),
            max_y: self.first_y.max(last_y),
        }
    }

    /// Convert a grid index to coordinates.
    pub fn index_to_coord(&self, i: usize, j: usize) -> Option<(f64, f64)> {
        if i >= self.nx || j >= self.ny {
            return None;
        }

        Some((
            self.first_x + i as f64 * self.dx,
            self.first_y + j as f64 * self.dy,
        ))
    }

    /// Get the 1D array index for a 2D grid position.
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// Check if grid is empty.
    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covering_pads_to_whole_steps() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 4.0);
        let spec = GridSpec::covering(&bbox, 3.0);

        // 10 / 3 -> 4 steps -> 5 points; 4 / 3 -> 2 steps -> 3 points
        assert_eq!(spec.nx, 5);
        assert_eq!(spec.ny, 3);

        let covered = spec.bbox();
        assert!(covered.max_x >= bbox.max_x);
        assert!(covered.max_y >= bbox.max_y);
    }

    #[test]
    fn test_index_to_coord() {
        let spec = GridSpec::new(3, 2, 10.0, 10.0, 100.0, 200.0);

        let (x, y) = spec.index_to_coord(0, 0).unwrap();
        assert_eq!((x, y), (100.0, 200.0));

        let (x, y) = spec.index_to_coord(2, 1).unwrap();
        assert_eq!((x, y), (120.0, 210.0));

        assert!(spec.index_to_coord(3, 0).is_none());
    }

    #[test]
    fn test_flat_index_row_major() {
        let spec = GridSpec::new(4, 3, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(spec.flat_index(0, 0), 0);
        assert_eq!(spec.flat_index(3, 0), 3);
        assert_eq!(spec.flat_index(0, 1), 4);
        assert_eq!(spec.flat_index(3, 2), 11);
        assert_eq!(spec.len(), 12);
    }
}
