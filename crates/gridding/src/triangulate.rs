//! Delaunay triangulation of scattered observations.
//!
//! Incremental Bowyer-Watson construction. Observation counts here are
//! station networks (hundreds of points), so the O(n²) insertion loop is
//! fine.

use crate::Observation;

/// A triangle referencing observation indices.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }
}

struct Circumcircle {
    cx: f64,
    cy: f64,
    radius_sq: f64,
}

/// Circumcircle of three points; `None` for degenerate (collinear) input.
fn circumcircle(p0: &Observation, p1: &Observation, p2: &Observation) -> Option<Circumcircle> {
    let d = 2.0
        * (p0.x * (p1.y - p2.y) + p1.x * (p2.y - p0.y) + p2.x * (p0.y - p1.y));
    if d.abs() < 1e-12 {
        return None;
    }

    let sq0 = p0.x * p0.x + p0.y * p0.y;
    let sq1 = p1.x * p1.x + p1.y * p1.y;
    let sq2 = p2.x * p2.x + p2.y * p2.y;

    let cx = (sq0 * (p1.y - p2.y) + sq1 * (p2.y - p0.y) + sq2 * (p0.y - p1.y)) / d;
    let cy = (sq0 * (p2.x - p1.x) + sq1 * (p0.x - p2.x) + sq2 * (p1.x - p0.x)) / d;

    let dx = p0.x - cx;
    let dy = p0.y - cy;

    Some(Circumcircle {
        cx,
        cy,
        radius_sq: dx * dx + dy * dy,
    })
}

/// Barycentric coordinates of (px, py) within triangle (p0, p1, p2).
///
/// The interpolated value at the point is `u*v0 + v*v1 + w*v2`; the point
/// is inside the triangle when all three weights are non-negative.
pub fn barycentric(
    px: f64,
    py: f64,
    p0: &Observation,
    p1: &Observation,
    p2: &Observation,
) -> (f64, f64, f64) {
    let e0x = p1.x - p0.x;
    let e0y = p1.y - p0.y;
    let e1x = p2.x - p0.x;
    let e1y = p2.y - p0.y;
    let e2x = px - p0.x;
    let e2y = py - p0.y;

    let dot00 = e0x * e0x + e0y * e0y;
    let dot01 = e0x * e1x + e0y * e1y;
    let dot02 = e0x * e2x + e0y * e2y;
    let dot11 = e1x * e1x + e1y * e1y;
    let dot12 = e1x * e2x + e1y * e2y;

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    let v = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let w = (dot00 * dot12 - dot01 * dot02) * inv_denom;
    let u = 1.0 - v - w;

    (u, v, w)
}

/// Build the Delaunay triangulation of the observation set.
///
/// Returns triangles referencing indices into `points`. Fewer than 3
/// points, or a fully collinear set, yields an empty triangulation.
pub fn delaunay(points: &[Observation]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    // Super-triangle enclosing every observation
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let span = (max_x - min_x).max(max_y - min_y).max(1.0);

    let mut vertices: Vec<Observation> = vec![
        Observation::new(min_x - 10.0 * span, min_y - span, 0.0),
        Observation::new(min_x + 0.5 * (max_x - min_x), max_y + 10.0 * span, 0.0),
        Observation::new(max_x + 10.0 * span, min_y - span, 0.0),
    ];

    let mut triangles = vec![Triangle { a: 0, b: 1, c: 2 }];

    for point in points {
        let vi = vertices.len();
        vertices.push(*point);

        // Triangles whose circumcircle contains the new point are invalid
        let mut bad: Vec<usize> = Vec::new();
        for (ti, tri) in triangles.iter().enumerate() {
            if let Some(cc) = circumcircle(&vertices[tri.a], &vertices[tri.b], &vertices[tri.c]) {
                let dx = point.x - cc.cx;
                let dy = point.y - cc.cy;
                if dx * dx + dy * dy <= cc.radius_sq {
                    bad.push(ti);
                }
            }
        }

        // Boundary of the cavity: edges belonging to exactly one bad triangle
        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for &bi in &bad {
            for (ea, eb) in triangles[bi].edges() {
                let shared = bad.iter().any(|&oi| {
                    oi != bi
                        && triangles[oi]
                            .edges()
                            .iter()
                            .any(|&(oa, ob)| (oa == ea && ob == eb) || (oa == eb && ob == ea))
                });
                if !shared {
                    boundary.push((ea, eb));
                }
            }
        }

        // Remove bad triangles in reverse index order so swaps stay valid
        bad.sort_unstable_by(|a, b| b.cmp(a));
        for bi in bad {
            triangles.swap_remove(bi);
        }

        // Retriangulate the cavity against the new vertex
        for (ea, eb) in boundary {
            triangles.push(Triangle { a: ea, b: eb, c: vi });
        }
    }

    // Drop triangles touching the super-triangle and rebase indices
    triangles.retain(|t| t.a >= 3 && t.b >= 3 && t.c >= 3);
    for t in &mut triangles {
        t.a -= 3;
        t.b -= 3;
        t.c -= 3;
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Observation> {
        vec![
            Observation::new(0.0, 0.0, 1.0),
            Observation::new(10.0, 0.0, 2.0),
            Observation::new(10.0, 10.0, 3.0),
            Observation::new(0.0, 10.0, 4.0),
        ]
    }

    #[test]
    fn test_square_makes_two_triangles() {
        let tris = delaunay(&square());
        assert_eq!(tris.len(), 2, "4 corner points should triangulate into 2 triangles");
    }

    #[test]
    fn test_too_few_points() {
        assert!(delaunay(&square()[..2]).is_empty());
    }

    #[test]
    fn test_collinear_points_give_no_triangles() {
        let points = vec![
            Observation::new(0.0, 0.0, 1.0),
            Observation::new(1.0, 1.0, 2.0),
            Observation::new(2.0, 2.0, 3.0),
        ];
        assert!(delaunay(&points).is_empty());
    }

    #[test]
    fn test_triangles_reference_input_indices() {
        let points = square();
        for tri in delaunay(&points) {
            assert!(tri.a < points.len());
            assert!(tri.b < points.len());
            assert!(tri.c < points.len());
        }
    }

    #[test]
    fn test_barycentric_vertices_and_centroid() {
        let p0 = Observation::new(0.0, 0.0, 0.0);
        let p1 = Observation::new(10.0, 0.0, 0.0);
        let p2 = Observation::new(0.0, 10.0, 0.0);

        let (u, v, w) = barycentric(0.0, 0.0, &p0, &p1, &p2);
        assert!((u - 1.0).abs() < 1e-10 && v.abs() < 1e-10 && w.abs() < 1e-10);

        let (u, v, w) = barycentric(10.0 / 3.0, 10.0 / 3.0, &p0, &p1, &p2);
        for weight in [u, v, w] {
            assert!((weight - 1.0 / 3.0).abs() < 1e-10, "centroid weight should be 1/3");
        }
    }

    #[test]
    fn test_barycentric_outside_is_negative() {
        let p0 = Observation::new(0.0, 0.0, 0.0);
        let p1 = Observation::new(10.0, 0.0, 0.0);
        let p2 = Observation::new(0.0, 10.0, 0.0);

        let (u, _, _) = barycentric(20.0, 20.0, &p0, &p1, &p2);
        assert!(u < 0.0, "point outside triangle must have a negative weight");
    }
}
