//! Albers Equal-Area Conic projection.
//!
//! An equal-area conic projection commonly used for mid-latitude regional
//! analyses (CONUS in particular). It maps a secant cone onto a flat plane
//! while preserving area ratios at the cost of shape distortion.
//!
//! The projection parameters are:
//! - Central meridian (lon0): longitude of the projection origin
//! - Origin latitude (lat0): latitude of the projection origin
//! - Standard parallels: latin1 and latin2 (can be equal for a tangent cone)
//!
//! Spherical formulation (authalic sphere), sufficient for synoptic-scale
//! observation analysis.

use std::f64::consts::PI;

/// Earth radius of the authalic sphere (meters).
const EARTH_RADIUS: f64 = 6_370_997.0;

/// Albers Equal-Area Conic projection parameters.
///
/// Forward transforms map geodetic (lat, lon) in degrees to projected
/// (x, y) in meters; inverse transforms map back.
#[derive(Debug, Clone)]
pub struct AlbersEqualArea {
    /// Central meridian in radians
    pub lon0: f64,
    /// Origin latitude in radians
    pub lat0: f64,
    /// First standard parallel in radians
    pub latin1: f64,
    /// Second standard parallel in radians
    pub latin2: f64,
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Cone constant (n)
    n: f64,
    /// C constant
    c: f64,
    /// Rho at the projection origin
    rho0: f64,
}

impl AlbersEqualArea {
    /// Create a new Albers Equal-Area projection.
    ///
    /// # Arguments
    /// * `lat0_deg` - Origin latitude (degrees)
    /// * `lon0_deg` - Central meridian (degrees)
    /// * `latin1_deg` - First standard parallel (degrees)
    /// * `latin2_deg` - Second standard parallel (degrees)
    pub fn new(lat0_deg: f64, lon0_deg: f64, latin1_deg: f64, latin2_deg: f64) -> Self {
        let to_rad = PI / 180.0;

        let lat0 = lat0_deg * to_rad;
        let lon0 = lon0_deg * to_rad;
        let latin1 = latin1_deg * to_rad;
        let latin2 = latin2_deg * to_rad;

        // Cone constant n
        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            (latin1.sin() + latin2.sin()) / 2.0
        };

        // C constant
        let c = latin1.cos() * latin1.cos() + 2.0 * n * latin1.sin();

        // Rho at the projection origin
        let rho0 = EARTH_RADIUS * (c - 2.0 * n * lat0.sin()).sqrt() / n;

        Self {
            lon0,
            lat0,
            latin1,
            latin2,
            earth_radius: EARTH_RADIUS,
            n,
            c,
            rho0,
        }
    }

    /// CONUS analysis projection: central meridian 97°W, origin 38°N,
    /// standard parallels 20°N and 50°N.
    pub fn conus() -> Self {
        Self::new(38.0, -97.0, 20.0, 50.0)
    }

    /// Convert geodetic coordinates (lat/lon in degrees) to projected
    /// (x, y) in meters.
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let to_rad = PI / 180.0;
        let lat = lat_deg * to_rad;
        let lon = lon_deg * to_rad;

        // Normalize longitude difference to [-π, π]
        let mut dlon = lon - self.lon0;
        while dlon > PI {
            dlon -= 2.0 * PI;
        }
        while dlon < -PI {
            dlon += 2.0 * PI;
        }

        let theta = self.n * dlon;
        let rho = self.earth_radius * (self.c - 2.0 * self.n * lat.sin()).sqrt() / self.n;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();

        (x, y)
    }

    /// Convert projected (x, y) in meters back to geodetic coordinates
    /// (lat/lon in degrees).
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let to_deg = 180.0 / PI;

        let dy = self.rho0 - y;
        let mut rho = (x * x + dy * dy).sqrt();
        let mut theta = x.atan2(dy);
        if self.n < 0.0 {
            rho = -rho;
            theta = (-x).atan2(-dy);
        }

        // Clamp the asin argument against rounding at the projection edge
        let sin_lat = ((self.c - (rho * self.n / self.earth_radius).powi(2)) / (2.0 * self.n))
            .clamp(-1.0, 1.0);

        let lat = sin_lat.asin();
        let lon = self.lon0 + theta / self.n;

        (lat * to_deg, lon * to_deg)
    }

    /// Cone constant of this projection.
    pub fn cone_constant(&self) -> f64 {
        self.n
    }
}
