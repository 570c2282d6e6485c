//! Interpolated grid fields.

use obs_common::GridSpec;

/// A regular grid of interpolated values.
///
/// Values are stored row-major, `j * nx + i`, with `j` increasing
/// northwards. Cells without a valid estimate hold NaN; the renderer masks
/// them.
#[derive(Debug, Clone)]
pub struct GridField {
    pub spec: GridSpec,
    values: Vec<f64>,
}

impl GridField {
    /// Create a field with every cell unset (NaN).
    pub fn unset(spec: GridSpec) -> Self {
        let values = vec![f64::NAN; spec.len()];
        Self { spec, values }
    }

    /// Value at grid position (i, j). Out-of-range positions are NaN.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i >= self.spec.nx || j >= self.spec.ny {
            return f64::NAN;
        }
        self.values[self.spec.flat_index(i, j)]
    }

    /// Set the value at grid position (i, j).
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.spec.flat_index(i, j);
        self.values[idx] = value;
    }

    /// Whether the cell holds a valid (unmasked) estimate.
    pub fn is_valid(&self, i: usize, j: usize) -> bool {
        !self.get(i, j).is_nan()
    }

    /// Number of cells with a valid estimate.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    /// Minimum and maximum of the valid values, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in &self.values {
            if v.is_nan() {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        range
    }

    /// Raw row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
