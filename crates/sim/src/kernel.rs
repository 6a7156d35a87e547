//! The 3x3 convolution kernel used by the diffusion operator.

use petri_core::error::SimError;
use serde_json::Value;

/// Default kernel: a distance-weighted discrete Laplacian.
///
/// ```text
///   0.05  0.2  0.05
///   0.2  -1.0  0.2
///   0.05  0.2  0.05
/// ```
const DEFAULT_WEIGHTS: [[f64; 3]; 3] = [
    [0.05, 0.2, 0.05],
    [0.2, -1.0, 0.2],
    [0.05, 0.2, 0.05],
];

/// A 3x3 matrix of convolution weights.
///
/// The shape is fixed by the type; construction from untyped JSON validates
/// it and fails fast on anything that is not exactly 3 rows of 3 numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel([[f64; 3]; 3]);

impl Default for Kernel {
    fn default() -> Self {
        Self(DEFAULT_WEIGHTS)
    }
}

impl From<[[f64; 3]; 3]> for Kernel {
    fn from(weights: [[f64; 3]; 3]) -> Self {
        Self(weights)
    }
}

impl Kernel {
    /// Creates a kernel from explicit weights.
    pub fn new(weights: [[f64; 3]; 3]) -> Self {
        Self(weights)
    }

    /// Weight at kernel position (`row`, `col`), each in 0..3.
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    /// The center weight, applied to the cell's own snapshot.
    pub fn center(&self) -> f64 {
        self.0[1][1]
    }

    /// The raw weight matrix.
    pub fn weights(&self) -> [[f64; 3]; 3] {
        self.0
    }

    /// Parses a kernel from a JSON array of arrays, validating the 3x3 shape.
    ///
    /// Returns `SimError::InvalidKernel` when the row or column count is
    /// wrong, and `SimError::InvalidKernelEntry` when an entry is not a
    /// number.
    pub fn from_json(value: &Value) -> Result<Self, SimError> {
        let rows = value.as_array().ok_or(SimError::InvalidKernel {
            rows: 0,
            cols: 0,
        })?;
        if rows.len() != 3 {
            return Err(SimError::InvalidKernel {
                rows: rows.len(),
                cols: rows.first().and_then(Value::as_array).map_or(0, Vec::len),
            });
        }
        let mut weights = [[0.0; 3]; 3];
        for (i, row) in rows.iter().enumerate() {
            let cols = row.as_array().ok_or(SimError::InvalidKernel {
                rows: rows.len(),
                cols: 0,
            })?;
            if cols.len() != 3 {
                return Err(SimError::InvalidKernel {
                    rows: rows.len(),
                    cols: cols.len(),
                });
            }
            for (j, entry) in cols.iter().enumerate() {
                weights[i][j] = entry
                    .as_f64()
                    .ok_or(SimError::InvalidKernelEntry { row: i, col: j })?;
            }
        }
        Ok(Self(weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_weighted_laplacian() {
        let k = Kernel::default();
        assert!((k.center() - (-1.0)).abs() < f64::EPSILON);
        assert!((k.weight(0, 1) - 0.2).abs() < f64::EPSILON);
        assert!((k.weight(0, 0) - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn default_weights_sum_to_zero() {
        // A Laplacian kernel must leave a uniform field unchanged.
        let k = Kernel::default();
        let sum: f64 = (0..3)
            .flat_map(|i| (0..3).map(move |j| (i, j)))
            .map(|(i, j)| k.weight(i, j))
            .sum();
        assert!(sum.abs() < 1e-12, "kernel weights sum to {sum}");
    }

    #[test]
    fn from_json_accepts_well_formed_matrix() {
        let k = Kernel::from_json(&json!([
            [0.0, 1.0, 0.0],
            [1.0, -4.0, 1.0],
            [0.0, 1.0, 0.0],
        ]))
        .unwrap();
        assert!((k.center() - (-4.0)).abs() < f64::EPSILON);
        assert!((k.weight(2, 1) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_json_accepts_integer_entries() {
        let k = Kernel::from_json(&json!([[0, 1, 0], [1, -4, 1], [0, 1, 0]])).unwrap();
        assert!((k.weight(1, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_json_rejects_wrong_row_count() {
        let result = Kernel::from_json(&json!([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
        assert!(matches!(
            result,
            Err(SimError::InvalidKernel { rows: 2, .. })
        ));
    }

    #[test]
    fn from_json_rejects_wrong_column_count() {
        let result = Kernel::from_json(&json!([
            [1.0, 2.0, 3.0],
            [4.0, 5.0],
            [6.0, 7.0, 8.0],
        ]));
        assert!(matches!(
            result,
            Err(SimError::InvalidKernel { rows: 3, cols: 2 })
        ));
    }

    #[test]
    fn from_json_rejects_non_array() {
        assert!(Kernel::from_json(&json!("not a matrix")).is_err());
        assert!(Kernel::from_json(&json!(3.0)).is_err());
    }

    #[test]
    fn from_json_rejects_non_numeric_entry() {
        let result = Kernel::from_json(&json!([
            [0.0, 0.0, 0.0],
            [0.0, "x", 0.0],
            [0.0, 0.0, 0.0],
        ]));
        assert!(matches!(
            result,
            Err(SimError::InvalidKernelEntry { row: 1, col: 1 })
        ));
    }
}
