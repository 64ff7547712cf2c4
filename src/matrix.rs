//! Dense cost matrix with construction-time validation.

use std::error::Error;
use std::fmt;

use crate::traits::CostSource;

/// Errors raised when building a [`CostMatrix`] from untrusted rows.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A row's length differs from the number of rows.
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// An entry is negative, NaN, or infinite.
    InvalidCost { from: usize, to: usize, value: f64 },
    /// A stop's cost to itself is not zero.
    NonZeroDiagonal { stop: usize, value: f64 },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NotSquare { row, len, expected } => {
                write!(f, "row {row} has {len} entries, expected {expected}")
            }
            MatrixError::InvalidCost { from, to, value } => {
                write!(
                    f,
                    "cost from {from} to {to} is {value}, expected a finite non-negative value"
                )
            }
            MatrixError::NonZeroDiagonal { stop, value } => {
                write!(f, "stop {stop} has non-zero self-cost {value}")
            }
        }
    }
}

impl Error for MatrixError {}

/// A dense n×n travel cost matrix stored in row-major order.
///
/// Entry `(from, to)` is the cost of travelling from stop `from` to stop
/// `to`. Entries need not be symmetric; the diagonal is always zero.
/// Validation happens once at construction, so a `CostMatrix` handed to
/// the solver is known to be well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    stops: usize,
}

impl CostMatrix {
    /// Builds a matrix from explicit rows, validating shape and entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);

        for (from, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::NotSquare {
                    row: from,
                    len: row.len(),
                    expected: n,
                });
            }
            for (to, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(MatrixError::InvalidCost { from, to, value });
                }
                if from == to && value != 0.0 {
                    return Err(MatrixError::NonZeroDiagonal { stop: from, value });
                }
                data.push(value);
            }
        }

        Ok(Self { data, stops: n })
    }

    /// Builds an n×n matrix from a cost function.
    ///
    /// The diagonal is forced to zero without consulting the function;
    /// off-diagonal values are validated the same way as
    /// [`from_rows`](CostMatrix::from_rows).
    pub fn from_fn(
        stops: usize,
        mut cost: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, MatrixError> {
        let mut data = Vec::with_capacity(stops * stops);

        for from in 0..stops {
            for to in 0..stops {
                if from == to {
                    data.push(0.0);
                    continue;
                }
                let value = cost(from, to);
                if !value.is_finite() || value < 0.0 {
                    return Err(MatrixError::InvalidCost { from, to, value });
                }
                data.push(value);
            }
        }

        Ok(Self { data, stops })
    }

    /// Travel cost from one stop to another.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.stops && to < self.stops, "stop index out of bounds");
        self.data[from * self.stops + to]
    }

    /// Number of stops covered by this matrix.
    pub fn stops(&self) -> usize {
        self.stops
    }

    /// `true` if the matrix covers no stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops == 0
    }

    /// `true` if every pair of entries mirrors within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for from in 0..self.stops {
            for to in (from + 1)..self.stops {
                if (self.get(from, to) - self.get(to, from)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl CostSource for CostMatrix {
    fn stops(&self) -> usize {
        self.stops
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_valid() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 5.0],
            vec![1.0, 0.0, 2.0],
            vec![5.0, 2.0, 0.0],
        ])
        .expect("valid matrix");

        assert_eq!(matrix.stops(), 3);
        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.get(2, 1), 2.0);
        assert_eq!(matrix.get(1, 1), 0.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_rows_negative_cost() {
        let err = CostMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidCost {
                from: 0,
                to: 1,
                value: -1.0
            }
        );
    }

    #[test]
    fn test_from_rows_nan_cost() {
        let err = CostMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::InvalidCost { from: 0, to: 1, .. }
        ));
    }

    #[test]
    fn test_from_rows_nonzero_diagonal() {
        let err = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 3.0]]).unwrap_err();
        assert_eq!(err, MatrixError::NonZeroDiagonal { stop: 1, value: 3.0 });
    }

    #[test]
    fn test_asymmetric_is_valid() {
        let matrix =
            CostMatrix::from_rows(vec![vec![0.0, 10.0], vec![15.0, 0.0]]).expect("valid matrix");
        assert!(!matrix.is_symmetric(1e-10));
        assert_eq!(matrix.get(0, 1), 10.0);
        assert_eq!(matrix.get(1, 0), 15.0);
    }

    #[test]
    fn test_symmetric_probe() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 4.0, 7.0],
            vec![4.0, 0.0, 3.0],
            vec![7.0, 3.0, 0.0],
        ])
        .expect("valid matrix");
        assert!(matrix.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_fn_forces_diagonal() {
        let matrix = CostMatrix::from_fn(3, |from, to| (from + to) as f64).expect("valid matrix");
        for stop in 0..3 {
            assert_eq!(matrix.get(stop, stop), 0.0);
        }
        assert_eq!(matrix.get(1, 2), 3.0);
    }

    #[test]
    fn test_from_fn_rejects_bad_costs() {
        let err = CostMatrix::from_fn(2, |_, _| -2.0).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidCost { .. }));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = CostMatrix::from_rows(Vec::new()).expect("empty is valid");
        assert!(matrix.is_empty());
        assert_eq!(matrix.stops(), 0);
    }
}
