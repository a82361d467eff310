use nalgebra::{DMatrix, DVector};

use crate::consts::FLOAT_COMPARISON_EPSILON;
use crate::error::SimulationError;

/// Expected returns and covariance for a fixed universe of assets.
///
/// Immutable for the lifetime of a run. Validation happens here, eagerly,
/// so the evaluation hot path can assume the shapes line up.
#[derive(Debug, Clone)]
pub struct MarketModel {
    expected_returns: DVector<f64>,
    covariance: DMatrix<f64>,
}

impl MarketModel {
    /// Builds a market model, rejecting dimension mismatches and
    /// asymmetric covariance matrices up front.
    pub fn new(
        expected_returns: Vec<f64>,
        covariance: DMatrix<f64>,
    ) -> Result<Self, SimulationError> {
        let n = expected_returns.len();
        if covariance.nrows() != covariance.ncols() {
            return Err(SimulationError::ShapeMismatch {
                what: "covariance matrix columns",
                expected: covariance.nrows(),
                actual: covariance.ncols(),
            });
        }
        if covariance.nrows() != n {
            return Err(SimulationError::ShapeMismatch {
                what: "covariance matrix rows",
                expected: n,
                actual: covariance.nrows(),
            });
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if (covariance[(i, j)] - covariance[(j, i)]).abs() > FLOAT_COMPARISON_EPSILON {
                    return Err(SimulationError::InvalidCovariance {
                        reason: format!(
                            "matrix is not symmetric at ({i}, {j}): {} vs {}",
                            covariance[(i, j)],
                            covariance[(j, i)]
                        ),
                    });
                }
            }
        }

        Ok(MarketModel {
            expected_returns: DVector::from_vec(expected_returns),
            covariance,
        })
    }

    pub fn asset_count(&self) -> usize {
        self.expected_returns.len()
    }

    pub fn expected_returns(&self) -> &DVector<f64> {
        &self.expected_returns
    }

    pub fn covariance(&self) -> &DMatrix<f64> {
        &self.covariance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_square_covariance() {
        let cov = DMatrix::from_row_slice(2, 3, &[0.1, 0.0, 0.0, 0.0, 0.2, 0.0]);
        let result = MarketModel::new(vec![0.1, 0.2], cov);
        assert!(
            matches!(result, Err(SimulationError::ShapeMismatch { .. })),
            "Non-square covariance should be a shape mismatch"
        );
    }

    #[test]
    fn test_rejects_dimension_disagreement() {
        let cov = DMatrix::from_row_slice(3, 3, &[0.1, 0.0, 0.0, 0.0, 0.2, 0.0, 0.0, 0.0, 0.3]);
        let result = MarketModel::new(vec![0.1, 0.2], cov);
        assert!(
            matches!(result, Err(SimulationError::ShapeMismatch { .. })),
            "Covariance side must match the returns vector length"
        );
    }

    #[test]
    fn test_rejects_asymmetric_covariance() {
        let cov = DMatrix::from_row_slice(2, 2, &[0.1, 0.05, 0.02, 0.2]);
        let result = MarketModel::new(vec![0.1, 0.2], cov);
        assert!(
            matches!(result, Err(SimulationError::InvalidCovariance { .. })),
            "Asymmetric covariance should be rejected at construction"
        );
    }

    #[test]
    fn test_accepts_valid_model() {
        let cov = DMatrix::from_row_slice(2, 2, &[0.01, 0.0, 0.0, 0.04]);
        let market = MarketModel::new(vec![0.10, 0.20], cov).unwrap();
        assert_eq!(market.asset_count(), 2);
    }
}
