use thiserror::Error;

/// Errors raised while building or running a simulation.
///
/// Shape and covariance problems are fatal: the run aborts rather than
/// emitting NaN or partial results. `DegenerateSample` never escapes the
/// generator; it exists so the resample path can be exercised directly.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid covariance matrix: {reason}")]
    InvalidCovariance { reason: String },

    #[error("degenerate sample: raw allocation weights summed to zero")]
    DegenerateSample,

    #[error("invalid simulation parameters were passed: {0}")]
    BadParameter(String),
}
