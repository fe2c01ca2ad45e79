use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CurveError>;

/// Failures reported by the solver, the spline and the helper modules.
///
/// Every variant is an immediate failure: nothing is retried and no partial
/// result is returned alongside it.
#[derive(Error, Debug)]
pub enum CurveError {
    /// An argument is outside its domain (non-finite slope, off-band matrix write, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vector does not match the size of the matrix it is used with.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A sequential query went backwards within one evaluation pass.
    #[error("query x = {x} precedes previous query x = {previous}, queries must be sorted")]
    OutOfOrderQuery { x: f64, previous: f64 },

    /// Query outside the fitted domain.
    #[error("x = {x} is outside of [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },

    #[error("at least {need} points are required, got {got}")]
    InsufficientPoints { got: usize, need: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
