use thiserror::Error;

/// Failures raised while simulating capital accumulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrowthError {
    /// A caller-supplied argument is out of range (negative period count, wrong state length).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Production k^alpha is undefined over the reals.
    #[error("domain error: capital stock {capital} raised to non-integer alpha {alpha} is undefined")]
    Domain { capital: f64, alpha: f64 },
}

pub type GrowthResult<T> = Result<T, GrowthError>;
