use std::error::Error;
use std::fmt;

/// Custom error type for generation failures
#[derive(Debug)]
pub enum GenerateError {
    /// A scatter or covariance matrix was singular (determinant within
    /// epsilon of zero), so no discriminant direction exists.
    SingularMatrix,
    /// A covariance matrix was not positive-definite (negative
    /// determinant), so its log-determinant is undefined.
    IndefiniteCovariance,
    /// A cluster requested zero samples; index of the offending spec.
    EmptyCluster(usize),
    /// A solver was configured with no usable boundary (vanished
    /// coefficients, or an empty epoch track).
    DegenerateBoundary,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::SingularMatrix => {
                write!(f, "scatter/covariance matrix is singular")
            }
            GenerateError::IndefiniteCovariance => {
                write!(f, "covariance matrix is not positive-definite")
            }
            GenerateError::EmptyCluster(idx) => {
                write!(f, "cluster spec {} requests zero samples", idx)
            }
            GenerateError::DegenerateBoundary => {
                write!(f, "solver configuration yields no usable boundary")
            }
        }
    }
}

impl Error for GenerateError {}
