use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinRegError {
    #[error("matrix is singular or nearly singular (pivot column {column})")]
    SingularMatrix { column: usize },

    #[error("shape mismatch for {what}: got {got}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error("input must contain at least one sample")]
    EmptyInput,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, LinRegError>;
