use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DqmError {
    /// Amplitudes whose norm is zero (or not finite) cannot be normalized.
    DegenerateState(String),
    /// Probabilities that are negative, non-finite, or do not sum to 1.
    InvalidDistribution(String),
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for DqmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DqmError::DegenerateState(msg) => write!(f, "Degenerate State: {}", msg),
            DqmError::InvalidDistribution(msg) => write!(f, "Invalid Distribution: {}", msg),
            DqmError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension Mismatch: expected {} amplitudes, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for DqmError {}

impl DqmError {
    pub fn degenerate(message: &str) -> Self { DqmError::DegenerateState(message.to_string()) }
    pub fn invalid_distribution(message: &str) -> Self { DqmError::InvalidDistribution(message.to_string()) }
}

pub type Result<T> = std::result::Result<T, DqmError>;
