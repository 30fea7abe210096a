// ============================================================================
// Vector Errors
// Error types for vector construction and arithmetic
// ============================================================================

use std::fmt;

/// Broad classification of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input: empty or unconvertible coordinates, wrong dimension
    InvalidArgument,
    /// Normalizing, projecting onto, or measuring an angle against a zero vector
    DivisionByZero,
    /// Decimal range exceeded or a transcendental left its domain
    Arithmetic,
}

/// Errors that can occur while building or combining vectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Coordinate sequence was empty
    EmptyCoordinates,
    /// A coordinate could not be converted to an exact decimal
    InvalidCoordinate(String),
    /// Operands have different dimensions under the strict policy
    DimensionMismatch { left: usize, right: usize },
    /// Operation is only defined for one dimension (cross product, areas)
    UnsupportedDimension {
        operation: &'static str,
        required: usize,
        found: usize,
    },
    /// Configuration failed validation
    InvalidConfig(String),
    /// Attempted to normalize the zero vector
    ZeroVector,
    /// Result exceeded the decimal range
    Overflow,
    /// Cosine fell outside [-1, 1] with clamping disabled
    OutOfDomain,
}

impl VectorError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::EmptyCoordinates
            | VectorError::InvalidCoordinate(_)
            | VectorError::DimensionMismatch { .. }
            | VectorError::UnsupportedDimension { .. }
            | VectorError::InvalidConfig(_) => ErrorKind::InvalidArgument,
            VectorError::ZeroVector => ErrorKind::DivisionByZero,
            VectorError::Overflow | VectorError::OutOfDomain => ErrorKind::Arithmetic,
        }
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        self.kind() == ErrorKind::DivisionByZero
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::EmptyCoordinates => write!(f, "the coordinates must be nonempty"),
            VectorError::InvalidCoordinate(input) => {
                write!(f, "invalid coordinate: could not convert {:?} to a decimal", input)
            },
            VectorError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: left operand has {} coordinates, right has {}",
                left, right
            ),
            VectorError::UnsupportedDimension {
                operation,
                required,
                found,
            } => write!(
                f,
                "{} requires {}-dimensional vectors, got dimension {}",
                operation, required, found
            ),
            VectorError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            VectorError::ZeroVector => write!(f, "cannot normalize the zero vector"),
            VectorError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            VectorError::OutOfDomain => {
                write!(f, "cosine outside [-1, 1]: arccos is undefined")
            },
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            VectorError::ZeroVector.to_string(),
            "cannot normalize the zero vector"
        );
        assert_eq!(
            VectorError::EmptyCoordinates.to_string(),
            "the coordinates must be nonempty"
        );
        assert_eq!(
            VectorError::UnsupportedDimension {
                operation: "cross product",
                required: 3,
                found: 2,
            }
            .to_string(),
            "cross product requires 3-dimensional vectors, got dimension 2"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(VectorError::EmptyCoordinates.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            VectorError::DimensionMismatch { left: 2, right: 3 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(VectorError::ZeroVector.kind(), ErrorKind::DivisionByZero);
        assert_eq!(VectorError::Overflow.kind(), ErrorKind::Arithmetic);

        assert!(VectorError::InvalidCoordinate("x".into()).is_invalid_argument());
        assert!(VectorError::ZeroVector.is_division_by_zero());
        assert!(!VectorError::OutOfDomain.is_division_by_zero());
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(VectorError::Overflow, VectorError::Overflow);
        assert_ne!(VectorError::Overflow, VectorError::OutOfDomain);
    }
}
