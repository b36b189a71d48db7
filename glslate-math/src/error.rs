/// Error categories for vector and matrix operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Operand dimensions or shapes do not agree for the attempted operation.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Matrix source is empty or not rectangular.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Row or column index outside the matrix bounds.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// Replacement data length does not match the target row or column.
    #[error("Length mismatch: {0}")]
    LengthMismatch(String),

    /// Operation is undefined for a zero-magnitude vector.
    #[error("Degenerate vector: {0}")]
    DegenerateVector(String),
}

impl MathError {
    // Helper constructors for common error scenarios

    pub fn vector_dimensions(operation: &str, lhs: usize, rhs: usize) -> Self {
        Self::DimensionMismatch(format!(
            "{operation} requires operands of equal dimension, got {lhs} and {rhs}"
        ))
    }

    pub fn cross_requires_3d(lhs: usize, rhs: usize) -> Self {
        Self::DimensionMismatch(format!(
            "cross product is only defined for 3-dimensional vectors, got {lhs} and {rhs}"
        ))
    }

    pub fn matrix_shapes(operation: &str, a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch(format!(
            "{operation} shapes do not agree: {}x{} and {}x{}",
            a.0, a.1, b.0, b.1
        ))
    }

    pub fn empty_source() -> Self {
        Self::InvalidShape("matrix source must be a non-empty 2D array".to_string())
    }

    pub fn jagged_source(row: usize, expected: usize, actual: usize) -> Self {
        Self::InvalidShape(format!(
            "row {row} has length {actual}, expected {expected}"
        ))
    }

    pub fn row_out_of_range(index: usize, rows: usize) -> Self {
        Self::IndexOutOfRange(format!("row index {index} outside [0, {rows})"))
    }

    pub fn col_out_of_range(index: usize, cols: usize) -> Self {
        Self::IndexOutOfRange(format!("column index {index} outside [0, {cols})"))
    }

    pub fn replacement_length(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch(format!(
            "replacement values have length {actual}, expected {expected}"
        ))
    }

    pub fn zero_magnitude() -> Self {
        Self::DegenerateVector("cannot normalize a zero vector".to_string())
    }
}
