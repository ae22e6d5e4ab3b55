use std::fmt;

/// Invalid-argument errors raised by the percolation model
///
/// Both variants are caller errors: they are reported immediately and never
/// clamped or substituted with a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    /// Grid size must be at least 1
    InvalidGridSize { size: usize },
    /// Site coordinates outside `[1, size] x [1, size]`
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidGridSize { size } => {
                write!(f, "invalid grid size {size}: the grid must be at least 1x1")
            }
            PercolationError::OutOfBounds { row, col, size } => write!(
                f,
                "site ({row}, {col}) is outside the {size}x{size} grid (valid range is 1..={size})"
            ),
        }
    }
}

impl std::error::Error for PercolationError {}
