use std::fmt;

use super::Coord;

/// An error raised by grid construction or cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    InvalidDimensions { rows: usize, cols: usize },
    /// A coordinate outside `[0, rows) x [0, cols)`.
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {}x{}: both must be positive", rows, cols)
            }
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {} is outside the {}x{} grid", coord, rows, cols)
            }
        }
    }
}

impl std::error::Error for GridError {}
