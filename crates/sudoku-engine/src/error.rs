use std::fmt;

use crate::grid::{CELL_COUNT, GRID_SIZE};

/// Errors for configuration and user-supplied input. An unsolvable grid is
/// not an error; the solver reports it as a `false` return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested clue count lies outside `0..=81`.
    ClueCountOutOfRange(usize),
    /// A row or column coordinate lies outside `0..9`.
    PositionOutOfRange { row: usize, col: usize },
    /// A cell value other than 1-9 or the empty sentinel.
    ValueOutOfRange(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ClueCountOutOfRange(clues) => {
                write!(f, "clue count {} is outside 0..={}", clues, CELL_COUNT)
            }
            Error::PositionOutOfRange { row, col } => {
                write!(
                    f,
                    "position ({}, {}) is outside the {}x{} grid",
                    row, col, GRID_SIZE, GRID_SIZE
                )
            }
            Error::ValueOutOfRange(value) => {
                write!(f, "value {} is not 1-{} or empty", value, GRID_SIZE)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Shorthand for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
