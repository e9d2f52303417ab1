use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Sentinel for a cell with no value.
pub const EMPTY: u8 = 0;

/// Side length of the grid (and of the value domain).
pub const GRID_SIZE: usize = 9;

/// Total number of cells.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Side length of a box.
const BOX_SIZE: usize = 3;

/// A cell coordinate, row and column each in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Coordinates are expected to be in `0..9`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into the 81-cell sequence.
    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Top-left corner of the 3x3 box containing this position.
    pub fn box_origin(self) -> Position {
        Position::new(
            self.row / BOX_SIZE * BOX_SIZE,
            self.col / BOX_SIZE * BOX_SIZE,
        )
    }

    /// All 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
    }
}

/// A 9x9 Sudoku grid. Cells hold 1-9 or [`EMPTY`].
///
/// `Clone` yields a fully independent duplicate of all 81 cells, so a puzzle
/// can be solved non-destructively while the original is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// A grid with all 81 cells empty.
    pub fn empty() -> Self {
        Self {
            cells: [[EMPTY; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Value at `pos` ([`EMPTY`] for a blank cell).
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Write `value` at `pos` without bounds or constraint checks.
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= GRID_SIZE as u8);
        self.cells[pos.row][pos.col] = value;
    }

    /// Reset the cell at `pos` to [`EMPTY`].
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = EMPTY;
    }

    /// Validated single-cell write for user-supplied coordinates and values.
    /// Out-of-range input is rejected before anything is written. A value of
    /// [`EMPTY`] clears the cell. Constraint legality is not checked here;
    /// callers that want it use [`Grid::is_valid`] first.
    pub fn set_checked(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(Error::PositionOutOfRange { row, col });
        }
        if value > GRID_SIZE as u8 {
            return Err(Error::ValueOutOfRange(value));
        }
        self.cells[row][col] = value;
        Ok(())
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != EMPTY)
            .count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.filled_count()
    }

    /// Whether no empty cell remains.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// First empty cell in row-major order, or `None` when the grid is full.
    /// The scan order is fixed; solver behavior depends on it.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos) == EMPTY)
    }

    /// Whether placing `value` at `pos` violates the row, column, or box
    /// uniqueness constraints. Call on a cell that does not already carry
    /// `value`; `value` must be 1-9, never [`EMPTY`].
    pub fn is_valid(&self, pos: Position, value: u8) -> bool {
        debug_assert!((1..=GRID_SIZE as u8).contains(&value));

        for i in 0..GRID_SIZE {
            if self.cells[pos.row][i] == value || self.cells[i][pos.col] == value {
                return false;
            }
        }

        let origin = pos.box_origin();
        for row in origin.row..origin.row + BOX_SIZE {
            for col in origin.col..origin.col + BOX_SIZE {
                if self.cells[row][col] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Whether every filled cell is constraint-consistent with every other
    /// filled cell.
    pub fn is_consistent(&self) -> bool {
        Position::all().all(|pos| {
            let value = self.get(pos);
            value == EMPTY || !self.conflicts_elsewhere(pos, value)
        })
    }

    /// Whether `value` appears in the units of `pos` at any cell other than
    /// `pos` itself.
    fn conflicts_elsewhere(&self, pos: Position, value: u8) -> bool {
        for i in 0..GRID_SIZE {
            if i != pos.col && self.cells[pos.row][i] == value {
                return true;
            }
            if i != pos.row && self.cells[i][pos.col] == value {
                return true;
            }
        }

        let origin = pos.box_origin();
        for row in origin.row..origin.row + BOX_SIZE {
            for col in origin.col..origin.col + BOX_SIZE {
                if (row != pos.row || col != pos.col) && self.cells[row][col] == value {
                    return true;
                }
            }
        }

        false
    }

    /// Parse an 81-character compact string, `1`-`9` for filled cells and
    /// `.` or `0` for empty ones. Returns `None` on any other shape.
    pub fn from_string(s: &str) -> Option<Grid> {
        let mut grid = Grid::empty();
        let mut positions = Position::all();

        for ch in s.chars() {
            let pos = positions.next()?;
            match ch {
                '.' | '0' => grid.set(pos, EMPTY),
                '1'..='9' => grid.set(pos, ch as u8 - b'0'),
                _ => return None,
            }
        }

        if positions.next().is_some() {
            return None;
        }
        Some(grid)
    }

    /// Compact 81-character form of this grid, `.` for empty cells.
    pub fn to_string_compact(&self) -> String {
        Position::all()
            .map(|pos| match self.get(pos) {
                EMPTY => '.',
                value => (b'0' + value) as char,
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    /// Human-readable 9x9 layout: empty cells as two spaces, values as the
    /// digit followed by a space, an extra space after every third column,
    /// and a newline after each row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match self.cells[row][col] {
                    EMPTY => write!(f, "  ")?,
                    value => write!(f, "{} ", value)?,
                }
                if col % BOX_SIZE == BOX_SIZE - 1 && col != GRID_SIZE - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
