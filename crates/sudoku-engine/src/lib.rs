//! Sudoku engine: grid model, constraint checking, randomized puzzle
//! generation, and recursive backtracking solving.
//!
//! The engine has no terminal dependencies. Front ends observe the solver
//! through [`Solver::solve_watched`] and render however they like.

mod error;
mod generator;
mod grid;
mod solver;

pub use error::{Error, Result};
pub use generator::{Generator, DEFAULT_CLUES};
pub use grid::{Grid, Position, CELL_COUNT, EMPTY, GRID_SIZE};
pub use solver::Solver;
