use crate::grid::{Grid, GRID_SIZE};

/// Recursive backtracking solver.
///
/// Each `Solver` owns its own solution counter, so solves stay composable
/// and testable in isolation rather than sharing process-wide state.
pub struct Solver {
    solutions: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver. The diagnostic solution counter starts at its
    /// baseline of 1 (at least one solution expected).
    pub fn new() -> Self {
        Self { solutions: 1 }
    }

    /// Diagnostic counter: the baseline of 1 plus one per complete
    /// constraint-satisfying grid reached. Does not influence the search;
    /// the solver returns after the first success.
    pub fn solutions(&self) -> usize {
        self.solutions
    }

    /// Solve `grid` in place. Returns `true` on success. On failure
    /// (contradictory givens) returns `false` with `grid` restored to its
    /// input state; every tentative assignment on a failing path is undone.
    pub fn solve(&mut self, grid: &mut Grid) -> bool {
        self.solve_watched(grid, &mut |_| {})
    }

    /// [`Solver::solve`] with a visualization hook: `observer` sees the grid
    /// after every tentative assignment. Purely observational; the search
    /// order and outcome are identical to an unwatched solve. Pacing (sleeps
    /// between frames) belongs in the observer, not here.
    pub fn solve_watched(&mut self, grid: &mut Grid, observer: &mut dyn FnMut(&Grid)) -> bool {
        let Some(pos) = grid.first_empty() else {
            self.solutions += 1;
            return true;
        };

        for value in 1..=GRID_SIZE as u8 {
            if grid.is_valid(pos, value) {
                grid.set(pos, value);
                observer(grid);

                if self.solve_watched(grid, observer) {
                    return true;
                }

                grid.clear(pos);
            }
        }

        false
    }
}
