use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use sudoku_engine::Grid;

/// Draw the grid. With `clear`, wipe the screen and home the cursor first;
/// that is a terminal side effect, separate from the formatting itself.
pub fn draw(out: &mut impl Write, grid: &Grid, clear: bool) -> io::Result<()> {
    if clear {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    write!(out, "{grid}")?;
    out.flush()
}

/// Reposition the terminal cursor. Redrawing from a fixed origin keeps the
/// solve animation from flickering.
pub fn move_cursor(out: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    execute!(out, MoveTo(x, y))
}

/// Pause between animation frames.
pub fn pause(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}
