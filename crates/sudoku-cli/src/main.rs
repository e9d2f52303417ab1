mod input;
mod render;

use clap::Parser;
use std::io::{self, BufRead, Write};
use sudoku_engine::{Generator, Grid, Solver, DEFAULT_CLUES};

/// Generate 9x9 Sudoku puzzles, edit them, and watch a backtracking solver
/// work through them.
#[derive(Parser)]
#[command(name = "sudoku", version, about)]
struct Args {
    /// Filled cells left in the generated puzzle (0-81, higher is easier)
    #[arg(short, long, default_value_t = DEFAULT_CLUES)]
    clues: usize,

    /// Seed for deterministic generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds between animation frames while solving
    #[arg(short, long, default_value_t = 10)]
    delay: u64,

    /// Print the solution directly instead of animating the search
    #[arg(long)]
    no_animate: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    let original = generator.generate(args.clues)?;
    let mut board = original.clone();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    render::draw(&mut out, &board, true)?;
    loop {
        write!(out, "\n[s]olve  [e]dit a cell  [r]eset  [q]uit > ")?;
        out.flush()?;

        let Some(line) = input::read_line(&mut input)? else {
            break;
        };
        match line.trim() {
            "s" => solve_board(&mut out, &board, &args)?,
            "e" => edit_cell(&mut input, &mut out, &mut board)?,
            "r" => {
                board = original.clone();
                render::draw(&mut out, &board, true)?;
            }
            "q" => break,
            "" => {}
            other => writeln!(out, "unknown command {:?}", other)?,
        }
    }

    Ok(())
}

/// Solve a copy of the board, leaving the board itself untouched.
fn solve_board(out: &mut io::Stdout, board: &Grid, args: &Args) -> io::Result<()> {
    let mut work = board.clone();
    let mut solver = Solver::new();

    let solved = if args.no_animate {
        solver.solve(&mut work)
    } else {
        render::draw(out, &work, true)?;
        let delay = args.delay;
        solver.solve_watched(&mut work, &mut |snapshot| {
            // A lost frame only costs animation, never correctness.
            let _ = render::move_cursor(out, 0, 0);
            let _ = render::draw(out, snapshot, false);
            render::pause(delay);
        })
    };

    if solved {
        render::draw(out, &work, true)?;
        writeln!(out, "\nSolved.")?;
    } else {
        writeln!(out, "\nNo solution exists for the current board.")?;
    }
    Ok(())
}

/// Apply one user move. Out-of-range input is rejected before it reaches
/// the grid; a legal write that conflicts with another cell is applied but
/// flagged.
fn edit_cell(
    input: &mut impl BufRead,
    out: &mut io::Stdout,
    board: &mut Grid,
) -> io::Result<()> {
    let Some((row, col, value)) = input::read_user_move(input, out)? else {
        return Ok(());
    };

    match board.set_checked(row, col, value) {
        Ok(()) => {
            render::draw(out, board, true)?;
            if !board.is_consistent() {
                writeln!(out, "\nNote: that value conflicts with another cell.")?;
            }
        }
        Err(err) => writeln!(out, "rejected: {}", err)?,
    }
    Ok(())
}
