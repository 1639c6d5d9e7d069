use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 18, tags = ["y2015", "grid", "simulation"])]
pub struct Solver;

const STEPS: usize = 100;

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| match b {
            b'#' => Ok(true),
            b'.' => Ok(false),
            other => Err(ParseError::InvalidFormat(format!(
                "unexpected light {:?}",
                other as char
            ))),
        })
    }
}

fn light_corners(grid: &mut Grid<bool>) {
    let (w, h) = (grid.width() - 1, grid.height() - 1);
    for corner in [(0, 0), (w, 0), (0, h), (w, h)] {
        grid[corner] = true;
    }
}

fn step(grid: &Grid<bool>) -> Grid<bool> {
    let mut next = grid.clone();
    for pos in grid.positions() {
        let on = grid.neighbors(pos).filter(|&n| grid[n]).count();
        next[pos] = matches!((grid[pos], on), (true, 2) | (_, 3));
    }
    next
}

/// Lights on after `steps` generations; `stuck` keeps the corners lit
pub fn lights_after(initial: &Grid<bool>, steps: usize, stuck: bool) -> usize {
    let mut grid = initial.clone();
    if stuck {
        light_corners(&mut grid);
    }
    for _ in 0..steps {
        grid = step(&grid);
        if stuck {
            light_corners(&mut grid);
        }
    }
    grid.cells().iter().filter(|&&on| on).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lights_after(shared, STEPS, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lights_after(shared, STEPS, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
.#.#.#
...##.
#....#
..#...
#.#..#
####..
";

    #[test]
    fn four_steps() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(lights_after(&grid, 4, false), 4);
    }

    #[test]
    fn five_steps_with_stuck_corners() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(lights_after(&grid, 5, true), 17);
    }
}
