use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 11, tags = ["y2021", "grid", "simulation"])]
pub struct Solver;

const MAX_STEPS: usize = 100_000;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(ParseError::InvalidFormat(format!("bad energy {:?}", b as char)))
            }
        })
    }
}

/// Advance one step, returning how many octopuses flashed
fn step(grid: &mut Grid<u8>) -> usize {
    let mut pending = Vec::new();
    for pos in grid.positions() {
        grid[pos] += 1;
        if grid[pos] == 10 {
            pending.push(pos);
        }
    }
    let mut flashed = 0;
    while let Some(pos) = pending.pop() {
        flashed += 1;
        let neighbors: Vec<_> = grid.neighbors(pos).collect();
        for n in neighbors {
            grid[n] += 1;
            if grid[n] == 10 {
                pending.push(n);
            }
        }
    }
    for pos in grid.positions() {
        if grid[pos] > 9 {
            grid[pos] = 0;
        }
    }
    flashed
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        let flashes: usize = (0..100).map(|_| step(&mut grid)).sum();
        Ok(flashes.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        let all = grid.width() * grid.height();
        (1..=MAX_STEPS)
            .find(|_| step(&mut grid) == all)
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::failed("octopuses never synchronise"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn flashes_after_100_steps() {
        let mut grid = Solver::parse(EXAMPLE).unwrap();
        let first_ten: usize = (0..10).map(|_| step(&mut grid)).sum();
        assert_eq!(first_ten, 204);
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "1656");
    }

    #[test]
    fn first_synchronised_step() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "195");
    }
}
