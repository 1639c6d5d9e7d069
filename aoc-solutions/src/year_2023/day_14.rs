use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 14, tags = ["y2023", "grid", "cycle"])]
pub struct Solver;

const ROUND: u8 = b'O';
const CUBE: u8 = b'#';
const SPIN: [Dir; 4] = [Dir::North, Dir::West, Dir::South, Dir::East];

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| match b {
            b'O' | b'#' | b'.' => Ok(b),
            other => Err(ParseError::InvalidFormat(format!("bad tile {:?}", other as char))),
        })
    }
}

/// Roll every round rock as far as it goes towards `dir`
pub fn tilt(dish: &mut Grid<u8>, dir: Dir) {
    let (w, h) = (dish.width(), dish.height());
    let (lines, len) = match dir {
        Dir::North | Dir::South => (w, h),
        Dir::East | Dir::West => (h, w),
    };
    for line in 0..lines {
        // k counts from the edge the rocks roll towards
        let at = |k: usize| -> Pos {
            match dir {
                Dir::North => (line, k),
                Dir::South => (line, h - 1 - k),
                Dir::West => (k, line),
                Dir::East => (w - 1 - k, line),
            }
        };
        let mut free = 0;
        for k in 0..len {
            match dish[at(k)] {
                CUBE => free = k + 1,
                ROUND => {
                    dish[at(k)] = b'.';
                    dish[at(free)] = ROUND;
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

/// Total load on the north support beams
pub fn north_load(dish: &Grid<u8>) -> usize {
    dish.iter()
        .filter(|&(_, &b)| b == ROUND)
        .map(|((_, y), _)| dish.height() - y)
        .sum()
}

/// Load after `cycles` spin cycles, skipping ahead once the dish repeats
pub fn load_after_spins(dish: &Grid<u8>, cycles: usize) -> usize {
    let mut dish = dish.clone();
    let mut seen: HashMap<Vec<u8>, usize> = HashMap::new();
    let mut done = 0;
    while done < cycles {
        if let Some(&first) = seen.get(dish.cells()) {
            let period = done - first;
            let left = (cycles - done) % period;
            tracing::debug!(first, period, "spin cycle repeats");
            for _ in 0..left {
                spin(&mut dish);
            }
            return north_load(&dish);
        }
        seen.insert(dish.cells().to_vec(), done);
        spin(&mut dish);
        done += 1;
    }
    north_load(&dish)
}

fn spin(dish: &mut Grid<u8>) {
    for dir in SPIN {
        tilt(dish, dir);
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut dish = shared.clone();
        tilt(&mut dish, Dir::North);
        Ok(north_load(&dish).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(load_after_spins(shared, 1_000_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn one_spin() {
        let mut dish = Solver::parse(EXAMPLE).unwrap();
        spin(&mut dish);
        let expected = Solver::parse(
            "\
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
",
        )
        .unwrap();
        assert_eq!(dish, expected);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "136");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "64");
    }
}
